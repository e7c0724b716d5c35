use super::metrics::ListingMetrics;
use super::weights::WeightMap;
use crate::money::round_ratio;

/// Weighted average over the metrics the listing actually has.
///
/// Weights whose metric is absent (or unknown) are left out of both the numerator and the
/// normalising weight mass. Returns 0.0 when no weight mass remains.
pub fn compute_composite_score(weights: &WeightMap, metrics: &ListingMetrics) -> f64 {
    let mut score = 0.0;
    let mut total_weight = 0.0;

    for (key, weight) in weights {
        let Some(value) = metrics.get(key) else {
            continue;
        };
        score += value * weight;
        total_weight += weight;
    }

    if total_weight == 0.0 {
        return 0.0;
    }

    score / total_weight
}

/// Price paid per unit of `metric`, rounded to four places. `None` unless the metric is
/// strictly positive.
pub fn dollar_per_metric(price_usd: f64, metric: Option<f64>) -> Option<f64> {
    metric
        .filter(|value| *value > 0.0)
        .map(|value| round_ratio(price_usd / value))
}

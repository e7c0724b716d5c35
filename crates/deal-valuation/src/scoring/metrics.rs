use serde::{Deserialize, Serialize};

/// Names of the metrics a weight mapping may refer to.
pub const METRIC_NAMES: [&str; 8] = [
    "cpu_mark_multi",
    "cpu_mark_single",
    "gpu_score",
    "perf_per_watt",
    "ram_capacity",
    "expandability",
    "encoder_capability",
    "ports_fit",
];

/// Performance and quality signals for one listing. `None` means "not scored", not zero.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ListingMetrics {
    pub cpu_mark_multi: Option<f64>,
    pub cpu_mark_single: Option<f64>,
    pub gpu_score: Option<f64>,
    pub perf_per_watt: Option<f64>,
    pub ram_capacity: Option<f64>,
    pub expandability: Option<f64>,
    pub encoder_capability: Option<f64>,
    pub ports_fit: Option<f64>,
}

impl ListingMetrics {
    /// Value of the metric called `name`. Unknown names behave like absent metrics.
    pub fn get(&self, name: &str) -> Option<f64> {
        match name {
            "cpu_mark_multi" => self.cpu_mark_multi,
            "cpu_mark_single" => self.cpu_mark_single,
            "gpu_score" => self.gpu_score,
            "perf_per_watt" => self.perf_per_watt,
            "ram_capacity" => self.ram_capacity,
            "expandability" => self.expandability,
            "encoder_capability" => self.encoder_capability,
            "ports_fit" => self.ports_fit,
            _ => None,
        }
    }

    /// Metrics that carry a value, in `METRIC_NAMES` order.
    pub fn present(&self) -> impl Iterator<Item = (&'static str, f64)> + '_ {
        METRIC_NAMES
            .into_iter()
            .filter_map(move |name| self.get(name).map(|value| (name, value)))
    }
}

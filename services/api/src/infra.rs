use deal_valuation::appraisal::ValuationProfile;
use deal_valuation::config::ValuationSettings;
use deal_valuation::error::AppError;
use metrics_exporter_prometheus::PrometheusHandle;
use serde::de::DeserializeOwned;
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Profile from an explicit path, falling back to the configured settings.
pub(crate) fn load_profile(
    explicit: Option<PathBuf>,
    settings: &ValuationSettings,
) -> Result<ValuationProfile, AppError> {
    let profile = match explicit {
        Some(path) => ValuationProfile::from_path(path)?,
        None => settings.load_profile()?,
    };
    Ok(profile)
}

pub(crate) fn read_json_file<T: DeserializeOwned>(path: &Path) -> Result<T, AppError> {
    let file = File::open(path)?;
    let value = serde_json::from_reader(BufReader::new(file)).map_err(std::io::Error::from)?;
    Ok(value)
}

/// Parse a `group=weight` pair from the command line.
pub(crate) fn parse_weight_pair(raw: &str) -> Result<(String, f64), String> {
    let (name, weight) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected GROUP=WEIGHT, got '{raw}'"))?;
    let name = name.trim();
    if name.is_empty() {
        return Err(format!("missing group name in '{raw}'"));
    }
    let weight = weight
        .trim()
        .parse::<f64>()
        .map_err(|err| format!("failed to parse weight in '{raw}' ({err})"))?;
    Ok((name.to_string(), weight))
}

// summary.rs - Machine-readable run summary

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Parameters and outcome of one execution, written as JSON next to the reports
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunSummary {
    pub version: String,
    pub generated: String,
    pub chromosome: u8,
    pub population: String,
    pub sift_label: String,
    pub analysis: String,
    pub individuals: usize,
    pub filtered_variants: usize,
    pub cohort_variants: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub monte_carlo_runs: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub draw_budget: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
    pub elapsed_seconds: f64,
    pub files: Vec<String>,
}

impl RunSummary {
    pub fn timestamp() -> String {
        chrono::Utc::now().format("%Y-%m-%d %H:%M:%S UTC").to_string()
    }

    /// File names only; the summary lives in the same directory
    pub fn file_names(paths: &[PathBuf]) -> Vec<String> {
        paths
            .iter()
            .filter_map(|p| p.file_name())
            .map(|name| name.to_string_lossy().into_owned())
            .collect()
    }
}

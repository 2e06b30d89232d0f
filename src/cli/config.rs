// config.rs - Configuration file support

use crate::error::{OverlapError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct Config {
    // Selection
    pub chromosome: Option<u8>,
    pub population: Option<String>,

    // Input/Output
    pub columns: Option<String>,
    pub variants: Option<String>,
    pub individuals_dir: Option<String>,
    pub output_dir: Option<String>,

    // Analysis
    pub analysis: Option<String>,
    pub runs: Option<usize>,
    pub draw_budget: Option<usize>,
    pub pair_runs: Option<usize>,
    pub sample_groups: Option<usize>,
    pub sift_threshold: Option<f32>,
    pub seed: Option<u64>,

    // Performance
    pub threads: Option<usize>,

    // Flags
    pub dry_run: Option<bool>,
}

impl Config {
    /// Load configuration from TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            OverlapError::Config(format!(
                "Failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| {
            OverlapError::Config(format!(
                "Failed to parse config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        println!("📄 Loaded configuration from: {}", path.display());
        Ok(config)
    }

    /// Save configuration to TOML file
    pub fn to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let content = toml::to_string_pretty(self)
            .map_err(|e| OverlapError::Config(format!("Failed to serialize config: {}", e)))?;

        fs::write(path, content).map_err(|e| OverlapError::output(path, e))?;

        println!("📄 Saved configuration to: {}", path.display());
        Ok(())
    }

    /// Generate a sample configuration file with comments
    pub fn generate_sample() -> String {
        r#"# mutoverlap.toml - Configuration file for mutoverlap
# Command line arguments will override these settings

# =============================================================================
# SELECTION
# =============================================================================

# Chromosome to analyse (1-22)
chromosome = 22

# Population membership file; its file name labels every output
population = "EUR"

# =============================================================================
# INPUT/OUTPUT
# =============================================================================

# Column-order file (header: 9 metadata columns, then individuals)
columns = "columns.txt"

# Filtered-variant file (default: sifted.SIFT.chr<chr>.txt)
# variants = "sifted.SIFT.chr22.txt"

# Directory of per-individual files chr<chr>.<individual> (default: chr<chr>n)
# individuals_dir = "chr22n"

# Output directory
output_dir = "output_no_sift"

# =============================================================================
# ANALYSIS
# =============================================================================

# Analysis to run: overlap, frequency, all
analysis = "all"

# Monte-Carlo runs and individuals drawn per run
runs = 1000
draw_budget = 52

# Random-pair overlap runs and mutation-count samples (0 disables both)
pair_runs = 1

# Individuals picked for the random mutation-count sample
sample_groups = 26

# Keep only variants with a SIFT score at or below this value
# sift_threshold = 0.05

# Fixed seed for reproducible sampling (omit for entropy)
# seed = 42

# =============================================================================
# PERFORMANCE
# =============================================================================

# Threads for the pairwise matrix
threads = 1

# =============================================================================
# FLAGS
# =============================================================================

# Validate inputs and load the cohort without writing results
dry_run = false
"#
        .to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_config_parses() {
        let config: Config = toml::from_str(&Config::generate_sample()).unwrap();
        assert_eq!(config.chromosome, Some(22));
        assert_eq!(config.population.as_deref(), Some("EUR"));
        assert_eq!(config.runs, Some(1000));
        assert_eq!(config.draw_budget, Some(52));
        assert!(config.sift_threshold.is_none());
        assert_eq!(config.dry_run, Some(false));
    }

    #[test]
    fn test_config_file_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("run.toml");
        let config = Config {
            chromosome: Some(3),
            population: Some("pops/AFR".to_string()),
            seed: Some(9),
            ..Config::default()
        };
        config.to_file(&path).unwrap();
        assert_eq!(Config::from_file(&path).unwrap(), config);
    }

    #[test]
    fn test_bad_config_is_config_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.toml");
        fs::write(&path, "chromosome = \"twenty\"").unwrap();
        assert!(matches!(Config::from_file(&path), Err(OverlapError::Config(_))));
        assert!(matches!(
            Config::from_file(dir.path().join("absent.toml")),
            Err(OverlapError::Config(_))
        ));
    }
}

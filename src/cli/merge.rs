// merge.rs - Merge configuration file with CLI arguments

use crate::cli::{Args, Config};
use crate::error::Result;

impl Args {
    /// Merge with configuration from file.
    /// CLI arguments take precedence over config file values
    pub fn merge_with_config(mut self, config: Config) -> Self {
        // Selection
        if self.chromosome.is_none() {
            self.chromosome = config.chromosome;
        }
        if self.population.is_none() {
            self.population = config.population;
        }

        // Input/Output
        if self.columns.is_none() {
            self.columns = config.columns;
        }
        if self.variants.is_none() {
            self.variants = config.variants;
        }
        if self.individuals_dir.is_none() {
            self.individuals_dir = config.individuals_dir;
        }
        if self.output_dir.is_none() {
            self.output_dir = config.output_dir;
        }

        // Analysis
        if self.analysis.is_none() {
            self.analysis = config.analysis;
        }
        if self.runs.is_none() {
            self.runs = config.runs;
        }
        if self.draw_budget.is_none() {
            self.draw_budget = config.draw_budget;
        }
        if self.pair_runs.is_none() {
            self.pair_runs = config.pair_runs;
        }
        if self.sample_groups.is_none() {
            self.sample_groups = config.sample_groups;
        }
        if self.sift_threshold.is_none() {
            self.sift_threshold = config.sift_threshold;
        }
        if self.seed.is_none() {
            self.seed = config.seed;
        }

        // Performance
        if self.threads.is_none() {
            self.threads = config.threads;
        }

        // Flags (config can only switch on)
        if !self.dry_run && config.dry_run.unwrap_or(false) {
            self.dry_run = true;
        }

        self
    }

    /// Load configuration and merge with CLI args
    pub fn with_config_file(self, config_path: &str) -> Result<Self> {
        let config = Config::from_file(config_path)?;
        Ok(self.merge_with_config(config))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_values_win_over_config() {
        let args = Args {
            chromosome: Some(5),
            runs: Some(10),
            ..Args::default()
        };
        let config = Config {
            chromosome: Some(22),
            population: Some("EUR".to_string()),
            runs: Some(1000),
            dry_run: Some(true),
            ..Config::default()
        };
        let merged = args.merge_with_config(config);

        assert_eq!(merged.chromosome, Some(5));
        assert_eq!(merged.runs, Some(10));
        assert_eq!(merged.population.as_deref(), Some("EUR"));
        assert!(merged.dry_run);
        assert!(merged.seed.is_none());
    }
}

// validation.rs - Input validation utilities

use crate::cli::args::Args;
use crate::core::SamplerConfig;
use crate::data::CohortSource;
use crate::error::{OverlapError, Result};
use std::path::{Path, PathBuf};
use std::str::FromStr;

pub const DEFAULT_COLUMNS_FILE: &str = "columns.txt";
pub const DEFAULT_OUTPUT_DIR: &str = "output_no_sift";
pub const DEFAULT_RUNS: usize = 1000;
pub const DEFAULT_DRAW_BUDGET: usize = 52;
pub const DEFAULT_PAIR_RUNS: usize = 1;
pub const DEFAULT_SAMPLE_GROUPS: usize = 26;
pub const DEFAULT_THREADS: usize = 1;

/// Which result families to produce
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Analysis {
    /// Matrices, gene pairs and per-individual totals
    Overlap,
    /// Monte-Carlo overlap runs and histograms
    Frequency,
    All,
}

impl FromStr for Analysis {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "overlap" => Ok(Analysis::Overlap),
            "frequency" | "freq" => Ok(Analysis::Frequency),
            "all" => Ok(Analysis::All),
            _ => Err(format!(
                "Invalid analysis: {}. Use: overlap, frequency, all",
                s
            )),
        }
    }
}

impl Analysis {
    pub fn as_str(&self) -> &'static str {
        match self {
            Analysis::Overlap => "overlap",
            Analysis::Frequency => "frequency",
            Analysis::All => "all",
        }
    }

    pub fn includes_overlap(&self) -> bool {
        matches!(self, Analysis::Overlap | Analysis::All)
    }

    pub fn includes_frequency(&self) -> bool {
        matches!(self, Analysis::Frequency | Analysis::All)
    }
}

/// Fully resolved run parameters
#[derive(Debug, Clone)]
pub struct ValidationResult {
    pub chromosome: u8,
    /// Population label used in output names
    pub population: String,
    pub cohort_source: CohortSource,
    pub variants_file: PathBuf,
    pub output_dir: PathBuf,
    pub analysis: Analysis,
    pub sampler: SamplerConfig,
    pub pair_runs: usize,
    pub sample_groups: usize,
    pub sift_threshold: Option<f32>,
    pub seed: Option<u64>,
    pub threads: usize,
}

fn invalid(message: impl Into<String>) -> OverlapError {
    OverlapError::InvalidArgument(message.into())
}

/// Validate all command line arguments and fill in defaults.
///
/// Runs before any input file is opened.
pub fn validate_args(args: &Args) -> Result<ValidationResult> {
    let chromosome = args
        .chromosome
        .ok_or_else(|| invalid("--chromosome is required (1-22)"))?;
    if !(1..=22).contains(&chromosome) {
        return Err(invalid(format!(
            "chromosome {} out of range, expected 1-22",
            chromosome
        )));
    }

    let population_file = args
        .population
        .as_deref()
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .ok_or_else(|| invalid("--population is required"))?;
    let population = Path::new(population_file)
        .file_name()
        .and_then(|name| name.to_str())
        .map(str::to_string)
        .ok_or_else(|| invalid(format!("cannot derive a population label from '{}'", population_file)))?;

    let analysis = match &args.analysis {
        Some(value) => Analysis::from_str(value).map_err(OverlapError::InvalidArgument)?,
        None => Analysis::All,
    };

    let runs = args.runs.unwrap_or(DEFAULT_RUNS);
    if runs == 0 {
        return Err(invalid("--runs must be at least 1"));
    }
    let draw_budget = args.draw_budget.unwrap_or(DEFAULT_DRAW_BUDGET);
    if draw_budget == 0 {
        return Err(invalid("--draw-budget must be at least 1"));
    }
    let sample_groups = args.sample_groups.unwrap_or(DEFAULT_SAMPLE_GROUPS);
    if sample_groups == 0 {
        return Err(invalid("--sample-groups must be at least 1"));
    }
    let threads = args.threads.unwrap_or(DEFAULT_THREADS);
    if threads == 0 {
        return Err(invalid("--threads must be at least 1"));
    }

    if let Some(threshold) = args.sift_threshold {
        if !threshold.is_finite() || threshold < 0.0 {
            return Err(invalid(format!(
                "SIFT threshold must be a non-negative number, got {}",
                threshold
            )));
        }
    }

    let cohort_source = CohortSource {
        chromosome,
        population_file: PathBuf::from(population_file),
        columns_file: PathBuf::from(args.columns.as_deref().unwrap_or(DEFAULT_COLUMNS_FILE)),
        individuals_dir: args
            .individuals_dir
            .as_ref()
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(format!("chr{}n", chromosome))),
    };
    let variants_file = args
        .variants
        .as_ref()
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(format!("sifted.SIFT.chr{}.txt", chromosome)));

    Ok(ValidationResult {
        chromosome,
        population,
        cohort_source,
        variants_file,
        output_dir: PathBuf::from(args.output_dir.as_deref().unwrap_or(DEFAULT_OUTPUT_DIR)),
        analysis,
        sampler: SamplerConfig { runs, draw_budget },
        pair_runs: args.pair_runs.unwrap_or(DEFAULT_PAIR_RUNS),
        sample_groups,
        sift_threshold: args.sift_threshold,
        seed: args.seed,
        threads,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(chromosome: u8, population: &str) -> Args {
        Args {
            chromosome: Some(chromosome),
            population: Some(population.to_string()),
            ..Args::default()
        }
    }

    #[test]
    fn test_defaults_follow_chromosome() {
        let result = validate_args(&args(22, "EUR")).unwrap();
        assert_eq!(result.population, "EUR");
        assert_eq!(result.variants_file, PathBuf::from("sifted.SIFT.chr22.txt"));
        assert_eq!(result.cohort_source.individuals_dir, PathBuf::from("chr22n"));
        assert_eq!(result.cohort_source.columns_file, PathBuf::from("columns.txt"));
        assert_eq!(result.output_dir, PathBuf::from("output_no_sift"));
        assert_eq!(result.analysis, Analysis::All);
        assert_eq!(result.sampler, SamplerConfig { runs: 1000, draw_budget: 52 });
        assert_eq!(result.pair_runs, 1);
        assert_eq!(result.sample_groups, 26);
        assert_eq!(result.threads, 1);
    }

    #[test]
    fn test_population_label_is_file_name() {
        let result = validate_args(&args(1, "pops/GBR")).unwrap();
        assert_eq!(result.population, "GBR");
        assert_eq!(result.cohort_source.population_file, PathBuf::from("pops/GBR"));
    }

    #[test]
    fn test_rejects_bad_selectors() {
        assert!(validate_args(&args(0, "EUR")).is_err());
        assert!(validate_args(&args(23, "EUR")).is_err());
        assert!(validate_args(&args(4, "  ")).is_err());
        assert!(validate_args(&Args::default()).is_err());

        let mut bad = args(4, "EUR");
        bad.analysis = Some("plots".to_string());
        assert!(matches!(validate_args(&bad), Err(OverlapError::InvalidArgument(_))));

        let mut bad = args(4, "EUR");
        bad.draw_budget = Some(0);
        assert!(validate_args(&bad).is_err());

        let mut bad = args(4, "EUR");
        bad.sift_threshold = Some(f32::NAN);
        assert!(validate_args(&bad).is_err());
    }

    #[test]
    fn test_analysis_parsing() {
        assert_eq!("Overlap".parse::<Analysis>().unwrap(), Analysis::Overlap);
        assert_eq!("freq".parse::<Analysis>().unwrap(), Analysis::Frequency);
        assert!(Analysis::All.includes_overlap() && Analysis::All.includes_frequency());
        assert!(!Analysis::Overlap.includes_frequency());
        assert!(!Analysis::Frequency.includes_overlap());
    }
}

// lib.rs - mutoverlap library root

//! # mutoverlap - Mutation co-occurrence statistics for population subsets
//!
//! For one chromosome and one population, this library loads each
//! individual's filtered mutation list and computes:
//!
//! - **Pairwise overlap matrices**: full symmetric, half-split and randomly paired
//! - **Monte-Carlo overlap histograms**: repeated random sub-cohorts drawn with replacement
//! - **Gene-pair tallies**: how often two variants co-occur within one individual
//!
//! Results are written as fixed plain-text layouts by [`output::ReportWriter`].
//!
//! ## Basic Usage
//!
//! ```rust,no_run
//! use mutoverlap::prelude::*;
//! use std::path::PathBuf;
//!
//! let variants = FilteredVariants::from_file(
//!     std::path::Path::new("sifted.SIFT.chr22.txt"),
//!     None,  // no SIFT threshold
//! )?;
//! let source = CohortSource {
//!     chromosome: 22,
//!     population_file: PathBuf::from("EUR"),
//!     columns_file: PathBuf::from("columns.txt"),
//!     individuals_dir: PathBuf::from("chr22n"),
//! };
//! let cohort = Cohort::load(&source, &variants)?;
//!
//! let matrix = full_overlap_matrix(&cohort);
//! let tally = GenePairTally::from_cohort(&cohort);
//!
//! let mut rng = session_rng(None);
//! let config = SamplerConfig { runs: 10, draw_budget: 52 };
//! for run in MonteCarloSampler::new(&cohort, config, &mut rng)? {
//!     let histogram = Histogram::from_run(&run, config.draw_budget);
//!     assert_eq!(histogram.total(), run.distinct_variants());
//! }
//! # Ok::<(), mutoverlap::OverlapError>(())
//! ```

pub mod cli;
pub mod core;
pub mod data;
pub mod error;
pub mod output;
pub mod pipeline;

// Convenience prelude for common imports
pub mod prelude {
    pub use crate::cli::{validate_args, Analysis, Args, Config, ValidationResult};
    pub use crate::core::{
        full_overlap_matrix, half_split_overlap_matrix, intersect, random_mutation_counts,
        random_pair_overlap_matrix, session_rng,
    };
    pub use crate::core::{
        GenePairTally, Histogram, MonteCarloSampler, OverlapMatrix, RunResult, SamplerConfig,
    };
    pub use crate::data::{Cohort, CohortSource, FilteredVariants, Individual, VariantId};
    pub use crate::error::{OverlapError, Result};
    pub use crate::output::{OutputNaming, ReportKind, ReportWriter, RunSummary};
}

// Re-export main types at the root level for convenience
pub use crate::cli::{Args, ValidationResult};
pub use crate::core::{GenePairTally, Histogram, OverlapMatrix, RunResult, SamplerConfig};
pub use crate::data::{Cohort, FilteredVariants, Individual};
pub use crate::error::OverlapError;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Get library information
pub fn get_info() -> String {
    format!(
        "mutoverlap v{} - Mutation co-occurrence statistics for population subsets",
        VERSION
    )
}

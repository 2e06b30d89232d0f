// mod.rs - Core logic module

pub mod intersect;
pub mod matrix;
pub mod pairs;
pub mod sampler;

use indicatif::{ProgressBar, ProgressStyle};

// Re-export main types for convenience
pub use intersect::{intersect, intersect_len};
pub use matrix::{
    full_overlap_matrix, half_split_overlap_matrix, random_pair_overlap_matrix, OverlapMatrix,
};
pub use pairs::{pair_increments, GenePair, GenePairTally};
pub use sampler::{
    random_mutation_counts, session_rng, Histogram, MonteCarloSampler, RunResult, SamplerConfig,
};

/// Progress bar shared by the long-running loops
pub fn progress_bar(len: u64) -> ProgressBar {
    let pb = ProgressBar::new(len);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) {per_sec} ETA: {eta}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("#>-"),
    );
    pb
}

// mod.rs - Data structures module

pub mod cohort;
pub mod loaders;
pub mod variants;

// Re-export main types for convenience
pub use cohort::{Cohort, CohortSource, Individual};
pub use variants::{parse_score, FilteredVariants, VariantId, MISSING_SCORE};

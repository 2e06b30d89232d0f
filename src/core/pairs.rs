// pairs.rs - Population-wide tally of co-occurring variant pairs

use crate::data::{Cohort, VariantId};
use std::collections::BTreeMap;
use std::time::Instant;

/// Unordered variant pair keyed in the order met within one individual
pub type GenePair = (VariantId, VariantId);

/// Co-occurrence counts of variant pairs across a cohort
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GenePairTally {
    counts: BTreeMap<GenePair, usize>,
}

impl GenePairTally {
    /// Enumerate every 2-combination of each individual's sorted variant
    /// list and count it.
    ///
    /// Cost is quadratic in an individual's variant count; individuals with
    /// very large lists dominate the runtime and memory of the tally.
    pub fn from_cohort(cohort: &Cohort) -> Self {
        println!("🔗 Cross matching pairs of variations");
        let start = Instant::now();
        let mut tally = Self::default();
        for individual in cohort.iter() {
            tally.add_individual(&individual.variants);
        }
        println!(
            "✅ {} distinct variant pairs from {} increments ({:.2}s)",
            tally.len(),
            tally.total(),
            start.elapsed().as_secs_f64()
        );
        tally
    }

    /// Count the pairs of one variant list. Lists shorter than two add nothing.
    pub fn add_individual(&mut self, variants: &[VariantId]) {
        if variants.len() < 2 {
            return;
        }
        for (i, first) in variants.iter().enumerate() {
            for second in &variants[i + 1..] {
                *self
                    .counts
                    .entry((first.clone(), second.clone()))
                    .or_insert(0) += 1;
            }
        }
    }

    pub fn get(&self, first: &str, second: &str) -> usize {
        self.counts
            .get(&(first.to_string(), second.to_string()))
            .copied()
            .unwrap_or(0)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&GenePair, &usize)> {
        self.counts.iter()
    }

    /// Number of distinct pairs
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Sum of all pair counts
    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }
}

/// Pair increments contributed by a list of `m` variants: C(m, 2)
pub fn pair_increments(m: usize) -> usize {
    m * m.saturating_sub(1) / 2
}

// sampler.rs - Monte-Carlo sub-cohort overlap sampling
//
// All draws come from one generator that is seeded once per process and
// consumed sequentially. The generator is borrowed mutably, so a single
// instance cannot be shared by parallel runs; parallel sampling would need
// one independent generator per task.

use crate::data::{Cohort, VariantId};
use crate::error::{OverlapError, Result};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::BTreeMap;

/// Build the process-wide generator.
///
/// Without a seed the generator is initialised from operating-system
/// entropy, so successive executions draw different sub-cohorts.
pub fn session_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    }
}

/// Monte-Carlo parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SamplerConfig {
    /// Number of independent runs (R)
    pub runs: usize,
    /// Individuals drawn per run (K)
    pub draw_budget: usize,
}

/// Outcome of one sampling run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunResult {
    pub run: usize,
    /// Variant → number of drawn individuals carrying it
    pub overlaps: BTreeMap<VariantId, usize>,
    /// Drawn individuals in draw order, repeats included
    pub individuals: Vec<String>,
}

impl RunResult {
    pub fn distinct_variants(&self) -> usize {
        self.overlaps.len()
    }
}

/// Number of variants reaching each overlap count `1..=K` in one run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Histogram {
    frequencies: Vec<usize>,
}

impl Histogram {
    /// Invert a run's per-variant counter. Every count in `1..=draw_budget`
    /// gets an entry, zero when no variant reaches it.
    pub fn from_run(result: &RunResult, draw_budget: usize) -> Self {
        let mut frequencies = vec![0; draw_budget];
        for &count in result.overlaps.values() {
            if (1..=draw_budget).contains(&count) {
                frequencies[count - 1] += 1;
            }
        }
        Self { frequencies }
    }

    pub fn draw_budget(&self) -> usize {
        self.frequencies.len()
    }

    /// Frequency for an overlap count, zero outside `1..=K`
    pub fn get(&self, count: usize) -> usize {
        count
            .checked_sub(1)
            .and_then(|i| self.frequencies.get(i))
            .copied()
            .unwrap_or(0)
    }

    /// `(count, frequency)` pairs for every count in `1..=K`
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.frequencies
            .iter()
            .enumerate()
            .map(|(i, &freq)| (i + 1, freq))
    }

    pub fn total(&self) -> usize {
        self.frequencies.iter().sum()
    }
}

/// Iterator over the runs of a Monte-Carlo experiment.
///
/// Each run draws N indices uniformly with replacement and consumes every
/// second one, stopping after K individuals or when the draw list is
/// exhausted, so at most `min(K, ceil(N/2))` individuals enter a run.
pub struct MonteCarloSampler<'a, R: Rng + ?Sized> {
    cohort: &'a Cohort,
    config: SamplerConfig,
    rng: &'a mut R,
    next_run: usize,
}

impl<'a, R: Rng + ?Sized> MonteCarloSampler<'a, R> {
    pub fn new(cohort: &'a Cohort, config: SamplerConfig, rng: &'a mut R) -> Result<Self> {
        if cohort.is_empty() {
            return Err(OverlapError::EmptyCohort);
        }
        if config.draw_budget == 0 {
            return Err(OverlapError::InvalidArgument(
                "draw budget must be at least 1".to_string(),
            ));
        }
        Ok(Self {
            cohort,
            config,
            rng,
            next_run: 0,
        })
    }

    /// Individuals a run actually draws for this cohort
    pub fn draws_per_run(&self) -> usize {
        self.config.draw_budget.min(self.cohort.len().div_ceil(2))
    }

    fn sample_run(&mut self, run: usize) -> RunResult {
        let n = self.cohort.len();
        let draws: Vec<usize> = (0..n).map(|_| self.rng.random_range(0..n)).collect();

        let mut overlaps: BTreeMap<VariantId, usize> = BTreeMap::new();
        let mut individuals = Vec::with_capacity(self.config.draw_budget);
        for pq in 0..self.config.draw_budget {
            if 2 * pq >= n {
                break;
            }
            let individual = &self.cohort.individuals[draws[2 * pq]];
            for variant in &individual.variants {
                *overlaps.entry(variant.clone()).or_insert(0) += 1;
            }
            individuals.push(individual.name.clone());
        }

        RunResult {
            run,
            overlaps,
            individuals,
        }
    }
}

impl<R: Rng + ?Sized> Iterator for MonteCarloSampler<'_, R> {
    type Item = RunResult;

    fn next(&mut self) -> Option<RunResult> {
        if self.next_run >= self.config.runs {
            return None;
        }
        let run = self.next_run;
        self.next_run += 1;
        Some(self.sample_run(run))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let left = self.config.runs - self.next_run;
        (left, Some(left))
    }
}

/// Retained-variant totals of `groups` distinct individuals.
///
/// Individuals are chosen without replacement and reported in cohort order.
pub fn random_mutation_counts<R: Rng + ?Sized>(
    cohort: &Cohort,
    groups: usize,
    rng: &mut R,
) -> Vec<usize> {
    let amount = groups.min(cohort.len());
    let mut picked = rand::seq::index::sample(rng, cohort.len(), amount).into_vec();
    picked.sort_unstable();
    picked
        .into_iter()
        .map(|i| cohort.individuals[i].total_mutations())
        .collect()
}

// matrix.rs - Pairwise mutation-overlap matrices

use crate::core::intersect::intersect_len;
use crate::core::progress_bar;
use crate::data::{Cohort, Individual};
use crate::error::{OverlapError, Result};
use rand::Rng;
use rayon::prelude::*;
use std::ops::Index;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Instant;

/// Dense table of overlap counts indexed by cohort position.
///
/// `matrix[(i, j)]` is the number of variants shared by the individuals at
/// positions `i` and `j`. Cells that are not computed stay at zero.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OverlapMatrix {
    rows: usize,
    cols: usize,
    data: Vec<usize>,
}

impl OverlapMatrix {
    pub fn zeros(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            data: vec![0; rows * cols],
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    fn set(&mut self, i: usize, j: usize, value: usize) {
        assert!(i < self.rows && j < self.cols, "cell ({}, {}) out of bounds", i, j);
        self.data[i * self.cols + j] = value;
    }

    pub fn row(&self, i: usize) -> &[usize] {
        &self.data[i * self.cols..(i + 1) * self.cols]
    }

    pub fn iter_rows(&self) -> impl Iterator<Item = &[usize]> {
        (0..self.rows).map(move |i| self.row(i))
    }

    pub fn is_symmetric(&self) -> bool {
        self.rows == self.cols
            && (0..self.rows).all(|i| (i + 1..self.cols).all(|j| self[(i, j)] == self[(j, i)]))
    }
}

impl Index<(usize, usize)> for OverlapMatrix {
    type Output = usize;

    fn index(&self, (i, j): (usize, usize)) -> &usize {
        assert!(i < self.rows && j < self.cols, "cell ({}, {}) out of bounds", i, j);
        &self.data[i * self.cols + j]
    }
}

fn overlap(a: &Individual, b: &Individual) -> usize {
    intersect_len(&a.variants, &b.variants)
}

/// Full symmetric N × N overlap matrix.
///
/// Every unordered pair `i < j` is intersected once and stored in both
/// cells. The diagonal is not computed. Rows run on the current rayon pool;
/// the result does not depend on the number of threads.
pub fn full_overlap_matrix(cohort: &Cohort) -> OverlapMatrix {
    let n = cohort.len();
    let mut matrix = OverlapMatrix::zeros(n, n);
    if n < 2 {
        return matrix;
    }

    let start = Instant::now();
    let total_comparisons = n * (n - 1) / 2;
    println!(
        "🔄 Cross matching mutations of all individuals ({} comparisons)...",
        total_comparisons
    );

    let pb = progress_bar(total_comparisons as u64);
    let update_interval = std::cmp::max(1, total_comparisons / 100);
    let progress_counter = Arc::new(AtomicUsize::new(0));
    let individuals = &cohort.individuals;

    let upper_triangle: Vec<(usize, usize, usize)> = (0..n)
        .into_par_iter()
        .flat_map_iter(|i| {
            let progress = progress_counter.clone();
            let pb = pb.clone();
            (i + 1..n).map(move |j| {
                let shared = overlap(&individuals[i], &individuals[j]);
                let count = progress.fetch_add(1, Ordering::Relaxed) + 1;
                if count % update_interval == 0 {
                    pb.set_position(count as u64);
                }
                (i, j, shared)
            })
        })
        .collect();
    pb.finish_and_clear();

    for (i, j, shared) in upper_triangle {
        matrix.set(i, j, shared);
        matrix.set(j, i, shared);
    }

    println!(
        "✅ Full overlap matrix computed in {:.2}s",
        start.elapsed().as_secs_f64()
    );
    matrix
}

/// First half against second half of the cohort.
///
/// With `h = ceil(N/2)`, row `i` is individual `i` and column `j` is
/// individual `h + j`. The table is `h × h`; when N is odd the last column
/// has no partner and stays zero.
pub fn half_split_overlap_matrix(cohort: &Cohort) -> OverlapMatrix {
    let n = cohort.len();
    let half = n.div_ceil(2);
    let mut matrix = OverlapMatrix::zeros(half, half);

    println!("🔄 Cross matching mutations in individuals - half with half");
    let start = Instant::now();
    let individuals = &cohort.individuals;
    for i in 0..half {
        for j in half..n {
            matrix.set(i, j - half, overlap(&individuals[i], &individuals[j]));
        }
    }
    println!(
        "✅ Half-split overlap matrix computed in {:.2}s",
        start.elapsed().as_secs_f64()
    );
    matrix
}

/// Overlap of randomly paired individuals.
///
/// For each run, N indices are drawn uniformly with replacement and the
/// draws are consumed two at a time: column `p` holds the overlap of
/// individuals `r[2p]` and `r[2p + 1]`. The table is `runs × ceil(N/2)`;
/// the trailing slot of an odd cohort has no second draw and stays zero.
pub fn random_pair_overlap_matrix<R: Rng + ?Sized>(
    cohort: &Cohort,
    runs: usize,
    rng: &mut R,
) -> Result<OverlapMatrix> {
    let n = cohort.len();
    if n == 0 {
        return Err(OverlapError::EmptyCohort);
    }
    let slots = n.div_ceil(2);
    let mut matrix = OverlapMatrix::zeros(runs, slots);

    println!("🎲 Cross matching mutations of randomly paired individuals ({} runs)", runs);
    for run in 0..runs {
        let draws: Vec<usize> = (0..n).map(|_| rng.random_range(0..n)).collect();
        for slot in 0..slots {
            if 2 * slot + 1 >= n {
                break;
            }
            let a = &cohort.individuals[draws[2 * slot]];
            let b = &cohort.individuals[draws[2 * slot + 1]];
            matrix.set(run, slot, overlap(a, b));
        }
    }
    Ok(matrix)
}

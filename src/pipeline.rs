// pipeline.rs - Analysis phases driven by the CLI

use crate::cli::ValidationResult;
use crate::core::{
    full_overlap_matrix, half_split_overlap_matrix, progress_bar, random_mutation_counts,
    random_pair_overlap_matrix, GenePairTally, Histogram, MonteCarloSampler,
};
use crate::data::Cohort;
use crate::error::Result;
use crate::output::{ReportKind, ReportWriter};
use rand::Rng;
use std::time::Instant;

/// Run a pipeline phase and report how long it took
pub fn timed<T>(label: &str, phase: impl FnOnce() -> Result<T>) -> Result<T> {
    let start = Instant::now();
    let value = phase()?;
    println!("⏱️  {}: {:.2}s", label, start.elapsed().as_secs_f64());
    Ok(value)
}

/// Per-individual totals, pairwise matrices, random samples and gene pairs.
///
/// Random resampling is skipped for an empty cohort; the deterministic
/// reports are still written.
pub fn run_overlap_analysis<R: Rng + ?Sized>(
    cohort: &Cohort,
    plan: &ValidationResult,
    writer: &mut ReportWriter,
    rng: &mut R,
) -> Result<()> {
    println!("\n🔬 === MUTATION OVERLAP ANALYSIS ===");

    timed("Writing total mutations per individual", || {
        writer.write_total_mutations(cohort).map(|_| ())
    })?;

    let half = timed("Half-split matrix", || Ok(half_split_overlap_matrix(cohort)))?;
    writer.write_matrix(ReportKind::HalfPairsOverlap, &half)?;
    drop(half);

    let full = timed("Full matrix", || Ok(full_overlap_matrix(cohort)))?;
    writer.write_matrix(ReportKind::TotalPairsOverlap, &full)?;
    drop(full);

    if cohort.is_empty() {
        println!("⚠️  Empty cohort: random-pair matrix and mutation-count samples skipped");
    } else if plan.pair_runs > 0 {
        let random = timed("Random-pair matrix", || {
            random_pair_overlap_matrix(cohort, plan.pair_runs, rng)
        })?;
        writer.write_matrix(ReportKind::RandomPairsOverlap, &random)?;

        timed("Random mutation-count samples", || {
            println!(
                "🎲 Sampling {} random individuals with their number of mutations ({} runs)",
                plan.sample_groups.min(cohort.len()),
                plan.pair_runs
            );
            for run in 0..plan.pair_runs {
                let counts = random_mutation_counts(cohort, plan.sample_groups, rng);
                writer.write_random_mutation_counts(run, &counts)?;
            }
            Ok(())
        })?;
    }

    let tally = timed("Gene-pair tally", || Ok(GenePairTally::from_cohort(cohort)))?;
    writer.write_gene_pairs(&tally)?;

    Ok(())
}

/// Monte-Carlo sub-cohort runs: overlap listing, histogram and drawn individuals per run
pub fn run_frequency_analysis<R: Rng + ?Sized>(
    cohort: &Cohort,
    plan: &ValidationResult,
    writer: &mut ReportWriter,
    rng: &mut R,
) -> Result<()> {
    println!("\n📈 === MONTE-CARLO OVERLAP FREQUENCY ===");
    let config = plan.sampler;

    if cohort.is_empty() {
        println!("⚠️  Empty cohort: Monte-Carlo runs skipped");
        return Ok(());
    }

    let sampler = MonteCarloSampler::new(cohort, config, rng)?;
    println!(
        "🎲 Calculating the number of overlapping mutations between {} individuals selected randomly ({} runs)",
        sampler.draws_per_run(),
        config.runs
    );
    if sampler.draws_per_run() < config.draw_budget {
        println!(
            "⚠️  Cohort of {} individuals allows only {} draws per run; histogram still spans 1-{}",
            cohort.len(),
            sampler.draws_per_run(),
            config.draw_budget
        );
    }

    let start = Instant::now();
    let pb = progress_bar(config.runs as u64);
    for result in sampler {
        let histogram = Histogram::from_run(&result, config.draw_budget);
        writer.write_run_overlaps(&result)?;
        writer.write_histogram(result.run, &histogram)?;
        writer.write_run_individuals(&result)?;
        pb.inc(1);
    }
    pb.finish_and_clear();

    println!(
        "✅ {} runs written (overlaps, histogram, individuals) in {:.2}s",
        config.runs,
        start.elapsed().as_secs_f64()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::{validate_args, Args};
    use crate::core::session_rng;
    use crate::data::Individual;
    use crate::output::OutputNaming;

    fn plan(pair_runs: usize) -> ValidationResult {
        let args = Args {
            chromosome: Some(1),
            population: Some("EUR".to_string()),
            runs: Some(3),
            draw_budget: Some(4),
            pair_runs: Some(pair_runs),
            ..Args::default()
        };
        validate_args(&args).unwrap()
    }

    fn writer(dir: &std::path::Path) -> ReportWriter {
        ReportWriter::new(dir, OutputNaming::new(1, None, "EUR")).unwrap()
    }

    fn written_names(writer: &ReportWriter) -> Vec<String> {
        writer
            .written()
            .iter()
            .filter_map(|p| p.file_name().and_then(|n| n.to_str()).map(str::to_string))
            .collect()
    }

    fn small_cohort() -> Cohort {
        Cohort::new(vec![
            Individual::new("A", vec!["v1".to_string(), "v2".to_string()]),
            Individual::new("B", vec!["v2".to_string(), "v3".to_string()]),
            Individual::new("C", vec!["v1".to_string(), "v3".to_string()]),
        ])
    }

    #[test]
    fn test_empty_cohort_completes_both_analyses() {
        let dir = tempfile::tempdir().unwrap();
        let mut writer = writer(dir.path());
        let mut rng = session_rng(Some(7));
        let plan = plan(1);
        let cohort = Cohort::default();

        run_overlap_analysis(&cohort, &plan, &mut writer, &mut rng).unwrap();
        run_frequency_analysis(&cohort, &plan, &mut writer, &mut rng).unwrap();

        let names = written_names(&writer);
        assert!(names.iter().any(|n| n.starts_with("total_mutations_individual")));
        assert!(names.iter().any(|n| n.starts_with("total_individual_pairs_overlap")));
        assert!(names.iter().any(|n| n.starts_with("gene_pairs_count")));
        assert!(!names.iter().any(|n| n.starts_with("random_")));
        assert!(!names.iter().any(|n| n.starts_with("Histogram_mutation_overlap")));
    }

    #[test]
    fn test_zero_pair_runs_skips_random_reports() {
        let dir = tempfile::tempdir().unwrap();
        let mut writer = writer(dir.path());
        let mut rng = session_rng(Some(7));

        run_overlap_analysis(&small_cohort(), &plan(0), &mut writer, &mut rng).unwrap();

        let names = written_names(&writer);
        assert!(!names.iter().any(|n| n.starts_with("random_individual_pairs_overlap")));
        assert!(!names.iter().any(|n| n.starts_with("random_mutations_individual")));
    }

    #[test]
    fn test_pair_runs_write_one_count_sample_per_run() {
        let dir = tempfile::tempdir().unwrap();
        let mut writer = writer(dir.path());
        let mut rng = session_rng(Some(7));

        run_overlap_analysis(&small_cohort(), &plan(2), &mut writer, &mut rng).unwrap();
        run_frequency_analysis(&small_cohort(), &plan(2), &mut writer, &mut rng).unwrap();

        let names = written_names(&writer);
        let samples = names
            .iter()
            .filter(|n| n.starts_with("random_mutations_individual"))
            .count();
        assert_eq!(samples, 2);
        assert!(names.iter().any(|n| n.starts_with("random_individual_pairs_overlap")));
        let histograms = names
            .iter()
            .filter(|n| n.starts_with("Histogram_mutation_overlap"))
            .count();
        assert_eq!(histograms, 3);
    }
}

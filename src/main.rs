// main.rs - CLI entry point

use std::time::Instant;

use mutoverlap::cli::Config;
use mutoverlap::output::sift_label;
use mutoverlap::pipeline::{run_frequency_analysis, run_overlap_analysis, timed};
use mutoverlap::prelude::*;

fn main() {
    if let Err(e) = run_main() {
        eprintln!("❌ ERROR: {}", e);
        std::process::exit(1);
    }
}

fn run_main() -> Result<()> {
    let mut args: Args = argh::from_env();

    // Handle generate config first
    if args.generate_config {
        println!("{}", Config::generate_sample());
        println!("\n💡 Save this content to a .toml file and use --config /path/to/config.toml");
        return Ok(());
    }

    // Load configuration file if specified
    if let Some(config_path) = args.config.clone() {
        args = args.with_config_file(&config_path)?;
    }

    // Selector errors are reported before any input is opened
    let plan = validate_args(&args)?;

    println!("🚀 {}", mutoverlap::get_info());
    println!("🕒 Started: {}", RunSummary::timestamp());
    println!(
        "🧬 Chromosome {} | population {} | {} | analysis: {}",
        plan.chromosome,
        plan.population,
        sift_label(plan.sift_threshold),
        plan.analysis.as_str()
    );

    rayon::ThreadPoolBuilder::new()
        .num_threads(plan.threads)
        .build_global()
        .map_err(|e| OverlapError::InvalidArgument(format!("Failed to configure thread pool: {}", e)))?;
    println!("🧵 Threads: {}", plan.threads);

    let total_start = Instant::now();

    let variants = timed("Reading filtered variants", || {
        FilteredVariants::from_file(&plan.variants_file, plan.sift_threshold)
    })?;
    let cohort = timed("Reading cohort", || Cohort::load(&plan.cohort_source, &variants))?;

    if args.dry_run {
        println!("✅ Dry run completed successfully");
        println!(
            "📊 Cohort: {} individuals × {} filtered variants",
            cohort.len(),
            variants.len()
        );
        return Ok(());
    }

    let mut writer = ReportWriter::new(
        &plan.output_dir,
        OutputNaming::new(plan.chromosome, plan.sift_threshold, plan.population.clone()),
    )?;

    // One generator for the whole process, consumed sequentially
    let mut rng = session_rng(plan.seed);
    if let Some(seed) = plan.seed {
        println!("🎲 Random seed: {}", seed);
    }

    timed("Writing variant map and mutation index array", || {
        writer.write_annotation_map(variants.annotations())?;
        writer.write_mutation_index_array(&cohort)?;
        Ok(())
    })?;

    if plan.analysis.includes_overlap() {
        run_overlap_analysis(&cohort, &plan, &mut writer, &mut rng)?;
    }

    if plan.analysis.includes_frequency() {
        run_frequency_analysis(&cohort, &plan, &mut writer, &mut rng)?;
    }

    let elapsed = total_start.elapsed();
    let includes_frequency = plan.analysis.includes_frequency();
    let summary = RunSummary {
        version: mutoverlap::VERSION.to_string(),
        generated: RunSummary::timestamp(),
        chromosome: plan.chromosome,
        population: plan.population.clone(),
        sift_label: writer.naming().label.clone(),
        analysis: plan.analysis.as_str().to_string(),
        individuals: cohort.len(),
        filtered_variants: variants.len(),
        cohort_variants: cohort.distinct_variants(),
        monte_carlo_runs: includes_frequency.then_some(plan.sampler.runs),
        draw_budget: includes_frequency.then_some(plan.sampler.draw_budget),
        seed: plan.seed,
        elapsed_seconds: elapsed.as_secs_f64(),
        files: RunSummary::file_names(writer.written()),
    };
    writer.write_summary(&summary)?;

    println!("\n🎉 === MUTOVERLAP COMPLETED SUCCESSFULLY ===");
    println!("⏱️  Total execution time: {:.2}s", elapsed.as_secs_f64());
    println!(
        "📊 Cohort: {} individuals, {} distinct mutations",
        cohort.len(),
        summary.cohort_variants
    );
    println!(
        "📁 {} files written to: {}",
        writer.written().len(),
        writer.output_dir().display()
    );

    Ok(())
}

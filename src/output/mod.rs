// mod.rs - Report writer: fixed plain-text layouts for every result

pub mod summary;

use crate::core::{GenePairTally, Histogram, OverlapMatrix, RunResult};
use crate::data::Cohort;
use crate::error::{OverlapError, Result};
use std::collections::BTreeMap;
use std::fs::{create_dir_all, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

pub use summary::RunSummary;

/// Output artifacts, named `<kind>_chr<chr>_<label>_<population>[_<run>]`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportKind {
    MapVariations,
    MutationIndexArray,
    TotalMutations,
    HalfPairsOverlap,
    TotalPairsOverlap,
    RandomPairsOverlap,
    RandomMutations,
    GenePairs,
    MutationOverlap,
    Histogram,
    RandomIndividuals,
    RunSummary,
}

impl ReportKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ReportKind::MapVariations => "map_variations",
            ReportKind::MutationIndexArray => "mutation_index_array",
            ReportKind::TotalMutations => "total_mutations_individual",
            ReportKind::HalfPairsOverlap => "individual_half_pairs_overlap",
            ReportKind::TotalPairsOverlap => "total_individual_pairs_overlap",
            ReportKind::RandomPairsOverlap => "random_individual_pairs_overlap",
            ReportKind::RandomMutations => "random_mutations_individual",
            ReportKind::GenePairs => "gene_pairs_count",
            ReportKind::MutationOverlap => "Mutation_overlap",
            ReportKind::Histogram => "Histogram_mutation_overlap",
            ReportKind::RandomIndividuals => "random_indiv",
            ReportKind::RunSummary => "run_summary",
        }
    }

    fn extension(&self) -> &'static str {
        match self {
            ReportKind::RunSummary => "json",
            _ => "txt",
        }
    }
}

/// SIFT label embedded in every file name
pub fn sift_label(sift_threshold: Option<f32>) -> String {
    match sift_threshold {
        Some(threshold) => format!("s{}", threshold),
        None => "sNO-SIFT".to_string(),
    }
}

/// Naming scheme for one chromosome/population selection
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputNaming {
    pub chromosome: u8,
    pub label: String,
    pub population: String,
}

impl OutputNaming {
    pub fn new(chromosome: u8, sift_threshold: Option<f32>, population: impl Into<String>) -> Self {
        Self {
            chromosome,
            label: sift_label(sift_threshold),
            population: population.into(),
        }
    }

    pub fn file_name(&self, kind: ReportKind) -> String {
        format!(
            "{}_chr{}_{}_{}.{}",
            kind.as_str(),
            self.chromosome,
            self.label,
            self.population,
            kind.extension()
        )
    }

    pub fn run_file_name(&self, kind: ReportKind, run: usize) -> String {
        format!(
            "{}_chr{}_{}_{}_{}.{}",
            kind.as_str(),
            self.chromosome,
            self.label,
            self.population,
            run,
            kind.extension()
        )
    }
}

/// Format a list the way the mutation index array stores it:
/// `['a', 'b']`, or an empty string for an empty list.
pub fn format_id_list(ids: &[String]) -> String {
    if ids.is_empty() {
        return String::new();
    }
    format!("['{}']", ids.join("', '"))
}

/// Writes result files into one output directory and remembers them
pub struct ReportWriter {
    output_dir: PathBuf,
    naming: OutputNaming,
    written: Vec<PathBuf>,
}

impl ReportWriter {
    /// Create the writer, creating the output directory if needed
    pub fn new(output_dir: impl Into<PathBuf>, naming: OutputNaming) -> Result<Self> {
        let output_dir = output_dir.into();
        create_dir_all(&output_dir).map_err(|e| OverlapError::output(&output_dir, e))?;
        Ok(Self {
            output_dir,
            naming,
            written: Vec::new(),
        })
    }

    pub fn naming(&self) -> &OutputNaming {
        &self.naming
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Every file written so far, in write order
    pub fn written(&self) -> &[PathBuf] {
        &self.written
    }

    fn write_file<F>(&mut self, file_name: String, body: F) -> Result<PathBuf>
    where
        F: FnOnce(&mut BufWriter<File>) -> std::io::Result<()>,
    {
        let path = self.output_dir.join(file_name);
        let file = File::create(&path).map_err(|e| OverlapError::output(&path, e))?;
        let mut writer = BufWriter::new(file);
        body(&mut writer)
            .and_then(|_| writer.flush())
            .map_err(|e| OverlapError::output(&path, e))?;
        self.written.push(path.clone());
        Ok(path)
    }

    /// `VariantID\tAnnotation` per line, key order
    pub fn write_annotation_map(&mut self, annotations: &BTreeMap<String, String>) -> Result<PathBuf> {
        let path = self.write_file(self.naming.file_name(ReportKind::MapVariations), |w| {
            for (id, annotation) in annotations {
                writeln!(w, "{}\t{}", id, annotation)?;
            }
            Ok(())
        })?;
        println!("💾 Variant annotation map written to: {}", path.display());
        Ok(path)
    }

    /// One `['id1', 'id2']` line per individual, cohort order
    pub fn write_mutation_index_array(&mut self, cohort: &Cohort) -> Result<PathBuf> {
        let path = self.write_file(self.naming.file_name(ReportKind::MutationIndexArray), |w| {
            for individual in cohort.iter() {
                writeln!(w, "{}", format_id_list(&individual.variants))?;
            }
            Ok(())
        })?;
        println!("💾 Mutation index array written to: {}", path.display());
        Ok(path)
    }

    /// `name\tcount` per individual, cohort order
    pub fn write_total_mutations(&mut self, cohort: &Cohort) -> Result<PathBuf> {
        let path = self.write_file(self.naming.file_name(ReportKind::TotalMutations), |w| {
            for individual in cohort.iter() {
                writeln!(w, "{}\t{}", individual.name, individual.total_mutations())?;
            }
            Ok(())
        })?;
        println!("💾 Total mutations per individual written to: {}", path.display());
        Ok(path)
    }

    /// Space-separated rows, no header
    pub fn write_matrix(&mut self, kind: ReportKind, matrix: &OverlapMatrix) -> Result<PathBuf> {
        let path = self.write_file(self.naming.file_name(kind), |w| {
            for row in matrix.iter_rows() {
                let line: Vec<String> = row.iter().map(|v| v.to_string()).collect();
                writeln!(w, "{}", line.join(" "))?;
            }
            Ok(())
        })?;
        println!(
            "💾 Pairs overlapping mutations ({} × {}) written to: {}",
            matrix.rows(),
            matrix.cols(),
            path.display()
        );
        Ok(path)
    }

    /// `('id_a', 'id_b')\tcount` per line, tally order
    pub fn write_gene_pairs(&mut self, tally: &GenePairTally) -> Result<PathBuf> {
        let path = self.write_file(self.naming.file_name(ReportKind::GenePairs), |w| {
            for ((first, second), count) in tally.iter() {
                writeln!(w, "('{}', '{}')\t{}", first, second, count)?;
            }
            Ok(())
        })?;
        println!("💾 Gene pair list written to: {}", path.display());
        Ok(path)
    }

    /// Mutation overlap listing of one Monte-Carlo run
    pub fn write_run_overlaps(&mut self, result: &RunResult) -> Result<PathBuf> {
        let name = self.naming.run_file_name(ReportKind::MutationOverlap, result.run);
        self.write_file(name, |w| {
            writeln!(w, "Mutation Index- Number Overlapings")?;
            for (id, count) in &result.overlaps {
                writeln!(w, "{}-{}", id, count)?;
            }
            Ok(())
        })
    }

    /// Histogram of one Monte-Carlo run, every count `1..=K`
    pub fn write_histogram(&mut self, run: usize, histogram: &Histogram) -> Result<PathBuf> {
        let name = self.naming.run_file_name(ReportKind::Histogram, run);
        self.write_file(name, |w| {
            writeln!(w, "Number Individuals - Number Mutations")?;
            for (count, frequency) in histogram.iter() {
                writeln!(w, "{}-{}", count, frequency)?;
            }
            Ok(())
        })
    }

    /// Individuals drawn in one Monte-Carlo run
    pub fn write_run_individuals(&mut self, result: &RunResult) -> Result<PathBuf> {
        let name = self.naming.run_file_name(ReportKind::RandomIndividuals, result.run);
        self.write_file(name, |w| {
            writeln!(w, "Individuals")?;
            for individual in &result.individuals {
                writeln!(w, "{}", individual)?;
            }
            Ok(())
        })
    }

    /// Mutation totals of randomly chosen individuals, one per line
    pub fn write_random_mutation_counts(&mut self, run: usize, counts: &[usize]) -> Result<PathBuf> {
        let name = self.naming.run_file_name(ReportKind::RandomMutations, run);
        self.write_file(name, |w| {
            for count in counts {
                writeln!(w, "{}", count)?;
            }
            Ok(())
        })
    }

    /// JSON run summary listing every file written before it
    pub fn write_summary(&mut self, summary: &RunSummary) -> Result<PathBuf> {
        let json = serde_json::to_string_pretty(summary)
            .map_err(|e| OverlapError::output(self.output_dir.clone(), e.into()))?;
        let path = self.write_file(self.naming.file_name(ReportKind::RunSummary), |w| {
            writeln!(w, "{}", json)
        })?;
        println!("💾 Run summary written to: {}", path.display());
        Ok(path)
    }
}

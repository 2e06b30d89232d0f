// cohort.rs - Individuals and the ordered cohort under analysis

use crate::core::intersect;
use crate::data::loaders::{read_column_header, read_tokens};
use crate::data::variants::{FilteredVariants, VariantId};
use crate::error::Result;
use std::path::{Path, PathBuf};
use std::time::Instant;

/// One individual and the filtered variants it carries
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Individual {
    pub name: String,
    /// Sorted ascending, no duplicates
    pub variants: Vec<VariantId>,
}

impl Individual {
    pub fn new(name: impl Into<String>, mut variants: Vec<VariantId>) -> Self {
        variants.sort();
        variants.dedup();
        Self {
            name: name.into(),
            variants,
        }
    }

    pub fn total_mutations(&self) -> usize {
        self.variants.len()
    }
}

/// Where the cohort inputs live for one chromosome/population selection
#[derive(Debug, Clone)]
pub struct CohortSource {
    pub chromosome: u8,
    pub population_file: PathBuf,
    pub columns_file: PathBuf,
    pub individuals_dir: PathBuf,
}

impl CohortSource {
    /// Per-individual carrier file: `<dir>/chr<chr>.<name>`
    pub fn individual_path(&self, name: &str) -> PathBuf {
        self.individuals_dir
            .join(format!("chr{}.{}", self.chromosome, name))
    }
}

/// Ordered individuals for one chromosome and population subset.
///
/// Immutable once loaded; every downstream component borrows it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Cohort {
    pub individuals: Vec<Individual>,
}

impl Cohort {
    pub fn new(individuals: Vec<Individual>) -> Self {
        Self { individuals }
    }

    /// Load the cohort from disk.
    ///
    /// Any unreadable file aborts the whole load; no partial cohort is
    /// returned.
    pub fn load(source: &CohortSource, variants: &FilteredVariants) -> Result<Self> {
        println!("👥 Reading individuals");
        let start = Instant::now();
        let names = Self::resolve_names(&source.population_file, &source.columns_file)?;
        println!(
            "✅ {} individuals selected ({:.2}s)",
            names.len(),
            start.elapsed().as_secs_f64()
        );
        if names.is_empty() {
            println!("⚠️  Warning: no individual of the population appears in the column file");
        }

        println!("📂 Reading individual mutation files from: {}", source.individuals_dir.display());
        let start = Instant::now();
        let mut individuals = Vec::with_capacity(names.len());
        for name in names {
            let tokens = read_tokens(&source.individual_path(&name))?;
            individuals.push(Individual::new(name, variants.retain_known(tokens)));
        }
        let cohort = Self::new(individuals);

        if let Some(first) = cohort.individuals.first() {
            println!(
                "  🔬 {} carries {} filtered mutations",
                first.name,
                first.total_mutations()
            );
        }
        println!(
            "✅ Cohort loaded: {} individuals, {} distinct mutations ({:.2}s)",
            cohort.len(),
            cohort.distinct_variants(),
            start.elapsed().as_secs_f64()
        );
        Ok(cohort)
    }

    /// Population members that also appear in the column header, in the
    /// order of the longer of the two lists.
    pub fn resolve_names(population_file: &Path, columns_file: &Path) -> Result<Vec<String>> {
        let population = read_tokens(population_file)?;
        let columns = read_column_header(columns_file)?;
        Ok(intersect(&population, &columns))
    }

    pub fn len(&self) -> usize {
        self.individuals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.individuals.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Individual> {
        self.individuals.iter()
    }

    pub fn names(&self) -> Vec<&str> {
        self.individuals.iter().map(|i| i.name.as_str()).collect()
    }

    /// Retained-variant count per individual, in cohort order
    pub fn total_mutations(&self) -> Vec<usize> {
        self.individuals.iter().map(Individual::total_mutations).collect()
    }

    /// Number of distinct variants carried by at least one individual
    pub fn distinct_variants(&self) -> usize {
        let mut seen = std::collections::HashSet::new();
        for individual in &self.individuals {
            seen.extend(individual.variants.iter());
        }
        seen.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::io::Cursor;

    fn write_inputs(dir: &Path) -> CohortSource {
        fs::write(dir.join("EUR"), "C\nA\nZ\nB\n").unwrap();
        fs::write(
            dir.join("columns.txt"),
            "#CHROM\tPOS\tID\tREF\tALT\tQUAL\tFILTER\tINFO\tFORMAT\tA\tB\tC\tD\tE\n",
        )
        .unwrap();
        let ind_dir = dir.join("chr7n");
        fs::create_dir_all(&ind_dir).unwrap();
        fs::write(ind_dir.join("chr7.A"), "100 v2 G T 0.1\n200 v1 C A 0.2\n").unwrap();
        fs::write(ind_dir.join("chr7.B"), "v3\nv2\nv9\n").unwrap();
        fs::write(ind_dir.join("chr7.C"), "v1 v3").unwrap();

        CohortSource {
            chromosome: 7,
            population_file: dir.join("EUR"),
            columns_file: dir.join("columns.txt"),
            individuals_dir: ind_dir,
        }
    }

    fn universe() -> FilteredVariants {
        FilteredVariants::from_reader(
            Cursor::new("1 v1 GENE1\n2 v2 GENE2\n3 v3 GENE3\n"),
            None,
        )
        .unwrap()
    }

    #[test]
    fn test_individual_sorted_and_deduplicated() {
        let ind = Individual::new("X", vec!["b".into(), "a".into(), "b".into()]);
        assert_eq!(ind.variants, vec!["a", "b"]);
        assert_eq!(ind.total_mutations(), 2);
    }

    #[test]
    fn test_load_cohort() {
        let dir = tempfile::tempdir().unwrap();
        let source = write_inputs(dir.path());
        let cohort = Cohort::load(&source, &universe()).unwrap();

        // column order wins because the column list is longer
        assert_eq!(cohort.names(), vec!["A", "B", "C"]);
        assert_eq!(cohort.individuals[0].variants, vec!["v1", "v2"]);
        assert_eq!(cohort.individuals[1].variants, vec!["v2", "v3"]);
        assert_eq!(cohort.individuals[2].variants, vec!["v1", "v3"]);
        assert_eq!(cohort.total_mutations(), vec![2, 2, 2]);
        assert_eq!(cohort.distinct_variants(), 3);
    }

    #[test]
    fn test_load_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let source = write_inputs(dir.path());
        let variants = universe();
        let first = Cohort::load(&source, &variants).unwrap();
        let second = Cohort::load(&source, &variants).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_missing_individual_file_aborts() {
        let dir = tempfile::tempdir().unwrap();
        let source = write_inputs(dir.path());
        fs::remove_file(source.individual_path("B")).unwrap();

        let err = Cohort::load(&source, &universe()).unwrap_err();
        assert!(err.to_string().contains("chr7.B"));
    }

    #[test]
    fn test_missing_population_file_aborts() {
        let dir = tempfile::tempdir().unwrap();
        let mut source = write_inputs(dir.path());
        source.population_file = dir.path().join("AFR");
        assert!(Cohort::load(&source, &universe()).is_err());
    }
}

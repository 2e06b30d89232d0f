// variants.rs - Filtered variant universe and annotation map

use crate::error::{OverlapError, Result};
use std::collections::{BTreeMap, HashSet};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Opaque variant identifier (usually an rs accession)
pub type VariantId = String;

/// Score used when a numeric field is absent or unparseable
pub const MISSING_SCORE: f32 = f32::MAX;

/// Parse a numeric score field, falling back to [`MISSING_SCORE`].
///
/// Multi-valued fields (`0.01,0.3`) keep their first value.
pub fn parse_score(field: Option<&str>) -> f32 {
    field
        .and_then(|raw| raw.split(',').next())
        .and_then(|first| first.trim().parse::<f32>().ok())
        .unwrap_or(MISSING_SCORE)
}

/// Variants that passed upstream filtering, with their annotations.
///
/// Built once before the cohort is loaded and read-only afterwards.
#[derive(Debug, Default)]
pub struct FilteredVariants {
    universe: HashSet<VariantId>,
    annotations: BTreeMap<VariantId, String>,
    skipped_by_score: usize,
}

impl FilteredVariants {
    /// Load the filtered-variant file.
    ///
    /// Lines carry at least three whitespace-separated tokens: token 1 is
    /// the identifier, token 2 the annotation and the optional token 3 a
    /// SIFT score. Shorter lines are ignored. With a `sift_threshold`, only
    /// variants scoring at or below it are kept.
    pub fn from_file(file_path: &Path, sift_threshold: Option<f32>) -> Result<Self> {
        println!(
            "🧬 Reading variants {} from: {}",
            match sift_threshold {
                Some(t) => format!("with SIFT score <= {}", t),
                None => "without SIFT filter".to_string(),
            },
            file_path.display()
        );
        let file = File::open(file_path).map_err(|e| OverlapError::input(file_path, e))?;
        let variants = Self::from_reader(BufReader::new(file), sift_threshold)
            .map_err(|e| OverlapError::input(file_path, e))?;

        if variants.skipped_by_score > 0 {
            println!(
                "  🔎 {} variants above the SIFT threshold were skipped",
                variants.skipped_by_score
            );
        }
        println!(
            "✅ Filtered variants loaded: {} unique identifiers",
            variants.len()
        );
        Ok(variants)
    }

    pub fn from_reader<R: BufRead>(
        reader: R,
        sift_threshold: Option<f32>,
    ) -> std::io::Result<Self> {
        let mut variants = Self::default();

        for line in reader.lines() {
            let line = line?;
            let tokens: Vec<&str> = line.split_whitespace().collect();
            if tokens.len() < 3 {
                continue;
            }

            if let Some(threshold) = sift_threshold {
                if parse_score(tokens.get(3).copied()) > threshold {
                    variants.skipped_by_score += 1;
                    continue;
                }
            }

            variants.insert(tokens[1], tokens[2]);
        }

        Ok(variants)
    }

    fn insert(&mut self, id: &str, annotation: &str) {
        if self.universe.insert(id.to_string()) {
            self.annotations
                .insert(id.to_string(), annotation.to_string());
        }
    }

    pub fn contains(&self, id: &str) -> bool {
        self.universe.contains(id)
    }

    pub fn len(&self) -> usize {
        self.universe.len()
    }

    pub fn is_empty(&self) -> bool {
        self.universe.is_empty()
    }

    /// Variant → annotation map, iterated in key order
    pub fn annotations(&self) -> &BTreeMap<VariantId, String> {
        &self.annotations
    }

    /// Keep only tokens that belong to the filtered universe.
    pub fn retain_known(&self, tokens: Vec<String>) -> Vec<VariantId> {
        tokens.into_iter().filter(|t| self.contains(t)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    const SIFTED: &str = "\
1 rs100 ENSG0001 0.01 0.9
2 rs200 ENSG0002 0.40
3 rs300 ENSG0003
4 rs400
5 rs100 ENSG9999 0.5
6 rs500 ENSG0005 deleterious
";

    #[test]
    fn test_parse_score_sentinel() {
        assert_eq!(parse_score(Some("0.25")), 0.25);
        assert_eq!(parse_score(Some("0.1,0.7")), 0.1);
        assert_eq!(parse_score(Some("tolerated")), MISSING_SCORE);
        assert_eq!(parse_score(Some("")), MISSING_SCORE);
        assert_eq!(parse_score(None), MISSING_SCORE);
    }

    #[test]
    fn test_reader_without_threshold() {
        let variants = FilteredVariants::from_reader(Cursor::new(SIFTED), None).unwrap();

        assert_eq!(variants.len(), 4);
        assert!(variants.contains("rs500"));
        assert!(!variants.contains("rs400"));
        // first annotation wins
        assert_eq!(variants.annotations()["rs100"], "ENSG0001");
        let keys: Vec<&String> = variants.annotations().keys().collect();
        assert_eq!(keys, vec!["rs100", "rs200", "rs300", "rs500"]);
    }

    #[test]
    fn test_reader_with_threshold_drops_unscored() {
        let variants =
            FilteredVariants::from_reader(Cursor::new(SIFTED), Some(0.05)).unwrap();

        let keys: Vec<&String> = variants.annotations().keys().collect();
        assert_eq!(keys, vec!["rs100"]);
        assert!(!variants.contains("rs200"));
        assert_eq!(variants.skipped_by_score, 4);
    }

    #[test]
    fn test_retain_known() {
        let variants = FilteredVariants::from_reader(Cursor::new(SIFTED), None).unwrap();
        let tokens = vec![
            "10177".to_string(),
            "rs300".to_string(),
            "A".to_string(),
            "rs100".to_string(),
            "rs999".to_string(),
        ];
        assert_eq!(variants.retain_known(tokens), vec!["rs300", "rs100"]);
    }
}

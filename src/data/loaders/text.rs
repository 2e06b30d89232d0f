// text.rs - Whitespace and tab-delimited text readers

use crate::error::{OverlapError, Result};
use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;

/// Fixed VCF metadata columns preceding the individual identifiers
pub const METADATA_COLUMNS: usize = 9;

/// Read every whitespace-separated token of a file, in file order.
///
/// Used for population lists and per-individual carrier files, where any
/// layout (one token per line or several per line) is accepted.
pub fn read_tokens(file_path: &Path) -> Result<Vec<String>> {
    let file = File::open(file_path).map_err(|e| OverlapError::input(file_path, e))?;
    let mut content = String::new();
    BufReader::new(file)
        .read_to_string(&mut content)
        .map_err(|e| OverlapError::input(file_path, e))?;

    Ok(content.split_whitespace().map(str::to_string).collect())
}

/// Read the individual identifiers from a column-order file.
///
/// Only the first line is used. It is tab-separated and the leading
/// metadata columns are skipped.
pub fn read_column_header(file_path: &Path) -> Result<Vec<String>> {
    let file = File::open(file_path).map_err(|e| OverlapError::input(file_path, e))?;
    let mut reader = BufReader::new(file);

    let mut header_line = String::new();
    reader
        .read_line(&mut header_line)
        .map_err(|e| OverlapError::input(file_path, e))?;

    Ok(parse_column_header(&header_line))
}

fn parse_column_header(header_line: &str) -> Vec<String> {
    header_line
        .trim_end()
        .split('\t')
        .skip(METADATA_COLUMNS)
        .filter(|name| !name.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_read_tokens_mixed_layout() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("chr1.HG00096");
        let mut file = File::create(&path).unwrap();
        writeln!(file, "10177        rs367896724    A    AC    0.42").unwrap();
        writeln!(file, "rs555500075").unwrap();
        writeln!(file).unwrap();

        let tokens = read_tokens(&path).unwrap();
        assert_eq!(
            tokens,
            vec!["10177", "rs367896724", "A", "AC", "0.42", "rs555500075"]
        );
    }

    #[test]
    fn test_read_tokens_missing_file_is_input_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = read_tokens(&dir.path().join("absent.txt")).unwrap_err();
        assert!(matches!(err, OverlapError::InputRead { .. }));
    }

    #[test]
    fn test_column_header_skips_metadata() {
        let header = "#CHROM\tPOS\tID\tREF\tALT\tQUAL\tFILTER\tINFO\tFORMAT\tHG00096\tHG00097\r\n";
        assert_eq!(parse_column_header(header), vec!["HG00096", "HG00097"]);
    }

    #[test]
    fn test_column_header_reads_first_line_only() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("columns.txt");
        let mut file = File::create(&path).unwrap();
        writeln!(file, "a\tb\tc\td\te\tf\tg\th\ti\tNA1\tNA2").unwrap();
        writeln!(file, "ignored\tsecond\tline").unwrap();

        assert_eq!(read_column_header(&path).unwrap(), vec!["NA1", "NA2"]);
    }

    #[test]
    fn test_short_header_yields_no_individuals() {
        assert!(parse_column_header("a\tb\tc").is_empty());
    }
}

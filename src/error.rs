// error.rs - Error kinds shared by every component

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Failure modes of a mutoverlap run.
///
/// Components return these instead of terminating the process; `main`
/// decides how to report them.
#[derive(Error, Debug)]
pub enum OverlapError {
    /// Missing or malformed command line selector (chromosome, population, counts)
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Failed to read '{}': {source}", path.display())]
    InputRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to write '{}': {source}", path.display())]
    OutputWrite {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Cannot draw random individuals from an empty cohort")]
    EmptyCohort,
}

impl OverlapError {
    pub fn input<P: Into<PathBuf>>(path: P, source: io::Error) -> Self {
        OverlapError::InputRead {
            path: path.into(),
            source,
        }
    }

    pub fn output<P: Into<PathBuf>>(path: P, source: io::Error) -> Self {
        OverlapError::OutputWrite {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, OverlapError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages_name_the_path() {
        let err = OverlapError::input(
            "columns.txt",
            io::Error::new(io::ErrorKind::NotFound, "missing"),
        );
        let msg = err.to_string();
        assert!(msg.contains("columns.txt"));
        assert!(msg.contains("missing"));

        let err = OverlapError::output("out/x.txt", io::Error::other("denied"));
        assert!(err.to_string().starts_with("Failed to write 'out/x.txt'"));
    }

    #[test]
    fn test_invalid_argument_display() {
        let err = OverlapError::InvalidArgument("chromosome 0 out of range".to_string());
        assert_eq!(
            err.to_string(),
            "Invalid argument: chromosome 0 out of range"
        );
    }
}

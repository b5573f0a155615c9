//! Core error types.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while producing release notes.
#[derive(Debug, Error)]
pub enum NotesError {
    /// The input file could not be read.
    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The input is not a JSON array of objects.
    #[error("invalid change records: {0}")]
    Parse(#[from] serde_json::Error),

    /// The output file could not be written.
    #[error("failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Result type for release-note operations.
pub type NotesResult<T> = Result<T, NotesError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_display() {
        let err = NotesError::Read {
            path: PathBuf::from("notes.json"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "not found"),
        };
        assert_eq!(err.to_string(), "failed to read notes.json: not found");
    }

    #[test]
    fn test_parse_display() {
        let source = serde_json::from_str::<Vec<u8>>("{").unwrap_err();
        let err = NotesError::from(source);
        assert!(err.to_string().starts_with("invalid change records: "));
    }

    #[test]
    fn test_error_source() {
        use std::error::Error as _;

        let err = NotesError::Write {
            path: PathBuf::from("out.md"),
            source: std::io::Error::other("read-only"),
        };
        assert!(err.source().is_some());
    }
}

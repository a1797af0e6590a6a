//! Error types for the deck importer

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ImportError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// A row did not carry exactly `id, front, back, sound`
    #[error("Malformed record on line {line}: expected 4 fields, found {fields}")]
    Format { line: u64, fields: usize },

    /// Undecodable content (bad UTF-8, unbalanced quoting)
    #[error("Malformed deck file on line {line}: {message}")]
    Parse { line: u64, message: String },

    #[error("Invalid delimiter {0:?}: must be a single punctuation character other than ','")]
    InvalidDelimiter(char),
}

impl From<csv::Error> for ImportError {
    fn from(err: csv::Error) -> Self {
        let line = err.position().map_or(0, |p| p.line());
        let message = err.to_string();
        match err.into_kind() {
            csv::ErrorKind::Io(io) => ImportError::Io(io),
            csv::ErrorKind::UnequalLengths { len, .. } => ImportError::Format {
                line,
                fields: len as usize,
            },
            _ => ImportError::Parse { line, message },
        }
    }
}

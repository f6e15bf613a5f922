use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while annotating an edge list.
#[derive(Debug, Error)]
pub enum Error {
    /// A file could not be opened in the requested mode.
    #[error("failed to open {}: {source}", .path.display())]
    Configuration {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// A data line whose fields are not unsigned integers.
    /// Line numbers are 1-based.
    #[error("line {line_number}: {reason}: {line:?}")]
    Parse {
        line_number: usize,
        line: String,
        reason: ParseReason,
    },
    #[error("failed to write the summary: {0}")]
    Summary(#[from] serde_json::Error),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl Error {
    pub fn configuration<P: Into<PathBuf>>(path: P, source: std::io::Error) -> Self {
        Error::Configuration {
            path: path.into(),
            source,
        }
    }
}

/// Why a data line could not be parsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ParseReason {
    #[error("the first field is not a {0}")]
    First(&'static str),
    #[error("the second field is missing")]
    MissingSecond,
    #[error("the second field is not a {0}")]
    Second(&'static str),
}

pub type Result<T> = std::result::Result<T, Error>;

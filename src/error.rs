//! Error enum
use std::fmt;
use std::path::PathBuf;

#[derive(Debug)]
pub enum Error {
    Io(std::io::Error),
    Serde(serde_json::Error),
    Csv(csv::Error),

    /// Corpus file extension is not one of the supported formats.
    UnknownFormat(PathBuf),

    /// A JSON Lines row that is not a JSON object.
    MalformedRow { row: usize, line: String },

    /// A JSON Lines row that is not valid JSON.
    InvalidJson {
        row: usize,
        line: String,
        source: serde_json::Error,
    },

    /// The configured text column does not exist in a CSV corpus.
    MissingField { field: String, path: PathBuf },

    /// An evaluation row has no usable context.
    EmptyContext { row: usize, content: String },

    /// An evaluation row matches no document, neither exactly nor by prefix.
    UnresolvedContext { row: usize, content: String },
}

impl Error {
    /// true for the two data-integrity failures raised during resolution.
    pub fn is_coverage_failure(&self) -> bool {
        matches!(
            self,
            Error::EmptyContext { .. } | Error::UnresolvedContext { .. }
        )
    }

    /// Row index carried by row-level failures.
    pub fn row(&self) -> Option<usize> {
        match self {
            Error::EmptyContext { row, .. } | Error::UnresolvedContext { row, .. } => Some(*row),
            Error::MalformedRow { row, .. } | Error::InvalidJson { row, .. } => Some(*row),
            _ => None,
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "io error: {}", e),
            Error::Serde(e) => write!(f, "json error: {}", e),
            Error::Csv(e) => write!(f, "csv error: {}", e),
            Error::UnknownFormat(p) => write!(
                f,
                "unknown corpus format for {:?} (expected .jsonl, .json or .csv, optionally .gz)",
                p
            ),
            Error::MalformedRow { row, line } => {
                write!(f, "Row {}: not a JSON object. Line content: {}", row, line)
            }
            Error::InvalidJson { row, line, source } => write!(
                f,
                "Row {}: invalid JSON ({}). Line content: {}",
                row, source, line
            ),
            Error::MissingField { field, path } => {
                write!(f, "no column named {:?} in {:?}", field, path)
            }
            Error::EmptyContext { row, content } => write!(
                f,
                "Row {}: Context is empty/None. Row content: {}",
                row, content
            ),
            Error::UnresolvedContext { row, content } => write!(
                f,
                "Row {}: None (Not found in doc). Row content: {}",
                row, content
            ),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Io(e) => Some(e),
            Error::Serde(e) => Some(e),
            Error::Csv(e) => Some(e),
            Error::InvalidJson { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Error {
        Error::Io(e)
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Error {
        Error::Serde(e)
    }
}

impl From<csv::Error> for Error {
    fn from(e: csv::Error) -> Error {
        Error::Csv(e)
    }
}

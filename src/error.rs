// error.rs - Crate-wide error type

use thiserror::Error;

/// Every failure the pipeline can report. All of them are terminal.
#[derive(Error, Debug)]
pub enum MlstDistError {
    /// Two call vectors (or a record and its header) disagree in length
    #[error("shape mismatch: {context} has {found} loci, expected {expected}")]
    ShapeMismatch {
        context: String,
        expected: usize,
        found: usize,
    },

    #[error("unknown metric '{0}'. Use: count (absolute), proportion")]
    UnknownMetric(String),

    #[error("unknown layout '{0}'. Use: square, triangular")]
    UnknownLayout(String),

    #[error("unknown row order '{0}'. Use: loaded, sorted")]
    UnknownRowOrder(String),

    #[error("unknown output format '{0}'. Use: phylip, tsv")]
    UnknownFormat(String),

    #[error("duplicate sample identifier '{0}'")]
    DuplicateIdentifier(String),

    /// Proportion over zero loci is undefined
    #[error("profile table has no loci")]
    NoLoci,

    /// A condensed-matrix lookup fell outside the stored triangle.
    /// Only reachable through a bug in matrix assembly.
    #[error("internal error: no stored distance for pair ({a}, {b})")]
    LookupInconsistency { a: usize, b: usize },

    #[error("configuration error: {message}")]
    Config { message: String },

    #[error("parse error at line {line}: {message}")]
    Parse { line: usize, message: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

pub type Result<T> = std::result::Result<T, MlstDistError>;

impl MlstDistError {
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    pub fn parse(line: usize, message: impl Into<String>) -> Self {
        Self::Parse {
            line,
            message: message.into(),
        }
    }

    pub fn shape(context: impl Into<String>, expected: usize, found: usize) -> Self {
        Self::ShapeMismatch {
            context: context.into(),
            expected,
            found,
        }
    }
}

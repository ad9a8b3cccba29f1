use thiserror::Error;

/// Holds the errors that abort a yield locus run
#[derive(Error, Debug)]
pub enum Error {
    /// Input file missing, truncated, or holding non-numeric cells
    #[error("data format error in {path}: {message}")]
    DataFormat { path: String, message: String },

    /// A row is narrower than the column schema requires
    #[error("schema error in {path}: row {row} has {width} columns but at least {required} are required")]
    Schema {
        path: String,
        row: usize,
        width: usize,
        required: usize,
    },

    /// Swift hardening evaluated on a negative base with a non-integer exponent
    #[error("domain error at sample {index}: eps0 + strain = {base:?} cannot be raised to n = {exponent:?}")]
    Domain { index: usize, base: f64, exponent: f64 },

    /// Zero flow stress found while normalizing
    #[error("division by zero at sample {index}: the flow stress is zero")]
    DivisionByZero { index: usize },

    /// Two series that must be index-aligned have different lengths
    #[error("length mismatch: {what} has {actual} entries but {expected} were expected")]
    LengthMismatch {
        what: &'static str,
        expected: usize,
        actual: usize,
    },

    /// Inconsistent configuration data
    #[error("invalid configuration: {0}")]
    Config(String),

    /// The plotting backend failed
    #[error("cannot render figure: {0}")]
    Render(String),

    /// File-system failure while reading configuration or publishing the figure
    #[error("cannot access {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

impl Error {
    /// Returns a DataFormat error for the given path
    pub(crate) fn data_format<S: Into<String>>(path: &str, message: S) -> Self {
        Error::DataFormat {
            path: path.to_string(),
            message: message.into(),
        }
    }

    /// Returns an Io error for the given path
    pub(crate) fn io(path: &str, source: std::io::Error) -> Self {
        Error::Io {
            path: path.to_string(),
            source,
        }
    }
}

/// Converts the plotting backend errors
impl From<&'static str> for Error {
    fn from(message: &'static str) -> Self {
        Error::Render(message.to_string())
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

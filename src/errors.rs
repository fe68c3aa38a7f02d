use std::path::PathBuf;
use std::sync::Arc;
use thiserror::Error;

/// Errors that can occur while loading or rendering a scene
#[derive(Error, Debug)]
pub enum FigdrawError {
    /// A size parameter that must be positive was zero
    #[error("Invalid {figure} {field}: {value} (must be greater than zero)")]
    InvalidDimension {
        figure: &'static str,
        field: &'static str,
        value: i64,
    },

    /// Fill symbol is not a printable character
    #[error("Invalid symbol {symbol:?}: must be a printable character")]
    InvalidSymbol { symbol: char },

    /// Error when a scene line cannot be parsed
    #[error("Parse error on line {line}: {message}")]
    ParseError { line: usize, message: Arc<String> },

    /// Error when a TOML scene cannot be deserialized
    #[error("Deserialization error: {0}")]
    DeserializationError(Arc<String>),

    /// Scene is missing a required entry
    #[error("Configuration error: {0}")]
    ConfigurationError(Arc<String>),

    /// Error when trying to read or write a file
    #[error("File access error for {path}: {message}")]
    FileAccessError { path: PathBuf, message: Arc<String> },

    /// IO error
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

/// Type alias for Result with `FigdrawError`
pub type Result<T> = std::result::Result<T, FigdrawError>;

impl FigdrawError {
    pub fn parse(line: usize, message: impl Into<String>) -> Self {
        Self::ParseError {
            line,
            message: Arc::new(message.into()),
        }
    }

    pub fn configuration(message: impl Into<String>) -> Self {
        Self::ConfigurationError(Arc::new(message.into()))
    }

    pub fn file_access(path: impl Into<PathBuf>, err: &std::io::Error) -> Self {
        Self::FileAccessError {
            path: path.into(),
            message: Arc::new(err.to_string()),
        }
    }

    /// True for errors raised while validating figure or canvas parameters
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::InvalidDimension { .. } | Self::InvalidSymbol { .. }
        )
    }
}

impl From<toml::de::Error> for FigdrawError {
    fn from(error: toml::de::Error) -> Self {
        FigdrawError::DeserializationError(Arc::new(error.to_string()))
    }
}

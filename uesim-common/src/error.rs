//! Error types for the simulated-UE store

use thiserror::Error;

/// Error types for the UE store crates.
#[derive(Debug, Error)]
pub enum Error {
    /// A UE record failed validation. Carries the field and constraint that
    /// was violated, e.g. `"key must be 32 bytes"`.
    #[error("Invalid Argument: {0}")]
    InvalidArgument(String),

    /// File I/O errors.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// YAML parsing errors.
    #[error("YAML parse error: {0}")]
    YamlParse(#[from] serde_yaml::Error),
}

impl Error {
    /// Creates an [`Error::InvalidArgument`] from any message.
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Error::InvalidArgument(msg.into())
    }

    /// Returns true if this is a validation failure.
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, Error::InvalidArgument(_))
    }
}

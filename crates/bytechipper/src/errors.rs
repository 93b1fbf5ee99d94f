//! # Error Types

/// Errors from bytechipper operations.
#[derive(Debug, thiserror::Error)]
pub enum BytechipperError {
    /// A required option was not configured.
    #[error("missing required option: {0}")]
    MissingOption(String),

    /// An option could not be interpreted.
    #[error("invalid options for {name}: {message}")]
    InvalidOptions {
        /// The registry name of the entry being configured.
        name: String,

        /// What was wrong.
        message: String,
    },

    /// A registry entry or resource is not found.
    #[error("resource not found: {0}")]
    ResourceNotFound(String),

    /// A registry entry or resource already exists.
    #[error("duplicated resource: {0}")]
    DuplicatedResource(String),

    /// I/O error.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Parse error (token ids, etc.)
    #[error("parse error: {0}")]
    Parse(String),

    /// Error from an external component.
    #[error("{0}")]
    External(String),
}

/// Alias for [`BytechipperError`].
pub type BCError = BytechipperError;

/// Result type for bytechipper operations.
pub type BCResult<T> = core::result::Result<T, BytechipperError>;

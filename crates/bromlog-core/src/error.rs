//! Error types for bromlog-core

use thiserror::Error;

/// Core error type
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A captured field did not hold a hexadecimal number of the expected width
    #[error("field `{field}` is not a valid hex value: {text:?}")]
    InvalidHex {
        /// Name of the capture group
        field: &'static str,
        /// Captured text
        text: String,
    },

    /// A shape pattern matched without producing a mandatory capture
    #[error("missing capture `{0}`")]
    MissingField(&'static str),
}

/// Result type alias using the core Error type
pub type Result<T> = core::result::Result<T, Error>;

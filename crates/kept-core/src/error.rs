//! Core error types for kept-core.
//!
//! Persistence failures deliberately do not appear here as propagated
//! errors: slot load and write problems degrade to defaults or are
//! swallowed with a logged warning (see the storage and store modules).
//! What remains is I/O and encoding plumbing, plus the standalone
//! [`ValidationError`] the operation boundary rejects bad input with.

use thiserror::Error;

/// Core error type for kept-core.
///
/// [`ValidationError`] stands on its own: the operation boundary returns
/// it directly rather than wrapping it here.
#[derive(Error, Debug)]
pub enum CoreError {
    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Validation errors, raised at the operation boundary before anything
/// reaches the state store.
#[derive(Error, Debug)]
pub enum ValidationError {
    /// Required text field was empty
    #[error("'{field}' must not be empty")]
    EmptyField { field: &'static str },

    /// Price must be strictly positive
    #[error("price must be greater than 0, got {price}")]
    NonPositivePrice { price: f64 },

    /// Numbered entry outside its challenge range
    #[error("{field} must be between 1 and {max}, got {value}")]
    OutOfRange {
        field: &'static str,
        value: u32,
        max: u32,
    },

    /// Calendar days cannot be logged ahead of today
    #[error("cannot mark a future date ({date})")]
    FutureDate { date: String },

    /// Not a `YYYY-MM-DD` date key
    #[error("invalid date '{input}', expected YYYY-MM-DD")]
    InvalidDate { input: String },

    /// No record with the given id
    #[error("no {kind} with id {id}")]
    UnknownId { kind: &'static str, id: String },
}

/// Result type alias for CoreError
pub type Result<T, E = CoreError> = std::result::Result<T, E>;

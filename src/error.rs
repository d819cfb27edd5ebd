//! Custom error types for the pintop plugin

use thiserror::Error;

/// Main error type for pintop operations
///
/// Window-control failures are deliberately not represented here: every native
/// call is best-effort and reports through neutral `bool`/`Option` results.
/// Errors are reserved for the fallible edges the host actually has to react
/// to, namely settings deserialization and custom-command validation.
#[derive(Error, Debug)]
pub enum PinTopError {
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Invalid command configuration: {0}")]
    InvalidCommand(String),
}

/// Result type alias for pintop operations
pub type PinTopResult<T> = Result<T, PinTopError>;

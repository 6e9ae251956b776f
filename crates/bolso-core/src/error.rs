use thiserror::Error;

/// Error type covering engine precondition and usage failures.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("Validation failed: {0}")]
    Validation(String),
    #[error("Invalid operation: {0}")]
    InvalidOperation(String),
}

//! Grade validation error types.
//!
//! These errors are raised when an assignment is added to the calculator.
//! Each one is fatal to the single `add` call that produced it; the
//! calculator's state is left untouched.

use thiserror::Error;

/// Errors that can occur when recording an assignment.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GradeError {
    /// The category code is not one of the recognized variants.
    #[error("category must be 'FA' or 'SA', got '{0}'")]
    InvalidCategory(String),

    /// The score lies outside the inclusive 0-100 range.
    #[error("score must be between 0 and 100, got {0}")]
    ScoreOutOfRange(f64),
}

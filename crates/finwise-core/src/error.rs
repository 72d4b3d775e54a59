use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Error, PartialEq)]
pub enum CoreError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    #[error("Validation failed: {0}")]
    Validation(String),
    #[error("Budget item not found: {0}")]
    LineItemNotFound(Uuid),
    #[error("Goal not found: {0}")]
    GoalNotFound(Uuid),
}

/// Rejects NaN and infinite values so they never reach a formula.
pub(crate) fn ensure_finite(field: &str, value: f64) -> Result<f64, CoreError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(CoreError::InvalidInput(format!(
            "{field} must be a finite number, got {value}"
        )))
    }
}

use thiserror::Error;

/// Domain errors for the number and price formatters.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FormatError {
    #[error("field '{field}' must be finite")]
    NonFinite { field: &'static str },
    #[error("field '{field}' must be non-negative")]
    Negative { field: &'static str },
}

impl FormatError {
    /// Checks that `value` is a finite, non-negative amount.
    pub fn check(field: &'static str, value: f64) -> Result<f64, FormatError> {
        if !value.is_finite() {
            return Err(FormatError::NonFinite { field });
        }
        if value < 0.0 {
            return Err(FormatError::Negative { field });
        }
        // -0.0 passes the sign check but would print as "-0.00"
        Ok(value.abs())
    }
}

use thiserror::Error;

#[derive(Debug, Error)]
pub enum FixedInterestError {
    #[error("Invalid input: {field} — {reason}")]
    InvalidInput { field: String, reason: String },

    #[error("Invalid term: a loan must run for at least one period (got {periods})")]
    InvalidTerm { periods: i64 },

    #[error("Invalid compounding frequency: compounding periods per year must be at least 1")]
    InvalidCompoundingFrequency,

    #[error("Division by zero in {context}")]
    DivisionByZero { context: String },

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

impl From<serde_json::Error> for FixedInterestError {
    fn from(e: serde_json::Error) -> Self {
        FixedInterestError::SerializationError(e.to_string())
    }
}

pub mod error;
pub mod rates;
pub mod types;

#[cfg(feature = "interest")]
pub mod interest;

#[cfg(feature = "loan")]
pub mod loan;

pub use error::FixedInterestError;
pub use types::*;

/// Standard result type for all fixed-interest operations
pub type FixedInterestResult<T> = Result<T, FixedInterestError>;

pub mod comparison;
pub mod consortium;
pub mod error;
pub mod financing;
pub mod fixed_income;
pub mod rates;
pub mod types;

pub use error::FinCompareError;
pub use types::*;

/// Standard result type for all fincompare operations
pub type FinCompareResult<T> = Result<T, FinCompareError>;

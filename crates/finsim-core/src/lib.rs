pub mod budget;
pub mod cash_flow;
pub mod compounding;
pub mod debt;
pub mod error;
pub mod investment;
pub mod loan;
pub mod retirement;
pub mod savings;
pub mod types;

pub use error::FinSimError;
pub use types::*;

/// Standard result type for all finsim operations
pub type FinSimResult<T> = Result<T, FinSimError>;

pub mod debt;
pub mod forecast;
pub mod growth;
pub mod loan;

pub mod insights;
pub mod loan;

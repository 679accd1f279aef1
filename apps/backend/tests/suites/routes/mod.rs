pub mod payments;
pub mod salaries;
pub mod works;

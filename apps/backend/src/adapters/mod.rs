//! Adapters for external dependencies.

pub mod salaries_sea;
pub mod users_sea;
pub mod works_sea;

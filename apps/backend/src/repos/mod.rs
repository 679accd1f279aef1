//! Repository layer: domain models over the sea-orm adapters.

pub mod salaries;
pub mod users;
pub mod works;

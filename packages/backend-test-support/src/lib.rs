//! Backend test support utilities
//!
//! Shared helpers for the backend's integration tests: one-time logging
//! initialization, problem-details assertions and unique test data.

pub mod logging;
pub mod problem_details;
pub mod unique_helpers;

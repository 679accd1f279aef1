//! DTOs for works_sea adapter.

use serde_json::Value;

/// DTO for inserting a work record.
#[derive(Debug, Clone)]
pub struct WorkCreate {
    pub employee_email: String,
    pub employee_name: Option<String>,
    pub category: String,
    pub details: Value,
    /// Epoch millis
    pub created_at: i64,
}

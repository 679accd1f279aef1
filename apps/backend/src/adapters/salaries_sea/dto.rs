//! DTOs for salaries_sea adapter.

/// DTO for recording a salary payment.
#[derive(Debug, Clone)]
pub struct SalaryCreate {
    pub employee_email: String,
    pub month: String,
    pub year: i32,
    pub amount: f64,
    pub transaction_id: Option<String>,
    /// Epoch millis
    pub paid_at: i64,
}

use sea_orm::ConnectionTrait;
use tracing::info;

use crate::error::AppError;
use crate::errors::ErrorCode;
use crate::logging::pii::Redacted;
use crate::repos::salaries::{self, Salary, SalaryCreate};
use crate::services::{now_millis, require_email};

const MONTHS: [&str; 12] = [
    "january",
    "february",
    "march",
    "april",
    "may",
    "june",
    "july",
    "august",
    "september",
    "october",
    "november",
    "december",
];

/// Accepts a month name (any case) or its number 1..=12; returns the capitalized name.
pub fn normalize_month(raw: &str) -> Result<String, AppError> {
    let raw = raw.trim();
    let index = match raw.parse::<usize>() {
        Ok(n) if (1..=12).contains(&n) => Some(n - 1),
        Ok(_) => None,
        Err(_) => MONTHS.iter().position(|m| m.eq_ignore_ascii_case(raw)),
    };
    let name = index.map(|i| MONTHS[i]).ok_or_else(|| {
        AppError::invalid(ErrorCode::ValidationError, format!("Unknown month '{raw}'"))
    })?;

    let mut chars = name.chars();
    Ok(match chars.next() {
        Some(first) => first.to_ascii_uppercase().to_string() + chars.as_str(),
        None => String::new(),
    })
}

/// Input for [`record_salary`].
#[derive(Debug, Clone)]
pub struct SalaryPayment {
    pub employee_email: String,
    pub month: String,
    pub year: i32,
    pub amount: f64,
    pub transaction_id: Option<String>,
}

/// Record a payment; each employee is paid at most once per month.
pub async fn record_salary<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    payment: SalaryPayment,
) -> Result<Salary, AppError> {
    let employee_email = require_email(&payment.employee_email)?;
    let month = normalize_month(&payment.month)?;
    if !(1970..=9999).contains(&payment.year) {
        return Err(AppError::invalid(
            ErrorCode::ValidationError,
            "Year is out of range",
        ));
    }
    if !payment.amount.is_finite() || payment.amount <= 0.0 {
        return Err(AppError::invalid(
            ErrorCode::ValidationError,
            "Amount must be a positive number",
        ));
    }

    if salaries::exists_for_period(conn, &employee_email, &month, payment.year).await? {
        return Err(AppError::conflict(
            ErrorCode::Conflict,
            format!("Salary for {month} {} was already paid", payment.year),
        ));
    }

    let dto = SalaryCreate {
        employee_email,
        month,
        year: payment.year,
        amount: payment.amount,
        transaction_id: payment.transaction_id.filter(|t| !t.trim().is_empty()),
        paid_at: now_millis(),
    };
    let salary = salaries::create_salary(conn, dto).await?;
    info!(
        email = %Redacted(&salary.employee_email),
        month = %salary.month,
        year = salary.year,
        "Salary recorded"
    );
    Ok(salary)
}

pub async fn list_salaries_for<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    email: &str,
) -> Result<Vec<Salary>, AppError> {
    Ok(salaries::list_salaries_by_employee(conn, email).await?)
}

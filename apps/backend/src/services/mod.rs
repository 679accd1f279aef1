//! Service layer: validation and orchestration between routes and repos.

pub mod payments;
pub mod salaries;
pub mod users;
pub mod works;

use crate::error::AppError;
use crate::errors::ErrorCode;

/// Current wall-clock time in epoch millis.
pub(crate) fn now_millis() -> i64 {
    (time::OffsetDateTime::now_utc().unix_timestamp_nanos() / 1_000_000) as i64
}

/// Light shape check; the identity provider has already vetted the address.
pub(crate) fn require_email(raw: &str) -> Result<String, AppError> {
    let email = raw.trim();
    let valid = match email.split_once('@') {
        Some((local, domain)) => !local.is_empty() && !domain.is_empty() && !email.contains(' '),
        None => false,
    };
    if !valid {
        return Err(AppError::invalid(
            ErrorCode::InvalidEmail,
            "A valid email address is required",
        ));
    }
    Ok(email.to_string())
}

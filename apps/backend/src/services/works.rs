use sea_orm::ConnectionTrait;
use serde_json::Value;

use crate::error::AppError;
use crate::errors::ErrorCode;
use crate::repos::works::{self, Work, WorkCreate};
use crate::services::{now_millis, require_email};

/// The web client sends the literal string "null" when no category is selected.
pub fn category_filter(raw: Option<&str>) -> Option<&str> {
    match raw.map(str::trim) {
        None | Some("") | Some("null") => None,
        Some(category) => Some(category),
    }
}

pub async fn create_work<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    employee_email: &str,
    employee_name: Option<String>,
    category: &str,
    details: Value,
) -> Result<Work, AppError> {
    let employee_email = require_email(employee_email)?;
    let category = category.trim();
    if category.is_empty() {
        return Err(AppError::invalid(
            ErrorCode::InvalidCategory,
            "Category is required",
        ));
    }

    let dto = WorkCreate {
        employee_email,
        employee_name,
        category: category.to_string(),
        details,
        created_at: now_millis(),
    };
    Ok(works::create_work(conn, dto).await?)
}

pub async fn list_works<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    category: Option<&str>,
) -> Result<Vec<Work>, AppError> {
    Ok(works::list_works(conn, category_filter(category)).await?)
}

pub async fn list_works_for<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    email: &str,
) -> Result<Vec<Work>, AppError> {
    Ok(works::list_works_by_employee(conn, email).await?)
}

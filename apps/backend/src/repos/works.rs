//! Work-record repository functions.

use sea_orm::ConnectionTrait;
use serde_json::Value;

use crate::adapters::works_sea as works_adapter;
use crate::errors::domain::DomainError;

pub use works_adapter::WorkCreate;

/// Work record domain model
#[derive(Debug, Clone, PartialEq)]
pub struct Work {
    pub id: i64,
    pub employee_email: String,
    pub employee_name: Option<String>,
    pub category: String,
    pub details: Value,
    pub created_at: i64,
}

pub async fn create_work<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    dto: WorkCreate,
) -> Result<Work, DomainError> {
    let work = works_adapter::create_work(conn, dto).await?;
    Ok(Work::from(work))
}

/// `category = None` lists everything.
pub async fn list_works<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    category: Option<&str>,
) -> Result<Vec<Work>, DomainError> {
    let works = works_adapter::list_works(conn, category).await?;
    Ok(works.into_iter().map(Work::from).collect())
}

pub async fn list_works_by_employee<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    email: &str,
) -> Result<Vec<Work>, DomainError> {
    let works = works_adapter::list_works_by_employee(conn, email).await?;
    Ok(works.into_iter().map(Work::from).collect())
}

impl From<crate::entities::works::Model> for Work {
    fn from(model: crate::entities::works::Model) -> Self {
        Self {
            id: model.id,
            employee_email: model.employee_email,
            employee_name: model.employee_name,
            category: model.category,
            details: model.details,
            created_at: model.created_at,
        }
    }
}

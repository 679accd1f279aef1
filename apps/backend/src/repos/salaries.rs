//! Salary-payment repository functions.

use sea_orm::ConnectionTrait;

use crate::adapters::salaries_sea as salaries_adapter;
use crate::errors::domain::DomainError;

pub use salaries_adapter::SalaryCreate;

/// Salary payment domain model
#[derive(Debug, Clone, PartialEq)]
pub struct Salary {
    pub id: i64,
    pub employee_email: String,
    pub month: String,
    pub year: i32,
    pub amount: f64,
    pub transaction_id: Option<String>,
    pub paid_at: i64,
}

pub async fn create_salary<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    dto: SalaryCreate,
) -> Result<Salary, DomainError> {
    let salary = salaries_adapter::create_salary(conn, dto).await?;
    Ok(Salary::from(salary))
}

pub async fn list_salaries_by_employee<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    email: &str,
) -> Result<Vec<Salary>, DomainError> {
    let rows = salaries_adapter::list_salaries_by_employee(conn, email).await?;
    Ok(rows.into_iter().map(Salary::from).collect())
}

pub async fn exists_for_period<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    email: &str,
    month: &str,
    year: i32,
) -> Result<bool, DomainError> {
    Ok(salaries_adapter::exists_for_period(conn, email, month, year).await?)
}

impl From<crate::entities::salaries::Model> for Salary {
    fn from(model: crate::entities::salaries::Model) -> Self {
        Self {
            id: model.id,
            employee_email: model.employee_email,
            month: model.month,
            year: model.year,
            amount: model.amount,
            transaction_id: model.transaction_id,
            paid_at: model.paid_at,
        }
    }
}

//! SeaORM adapter for salary payments.

use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, NotSet, QueryFilter, QueryOrder,
    Set,
};

use crate::entities::salaries;

pub mod dto;

pub use dto::SalaryCreate;

pub async fn create_salary<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    dto: SalaryCreate,
) -> Result<salaries::Model, sea_orm::DbErr> {
    let active = salaries::ActiveModel {
        id: NotSet,
        employee_email: Set(dto.employee_email),
        month: Set(dto.month),
        year: Set(dto.year),
        amount: Set(dto.amount),
        transaction_id: Set(dto.transaction_id),
        paid_at: Set(dto.paid_at),
    };
    active.insert(conn).await
}

pub async fn list_salaries_by_employee<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    email: &str,
) -> Result<Vec<salaries::Model>, sea_orm::DbErr> {
    salaries::Entity::find()
        .filter(salaries::Column::EmployeeEmail.eq(email))
        .order_by_asc(salaries::Column::Id)
        .all(conn)
        .await
}

/// Whether a payment for this employee and period already exists.
pub async fn exists_for_period<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    email: &str,
    month: &str,
    year: i32,
) -> Result<bool, sea_orm::DbErr> {
    let found = salaries::Entity::find()
        .filter(salaries::Column::EmployeeEmail.eq(email))
        .filter(salaries::Column::Month.eq(month))
        .filter(salaries::Column::Year.eq(year))
        .one(conn)
        .await?;
    Ok(found.is_some())
}

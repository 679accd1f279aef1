//! SeaORM adapter for work-assignment records.

use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, NotSet, QueryFilter, QueryOrder,
    Set,
};

use crate::entities::works;

pub mod dto;

pub use dto::WorkCreate;

pub async fn create_work<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    dto: WorkCreate,
) -> Result<works::Model, sea_orm::DbErr> {
    let active = works::ActiveModel {
        id: NotSet,
        employee_email: Set(dto.employee_email),
        employee_name: Set(dto.employee_name),
        category: Set(dto.category),
        details: Set(dto.details),
        created_at: Set(dto.created_at),
    };
    active.insert(conn).await
}

pub async fn list_works<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    category: Option<&str>,
) -> Result<Vec<works::Model>, sea_orm::DbErr> {
    let mut query = works::Entity::find();
    if let Some(category) = category {
        query = query.filter(works::Column::Category.eq(category));
    }
    query.order_by_asc(works::Column::Id).all(conn).await
}

pub async fn list_works_by_employee<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    email: &str,
) -> Result<Vec<works::Model>, sea_orm::DbErr> {
    works::Entity::find()
        .filter(works::Column::EmployeeEmail.eq(email))
        .order_by_asc(works::Column::Id)
        .all(conn)
        .await
}

//! SeaORM adapter for the identity store.

use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, NotSet, QueryFilter, QueryOrder,
    QuerySelect, Set,
};

use crate::entities::users::{self, Role};

pub mod dto;

pub use dto::UserCreate;

// Adapter functions return DbErr; repos layer maps to DomainError via From<DbErr>.

pub async fn find_by_email<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    email: &str,
) -> Result<Option<users::Model>, sea_orm::DbErr> {
    users::Entity::find()
        .filter(users::Column::Email.eq(email))
        .one(conn)
        .await
}

/// Only the role column; the guard never needs the rest of the row.
pub async fn find_role_by_email<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    email: &str,
) -> Result<Option<Role>, sea_orm::DbErr> {
    users::Entity::find()
        .select_only()
        .column(users::Column::Role)
        .filter(users::Column::Email.eq(email))
        .into_tuple::<Role>()
        .one(conn)
        .await
}

pub async fn create_user<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    dto: UserCreate,
) -> Result<users::Model, sea_orm::DbErr> {
    let user_active = users::ActiveModel {
        id: NotSet,
        email: Set(dto.email),
        name: Set(dto.name),
        photo: Set(dto.photo),
        role: Set(dto.role),
        is_verified: Set(dto.is_verified),
        designation: Set(dto.designation),
        bank_account_no: Set(dto.bank_account_no),
        salary: Set(dto.salary),
        timestamp: Set(dto.timestamp),
    };

    user_active.insert(conn).await
}

/// Returns the number of rows touched (0 when the email is unknown).
pub async fn set_verified<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    email: &str,
) -> Result<u64, sea_orm::DbErr> {
    let res = users::Entity::update_many()
        .col_expr(users::Column::IsVerified, Expr::value(true))
        .filter(users::Column::Email.eq(email))
        .exec(conn)
        .await?;
    Ok(res.rows_affected)
}

pub async fn set_role<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    email: &str,
    role: Role,
) -> Result<u64, sea_orm::DbErr> {
    let res = users::Entity::update_many()
        .col_expr(users::Column::Role, Expr::value(role.as_str()))
        .filter(users::Column::Email.eq(email))
        .exec(conn)
        .await?;
    Ok(res.rows_affected)
}

pub async fn list_users<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    role: Option<Role>,
) -> Result<Vec<users::Model>, sea_orm::DbErr> {
    let mut query = users::Entity::find();
    if let Some(role) = role {
        query = query.filter(users::Column::Role.eq(role));
    }
    query.order_by_asc(users::Column::Id).all(conn).await
}

//! Identity repository functions (generic over ConnectionTrait).

use sea_orm::ConnectionTrait;

use crate::adapters::users_sea as users_adapter;
use crate::entities::users::Role;
use crate::errors::domain::DomainError;

pub use users_adapter::UserCreate;

/// Identity domain model
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: i64,
    pub email: String,
    pub name: Option<String>,
    pub photo: Option<String>,
    pub role: Role,
    pub is_verified: bool,
    pub designation: Option<String>,
    pub bank_account_no: Option<String>,
    pub salary: Option<f64>,
    pub timestamp: i64,
}

pub async fn find_user_by_email<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    email: &str,
) -> Result<Option<User>, DomainError> {
    let user = users_adapter::find_by_email(conn, email).await?;
    Ok(user.map(User::from))
}

pub async fn find_role_by_email<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    email: &str,
) -> Result<Option<Role>, DomainError> {
    Ok(users_adapter::find_role_by_email(conn, email).await?)
}

pub async fn create_user<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    dto: UserCreate,
) -> Result<User, DomainError> {
    let user = users_adapter::create_user(conn, dto).await?;
    Ok(User::from(user))
}

pub async fn set_verified<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    email: &str,
) -> Result<u64, DomainError> {
    Ok(users_adapter::set_verified(conn, email).await?)
}

pub async fn set_role<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    email: &str,
    role: Role,
) -> Result<u64, DomainError> {
    Ok(users_adapter::set_role(conn, email, role).await?)
}

pub async fn list_users<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    role: Option<Role>,
) -> Result<Vec<User>, DomainError> {
    let users = users_adapter::list_users(conn, role).await?;
    Ok(users.into_iter().map(User::from).collect())
}

impl From<crate::entities::users::Model> for User {
    fn from(model: crate::entities::users::Model) -> Self {
        Self {
            id: model.id,
            email: model.email,
            name: model.name,
            photo: model.photo,
            role: model.role,
            is_verified: model.is_verified,
            designation: model.designation,
            bank_account_no: model.bank_account_no,
            salary: model.salary,
            timestamp: model.timestamp,
        }
    }
}

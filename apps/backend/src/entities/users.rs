use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Stored role of an identity. New identities start as `Unset`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, EnumIter, DeriveActiveEnum, Serialize, Deserialize,
)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(16))")]
#[serde(rename_all = "lowercase")]
pub enum Role {
    #[default]
    #[sea_orm(string_value = "unset")]
    Unset,
    #[sea_orm(string_value = "employee")]
    Employee,
    #[sea_orm(string_value = "host")]
    Host,
    #[sea_orm(string_value = "admin")]
    Admin,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Unset => "unset",
            Role::Employee => "employee",
            Role::Host => "host",
            Role::Admin => "admin",
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    #[sea_orm(unique)]
    pub email: String,
    pub name: Option<String>,
    pub photo: Option<String>,
    pub role: Role,
    #[sea_orm(column_name = "is_verified")]
    pub is_verified: bool,
    pub designation: Option<String>,
    #[sea_orm(column_name = "bank_account_no")]
    pub bank_account_no: Option<String>,
    #[sea_orm(column_type = "Double", nullable)]
    pub salary: Option<f64>,
    /// Join time, epoch millis
    pub timestamp: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

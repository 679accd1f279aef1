use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "works")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    #[sea_orm(column_name = "employee_email")]
    pub employee_email: String,
    #[sea_orm(column_name = "employee_name")]
    pub employee_name: Option<String>,
    pub category: String,
    /// Free-form payload supplied by the client (hours, date, notes, ...)
    #[sea_orm(column_type = "Json")]
    pub details: Json,
    #[sea_orm(column_name = "created_at")]
    pub created_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

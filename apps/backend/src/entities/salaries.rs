use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "salaries")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    #[sea_orm(column_name = "employee_email")]
    pub employee_email: String,
    pub month: String,
    pub year: i32,
    #[sea_orm(column_type = "Double")]
    pub amount: f64,
    #[sea_orm(column_name = "transaction_id")]
    pub transaction_id: Option<String>,
    #[sea_orm(column_name = "paid_at")]
    pub paid_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

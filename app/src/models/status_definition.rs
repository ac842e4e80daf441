use sea_orm::entity::prelude::*;
use serde::Serialize;

#[derive(Debug, Clone, DeriveEntityModel, PartialEq, Serialize)]
#[sea_orm(table_name = "status_definitions")]
#[serde(rename_all = "camelCase")]
pub struct Model {
    /// Uppercase snake-case status code, e.g. `IN_PROGRESS`.
    #[sea_orm(primary_key, auto_increment = false)]
    pub code: String,
    pub description: Option<String>,
    #[serde(skip_serializing)]
    pub created_by: Option<i32>,
    #[serde(skip_serializing)]
    pub updated_by: Option<i32>,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

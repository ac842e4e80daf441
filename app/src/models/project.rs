use sea_orm::entity::prelude::*;
use serde::Serialize;

pub const DEFAULT_STATUS_WORKFLOW: [&str; 4] = ["TO_DO", "IN_PROGRESS", "IN_REVIEW", "DONE"];

#[derive(Debug, Clone, DeriveEntityModel, PartialEq, Serialize)]
#[sea_orm(table_name = "projects")]
#[serde(rename_all = "camelCase")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub title: String,
    /// Short uppercase project code, immutable after creation.
    #[sea_orm(unique)]
    pub code: String,
    pub description: Option<String>,
    pub leader_id: i32,
    /// Counter used to mint human-readable task ids (`<code>-<n>`).
    pub next_task_sequence: i32,
    pub status_workflow: Json,
    pub created_by: Option<i32>,
    pub updated_by: Option<i32>,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::LeaderId",
        to = "super::user::Column::Id"
    )]
    User,
    #[sea_orm(has_many = "super::task::Entity")]
    Task,
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl Related<super::task::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Task.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    /// Decode the stored workflow column into an ordered list of status codes.
    pub fn get_status_workflow(&self) -> Vec<String> {
        serde_json::from_value(self.status_workflow.clone()).unwrap_or_else(|_| {
            DEFAULT_STATUS_WORKFLOW
                .iter()
                .map(|s| ToString::to_string(s))
                .collect()
        })
    }
}

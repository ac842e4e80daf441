use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::None)")]
pub enum TaskPriority {
    #[sea_orm(string_value = "LOW")]
    #[serde(rename = "LOW")]
    Low,
    #[sea_orm(string_value = "MEDIUM")]
    #[serde(rename = "MEDIUM")]
    Medium,
    #[sea_orm(string_value = "HIGH")]
    #[serde(rename = "HIGH")]
    High,
    #[sea_orm(string_value = "CRITICAL")]
    #[serde(rename = "CRITICAL")]
    Critical,
}

#[derive(Debug, Clone, DeriveEntityModel, PartialEq, Serialize)]
#[sea_orm(table_name = "tasks")]
#[serde(rename_all = "camelCase")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub project_id: i32,
    /// Human-readable identifier minted from the project code, e.g. `WEBRED-42`.
    #[sea_orm(unique)]
    pub task_id: String,
    pub title: String,
    /// Status code; meaningful only together with `project_id` when ordering.
    pub status: String,
    /// Sparse sort key within the (project, status) partition.
    pub position: i32,
    pub priority: TaskPriority,
    pub story_points: Option<i32>,
    pub assignee_id: Option<i32>,
    pub prompt: Option<String>,
    pub is_blocked: bool,
    pub blocked_reason: Option<String>,
    pub git_feature_branch: Option<String>,
    pub git_pull_request_url: Option<String>,
    pub started_at: Option<DateTime>,
    pub completed_at: Option<DateTime>,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::project::Entity",
        from = "Column::ProjectId",
        to = "super::project::Column::Id",
        on_delete = "Cascade"
    )]
    Project,
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::AssigneeId",
        to = "super::user::Column::Id"
    )]
    User,
    #[sea_orm(has_many = "super::task_tag::Entity")]
    TaskTag,
    #[sea_orm(has_many = "super::image_metadata::Entity")]
    ImageMetadata,
}

impl Related<super::project::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Project.def()
    }
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl Related<super::task_tag::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::TaskTag.def()
    }
}

impl Related<super::image_metadata::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ImageMetadata.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

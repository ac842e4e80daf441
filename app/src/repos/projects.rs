use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};
use serde::Serialize;
use serde_json::json;

use crate::models::{
    project::{self, ActiveModel, Entity as ProjectEntity, Model as Project, DEFAULT_STATUS_WORKFLOW},
    task::{self, Entity as TaskEntity},
    user::Entity as UserEntity,
};

#[derive(Debug)]
pub struct NewProject {
    pub title: String,
    pub code: String,
    pub description: Option<String>,
    pub leader_id: i32,
    pub status_workflow: Option<Vec<String>>,
    pub created_by: Option<i32>,
}

#[derive(Debug, Default)]
pub struct ProjectChanges {
    pub title: Option<String>,
    pub description: Option<Option<String>>,
    pub leader_id: Option<i32>,
}

/// Project joined with leader info and its task count.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectDetails {
    pub id: i32,
    pub title: String,
    pub code: String,
    pub description: Option<String>,
    pub leader_id: i32,
    pub leader_name: Option<String>,
    pub leader_email: Option<String>,
    pub status_workflow: Vec<String>,
    pub task_count: u64,
    pub created_at: chrono::NaiveDateTime,
    pub updated_at: chrono::NaiveDateTime,
}

pub struct ProjectsRepo {
    pub db: DatabaseConnection,
}

impl ProjectsRepo {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get(&self, id: i32) -> Result<Project, DbErr> {
        let project = ProjectEntity::find_by_id(id).one(&self.db).await?;

        match project {
            Some(p) => Ok(p),
            None => Err(DbErr::RecordNotFound("Project not found".to_string())),
        }
    }

    pub async fn get_by_code(&self, code: &str) -> Result<Project, DbErr> {
        let project = ProjectEntity::find()
            .filter(project::Column::Code.eq(code))
            .one(&self.db)
            .await?;

        match project {
            Some(p) => Ok(p),
            None => Err(DbErr::RecordNotFound("Project not found".to_string())),
        }
    }

    pub async fn details(&self, project: Project) -> Result<ProjectDetails, DbErr> {
        let leader = UserEntity::find_by_id(project.leader_id).one(&self.db).await?;

        let task_count = TaskEntity::find()
            .filter(task::Column::ProjectId.eq(project.id))
            .count(&self.db)
            .await?;

        Ok(ProjectDetails {
            id: project.id,
            title: project.title.clone(),
            code: project.code.clone(),
            description: project.description.clone(),
            leader_id: project.leader_id,
            leader_name: leader.as_ref().map(|u| u.full_name.clone()),
            leader_email: leader.map(|u| u.email),
            status_workflow: project.get_status_workflow(),
            task_count,
            created_at: project.created_at,
            updated_at: project.updated_at,
        })
    }

    pub async fn list_details(&self) -> Result<Vec<ProjectDetails>, DbErr> {
        let projects = ProjectEntity::find()
            .order_by_asc(project::Column::Title)
            .all(&self.db)
            .await?;

        let mut detailed = Vec::with_capacity(projects.len());
        for project in projects {
            detailed.push(self.details(project).await?);
        }

        Ok(detailed)
    }

    pub async fn create(&self, data: NewProject) -> Result<Project, DbErr> {
        let workflow = data.status_workflow.unwrap_or_else(|| {
            DEFAULT_STATUS_WORKFLOW
                .iter()
                .map(|s| s.to_string())
                .collect()
        });

        let now = chrono::Utc::now().naive_utc();
        let project_model = ActiveModel {
            title: Set(data.title),
            code: Set(data.code),
            description: Set(data.description),
            leader_id: Set(data.leader_id),
            next_task_sequence: Set(1),
            status_workflow: Set(json!(workflow)),
            created_by: Set(data.created_by),
            updated_by: Set(data.created_by),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        project_model.insert(&self.db).await
    }

    /// Project codes are immutable after creation; only title, description
    /// and leader can change.
    pub async fn update(&self, id: i32, changes: ProjectChanges) -> Result<Project, DbErr> {
        let project = self.get(id).await?;

        let mut project: ActiveModel = project.into();
        if let Some(title) = changes.title {
            project.title = Set(title);
        }
        if let Some(description) = changes.description {
            project.description = Set(description);
        }
        if let Some(leader_id) = changes.leader_id {
            project.leader_id = Set(leader_id);
        }
        project.updated_at = Set(chrono::Utc::now().naive_utc());

        project.update(&self.db).await
    }

    /// Deletion cascades to the project's tasks, their tag links and images
    /// through the schema's foreign keys.
    pub async fn delete(&self, id: i32) -> Result<Project, DbErr> {
        let project = self.get(id).await?;

        ProjectEntity::delete_by_id(id).exec(&self.db).await?;

        Ok(project)
    }

    pub async fn update_status_workflow(
        &self,
        project_id: i32,
        workflow: &[String],
        updated_by: i32,
    ) -> Result<Project, DbErr> {
        let project = self.get(project_id).await?;

        let mut project: ActiveModel = project.into();
        project.status_workflow = Set(json!(workflow));
        project.updated_by = Set(Some(updated_by));
        project.updated_at = Set(chrono::Utc::now().naive_utc());

        project.update(&self.db).await
    }
}

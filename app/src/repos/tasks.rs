use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue::Set, ColumnTrait, Condition,
    DatabaseConnection, DbErr, EntityTrait, QueryFilter, QueryOrder, TransactionTrait,
};
use serde::Serialize;

use crate::{
    models::{
        project::{self, Entity as ProjectEntity},
        task::{self, ActiveModel, Entity as TaskEntity, Model as Task, TaskPriority},
        user::Entity as UserEntity,
    },
    repos::tags::{TagLabel, TagsRepo},
    services::positions,
};

#[derive(Debug, Default)]
pub struct TaskFilters {
    pub project_id: Option<i32>,
    pub status: Option<String>,
    pub assignee_id: Option<i32>,
    pub search: Option<String>,
}

#[derive(Debug, Default)]
pub struct NewTask {
    pub project_id: i32,
    pub title: String,
    pub status: Option<String>,
    pub priority: Option<TaskPriority>,
    pub story_points: Option<i32>,
    pub assignee_id: Option<i32>,
    pub prompt: Option<String>,
    pub is_blocked: Option<bool>,
    pub blocked_reason: Option<String>,
    pub git_feature_branch: Option<String>,
    pub git_pull_request_url: Option<String>,
}

#[derive(Debug, Default)]
pub struct TaskChanges {
    pub title: Option<String>,
    pub status: Option<String>,
    pub priority: Option<TaskPriority>,
    pub position: Option<i32>,
    pub story_points: Option<Option<i32>>,
    pub assignee_id: Option<Option<i32>>,
    pub prompt: Option<Option<String>>,
    pub is_blocked: Option<bool>,
    pub blocked_reason: Option<Option<String>>,
    pub git_feature_branch: Option<Option<String>>,
    pub git_pull_request_url: Option<Option<String>>,
}

/// Task joined with the display fields the board needs.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskDetails {
    #[serde(flatten)]
    pub task: Task,
    pub project_name: Option<String>,
    pub assignee_name: Option<String>,
    pub assignee_email: Option<String>,
    pub tags: Vec<TagLabel>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ColumnPosition {
    pub id: i32,
    pub position: i32,
}

pub struct TasksRepo {
    pub db: DatabaseConnection,
}

impl TasksRepo {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get(&self, id: i32) -> Result<Task, DbErr> {
        let task = TaskEntity::find_by_id(id).one(&self.db).await?;

        match task {
            Some(t) => Ok(t),
            None => Err(DbErr::RecordNotFound("Task not found".to_string())),
        }
    }

    pub async fn get_by_task_id(&self, task_id: &str) -> Result<Task, DbErr> {
        let task = TaskEntity::find()
            .filter(task::Column::TaskId.eq(task_id))
            .one(&self.db)
            .await?;

        match task {
            Some(t) => Ok(t),
            None => Err(DbErr::RecordNotFound("Task not found".to_string())),
        }
    }

    pub async fn list(&self, filters: &TaskFilters) -> Result<Vec<Task>, DbErr> {
        let mut query = TaskEntity::find();

        if let Some(project_id) = filters.project_id {
            query = query.filter(task::Column::ProjectId.eq(project_id));
        }
        if let Some(status) = &filters.status {
            query = query.filter(task::Column::Status.eq(status));
        }
        if let Some(assignee_id) = filters.assignee_id {
            query = query.filter(task::Column::AssigneeId.eq(assignee_id));
        }
        if let Some(search) = &filters.search {
            query = query.filter(
                Condition::any()
                    .add(task::Column::Title.contains(search))
                    .add(task::Column::Prompt.contains(search)),
            );
        }

        query.order_by_asc(task::Column::Position).all(&self.db).await
    }

    /// Join a task with its project title, assignee and tags for API output.
    pub async fn details(&self, task: Task) -> Result<TaskDetails, DbErr> {
        let project_name = ProjectEntity::find_by_id(task.project_id)
            .one(&self.db)
            .await?
            .map(|p| p.title);

        let assignee = match task.assignee_id {
            Some(assignee_id) => UserEntity::find_by_id(assignee_id).one(&self.db).await?,
            None => None,
        };

        let tags_repo = TagsRepo::new(self.db.clone());
        let tags = tags_repo.tags_for_task(task.id).await?;

        Ok(TaskDetails {
            project_name,
            assignee_name: assignee.as_ref().map(|u| u.full_name.clone()),
            assignee_email: assignee.map(|u| u.email),
            tags,
            task,
        })
    }

    pub async fn list_details(&self, filters: &TaskFilters) -> Result<Vec<TaskDetails>, DbErr> {
        let tasks = self.list(filters).await?;

        let mut detailed = Vec::with_capacity(tasks.len());
        for task in tasks {
            detailed.push(self.details(task).await?);
        }

        Ok(detailed)
    }

    /// Create a task inside a transaction: minting the `<code>-<n>` id and
    /// bumping the project's sequence must not race with other creations.
    pub async fn create(&self, data: NewTask) -> Result<Task, DbErr> {
        let txn = self.db.begin().await?;

        let project = ProjectEntity::find_by_id(data.project_id)
            .one(&txn)
            .await?
            .ok_or_else(|| DbErr::RecordNotFound("Project not found".to_string()))?;

        let task_id = format!("{}-{}", project.code, project.next_task_sequence);
        let status = data.status.unwrap_or_else(|| "TO_DO".to_string());

        let sequence = project.next_task_sequence;
        let mut project: project::ActiveModel = project.into();
        project.next_task_sequence = Set(sequence + 1);
        project.update(&txn).await?;

        let max_position = TaskEntity::find()
            .filter(task::Column::ProjectId.eq(data.project_id))
            .filter(task::Column::Status.eq(&status))
            .order_by_desc(task::Column::Position)
            .one(&txn)
            .await?
            .map(|t| t.position);

        let now = chrono::Utc::now().naive_utc();
        let task_model = ActiveModel {
            project_id: Set(data.project_id),
            task_id: Set(task_id),
            title: Set(data.title),
            status: Set(status),
            position: Set(positions::append_position(max_position)),
            priority: Set(data.priority.unwrap_or(TaskPriority::Medium)),
            story_points: Set(data.story_points),
            assignee_id: Set(data.assignee_id),
            prompt: Set(data.prompt),
            is_blocked: Set(data.is_blocked.unwrap_or(false)),
            blocked_reason: Set(data.blocked_reason),
            git_feature_branch: Set(data.git_feature_branch),
            git_pull_request_url: Set(data.git_pull_request_url),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };
        let task = task_model.insert(&txn).await?;

        txn.commit().await?;

        Ok(task)
    }

    pub async fn update(&self, id: i32, changes: TaskChanges) -> Result<Task, DbErr> {
        let task = self.get(id).await?;

        let mut task: ActiveModel = task.into();
        if let Some(title) = changes.title {
            task.title = Set(title);
        }
        if let Some(status) = changes.status {
            task.status = Set(status);
        }
        if let Some(priority) = changes.priority {
            task.priority = Set(priority);
        }
        if let Some(position) = changes.position {
            task.position = Set(position);
        }
        if let Some(story_points) = changes.story_points {
            task.story_points = Set(story_points);
        }
        if let Some(assignee_id) = changes.assignee_id {
            task.assignee_id = Set(assignee_id);
        }
        if let Some(prompt) = changes.prompt {
            task.prompt = Set(prompt);
        }
        if let Some(is_blocked) = changes.is_blocked {
            task.is_blocked = Set(is_blocked);
        }
        if let Some(blocked_reason) = changes.blocked_reason {
            task.blocked_reason = Set(blocked_reason);
        }
        if let Some(git_feature_branch) = changes.git_feature_branch {
            task.git_feature_branch = Set(git_feature_branch);
        }
        if let Some(git_pull_request_url) = changes.git_pull_request_url {
            task.git_pull_request_url = Set(git_pull_request_url);
        }
        task.updated_at = Set(chrono::Utc::now().naive_utc());

        task.update(&self.db).await
    }

    pub async fn delete(&self, id: i32) -> Result<Task, DbErr> {
        let task = self.get(id).await?;

        TaskEntity::delete_by_id(id).exec(&self.db).await?;

        Ok(task)
    }

    /// Move a task to the bottom of `status`'s column. Used on plain status
    /// changes, where the drag never supplies a target slot.
    pub async fn append_to_column(&self, id: i32, status: &str) -> Result<Task, DbErr> {
        let task = self.get(id).await?;

        let max_position = self.max_position(task.project_id, status).await?;

        let mut task: ActiveModel = task.into();
        task.status = Set(status.to_string());
        task.position = Set(positions::append_position(max_position));
        task.updated_at = Set(chrono::Utc::now().naive_utc());

        task.update(&self.db).await
    }

    /// Move a task to an explicit position, possibly across columns.
    ///
    /// A cross-column move writes both values verbatim; the drag UI computed
    /// them. A same-column move plans the landing slot from the column's
    /// current positions and renumbers the column first when no gap is left.
    pub async fn reposition(
        &self,
        id: i32,
        new_position: i32,
        status: &str,
    ) -> Result<Task, DbErr> {
        let task = self.get(id).await?;

        if status != task.status {
            let mut task: ActiveModel = task.into();
            task.status = Set(status.to_string());
            task.position = Set(new_position);
            task.updated_at = Set(chrono::Utc::now().naive_utc());
            return task.update(&self.db).await;
        }

        if new_position == task.position {
            return Ok(task);
        }

        let column = TaskEntity::find()
            .filter(task::Column::ProjectId.eq(task.project_id))
            .filter(task::Column::Status.eq(status))
            .order_by_asc(task::Column::Position)
            .all(&self.db)
            .await?;
        let column_positions: Vec<i32> = column.iter().map(|t| t.position).collect();

        let plan = positions::plan_reposition(&column_positions, new_position);
        if plan.needs_redistribution() {
            self.redistribute_column(task.project_id, status).await?;
        }

        let mut task: ActiveModel = task.into();
        task.position = Set(plan.position());
        task.updated_at = Set(chrono::Utc::now().naive_utc());
        task.update(&self.db).await
    }

    /// Renumber a column to `10, 20, 30, …` in its current order.
    pub async fn redistribute_column(&self, project_id: i32, status: &str) -> Result<(), DbErr> {
        let column = TaskEntity::find()
            .filter(task::Column::ProjectId.eq(project_id))
            .filter(task::Column::Status.eq(status))
            .order_by_asc(task::Column::Position)
            .all(&self.db)
            .await?;

        let fresh = positions::redistributed_positions(column.len());
        let now = chrono::Utc::now().naive_utc();
        for (task, position) in column.into_iter().zip(fresh) {
            let mut task: ActiveModel = task.into();
            task.position = Set(position);
            task.updated_at = Set(now);
            task.update(&self.db).await?;
        }

        Ok(())
    }

    /// Write caller-supplied positions verbatim; the client already laid the
    /// column out with safe gaps.
    pub async fn set_positions_verbatim(&self, updates: &[(i32, i32)]) -> Result<(), DbErr> {
        let now = chrono::Utc::now().naive_utc();
        for (task_id, new_position) in updates {
            TaskEntity::update_many()
                .col_expr(task::Column::Position, Expr::value(*new_position))
                .col_expr(task::Column::UpdatedAt, Expr::value(now))
                .filter(task::Column::Id.eq(*task_id))
                .exec(&self.db)
                .await?;
        }

        Ok(())
    }

    pub async fn column_positions(
        &self,
        project_id: i32,
        status: &str,
    ) -> Result<Vec<ColumnPosition>, DbErr> {
        let column = TaskEntity::find()
            .filter(task::Column::ProjectId.eq(project_id))
            .filter(task::Column::Status.eq(status))
            .order_by_asc(task::Column::Position)
            .all(&self.db)
            .await?;

        Ok(column
            .into_iter()
            .map(|t| ColumnPosition {
                id: t.id,
                position: t.position,
            })
            .collect())
    }

    async fn max_position(&self, project_id: i32, status: &str) -> Result<Option<i32>, DbErr> {
        let bottom = TaskEntity::find()
            .filter(task::Column::ProjectId.eq(project_id))
            .filter(task::Column::Status.eq(status))
            .order_by_desc(task::Column::Position)
            .one(&self.db)
            .await?;

        Ok(bottom.map(|t| t.position))
    }

    pub async fn has_with_status(&self, project_id: i32, status: &str) -> Result<bool, DbErr> {
        let task = TaskEntity::find()
            .filter(task::Column::ProjectId.eq(project_id))
            .filter(task::Column::Status.eq(status))
            .one(&self.db)
            .await?;

        Ok(task.is_some())
    }
}

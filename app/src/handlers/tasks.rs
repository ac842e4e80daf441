use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use serde_json::{json, Value};
use tracing::info;

use crate::{
    core::state::AppState,
    models::task::{Model as Task, TaskPriority},
    repos::{
        tags::TagsRepo,
        tasks::{NewTask, TaskChanges, TaskDetails, TaskFilters, TasksRepo},
    },
    utils::{response::APIError, validation::is_valid_status_code},
};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskListQuery {
    project_id: Option<i32>,
    status: Option<String>,
    assignee_id: Option<i32>,
    search: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTaskRequest {
    project_id: i32,
    title: String,
    status: Option<String>,
    priority: Option<TaskPriority>,
    story_points: Option<i32>,
    assignee_id: Option<i32>,
    prompt: Option<String>,
    is_blocked: Option<bool>,
    blocked_reason: Option<String>,
    git_feature_branch: Option<String>,
    git_pull_request_url: Option<String>,
    tags: Option<Vec<String>>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTaskRequest {
    pub title: Option<String>,
    pub status: Option<String>,
    pub priority: Option<TaskPriority>,
    pub position: Option<i32>,
    pub story_points: Option<i32>,
    pub assignee_id: Option<i32>,
    pub prompt: Option<String>,
    pub is_blocked: Option<bool>,
    pub blocked_reason: Option<String>,
    pub git_feature_branch: Option<String>,
    pub git_pull_request_url: Option<String>,
    pub tag_names: Option<Vec<String>>,
}

#[derive(Debug, Deserialize)]
pub struct ChangeStatusRequest {
    status: Option<String>,
}

/// Shared by the flat and project-scoped update endpoints.
pub async fn apply_task_update(
    state: &AppState,
    task: &Task,
    payload: UpdateTaskRequest,
) -> Result<TaskDetails, APIError> {
    if let Some(status) = &payload.status {
        if !is_valid_status_code(status) {
            return Err(APIError::BadRequest("Invalid status".to_string()));
        }
    }

    let tasks_repo = TasksRepo::new(state.database.clone());
    let updated = tasks_repo
        .update(
            task.id,
            TaskChanges {
                title: payload.title,
                status: payload.status,
                priority: payload.priority,
                position: payload.position,
                story_points: payload.story_points.map(Some),
                assignee_id: payload.assignee_id.map(Some),
                prompt: payload.prompt.map(Some),
                is_blocked: payload.is_blocked,
                blocked_reason: payload.blocked_reason.map(Some),
                git_feature_branch: payload.git_feature_branch.map(Some),
                git_pull_request_url: payload.git_pull_request_url.map(Some),
            },
        )
        .await?;

    if let Some(tag_names) = payload.tag_names {
        let tags_repo = TagsRepo::new(state.database.clone());
        tags_repo.set_task_tags(updated.id, &tag_names).await?;
    }

    Ok(tasks_repo.details(updated).await?)
}

pub async fn list_tasks(
    State(state): State<Arc<AppState>>,
    Query(query): Query<TaskListQuery>,
) -> Result<Json<Vec<TaskDetails>>, APIError> {
    let tasks_repo = TasksRepo::new(state.database.clone());
    let tasks = tasks_repo
        .list_details(&TaskFilters {
            project_id: query.project_id,
            status: query.status,
            assignee_id: query.assignee_id,
            search: query.search,
        })
        .await?;

    Ok(Json(tasks))
}

pub async fn get_task(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i32>,
) -> Result<Json<TaskDetails>, APIError> {
    let tasks_repo = TasksRepo::new(state.database.clone());
    let task = tasks_repo.get(id).await?;
    let details = tasks_repo.details(task).await?;

    Ok(Json(details))
}

pub async fn create_task(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<CreateTaskRequest>,
) -> Result<(StatusCode, Json<TaskDetails>), APIError> {
    if let Some(status) = &payload.status {
        if !is_valid_status_code(status) {
            return Err(APIError::BadRequest("Invalid status".to_string()));
        }
    }

    let tasks_repo = TasksRepo::new(state.database.clone());
    let task = tasks_repo
        .create(NewTask {
            project_id: payload.project_id,
            title: payload.title,
            status: payload.status,
            priority: payload.priority,
            story_points: payload.story_points,
            assignee_id: payload.assignee_id,
            prompt: payload.prompt,
            is_blocked: payload.is_blocked,
            blocked_reason: payload.blocked_reason,
            git_feature_branch: payload.git_feature_branch,
            git_pull_request_url: payload.git_pull_request_url,
        })
        .await?;

    if let Some(tags) = payload.tags {
        let tags_repo = TagsRepo::new(state.database.clone());
        tags_repo.set_task_tags(task.id, &tags).await?;
    }

    info!("Created task {}", task.task_id);
    let details = tasks_repo.details(task).await?;
    Ok((StatusCode::CREATED, Json(details)))
}

pub async fn update_task(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateTaskRequest>,
) -> Result<Json<TaskDetails>, APIError> {
    let tasks_repo = TasksRepo::new(state.database.clone());
    let task = tasks_repo.get(id).await?;

    let details = apply_task_update(&state, &task, payload).await?;
    Ok(Json(details))
}

// PATCH /tasks/:id/status
//
// The moved card always lands at the bottom of the destination column.
pub async fn change_task_status(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i32>,
    Json(payload): Json<ChangeStatusRequest>,
) -> Result<Json<TaskDetails>, APIError> {
    let status = payload
        .status
        .ok_or_else(|| APIError::BadRequest("Status is required".to_string()))?;
    if !is_valid_status_code(&status) {
        return Err(APIError::BadRequest("Invalid status".to_string()));
    }

    let tasks_repo = TasksRepo::new(state.database.clone());
    let task = tasks_repo.append_to_column(id, &status).await?;
    let details = tasks_repo.details(task).await?;

    Ok(Json(details))
}

pub async fn delete_task(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i32>,
) -> Result<Json<Value>, APIError> {
    let tasks_repo = TasksRepo::new(state.database.clone());
    let task = tasks_repo.delete(id).await?;

    info!("Deleted task {}", task.task_id);
    Ok(Json(json!({ "message": "Task deleted successfully" })))
}

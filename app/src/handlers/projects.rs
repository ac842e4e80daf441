use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Extension, Json,
};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use tracing::info;

use crate::{
    core::{state::AppState, token_cache::AuthUser},
    handlers::tasks::{apply_task_update, UpdateTaskRequest},
    models::project::Model as Project,
    repos::{
        projects::{NewProject, ProjectChanges, ProjectDetails, ProjectsRepo},
        status_definitions::StatusDefinitionsRepo,
        tasks::{ColumnPosition, TaskDetails, TaskFilters, TasksRepo},
    },
    services::workflow::{self, WorkflowError},
    utils::{
        response::APIError,
        validation::{is_valid_project_code, is_valid_status_code},
    },
};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateProjectRequest {
    title: String,
    code: String,
    description: Option<String>,
    leader_id: i32,
    status_workflow: Option<Vec<String>>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProjectRequest {
    title: Option<String>,
    description: Option<String>,
    leader_id: Option<i32>,
}

#[derive(Debug, Deserialize)]
pub struct ProjectTasksQuery {
    status: Option<String>,
    search: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateWorkflowRequest {
    status_workflow: Option<Vec<String>>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkflowResponse {
    status_workflow: Vec<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PositionUpdate {
    task_id: i32,
    new_position: i32,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ColumnPositionsRequest {
    position_updates: Vec<PositionUpdate>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskPositionRequest {
    new_position: i32,
    status: String,
}

#[derive(Debug, Deserialize)]
pub struct TaskStatusRequest {
    status: Option<String>,
}

fn parse_project_id(raw: &str) -> Result<i32, APIError> {
    raw.parse::<i32>()
        .map_err(|_| APIError::BadRequest("Invalid project id".to_string()))
}

pub async fn list_projects(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<ProjectDetails>>, APIError> {
    let projects_repo = ProjectsRepo::new(state.database.clone());
    let projects = projects_repo.list_details().await?;

    Ok(Json(projects))
}

pub async fn get_project(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<ProjectDetails>, APIError> {
    let id = parse_project_id(&id)?;

    let projects_repo = ProjectsRepo::new(state.database.clone());
    let project = projects_repo.get(id).await?;
    let details = projects_repo.details(project).await?;

    Ok(Json(details))
}

pub async fn create_project(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<AuthUser>,
    Json(payload): Json<CreateProjectRequest>,
) -> Result<(StatusCode, Json<Project>), APIError> {
    if !is_valid_project_code(&payload.code) {
        return Err(APIError::BadRequest(
            "Project code must be uppercase letters and digits".to_string(),
        ));
    }

    let projects_repo = ProjectsRepo::new(state.database.clone());
    let project = projects_repo
        .create(NewProject {
            title: payload.title,
            code: payload.code,
            description: payload.description,
            leader_id: payload.leader_id,
            status_workflow: payload.status_workflow,
            created_by: Some(user.id),
        })
        .await?;

    info!("Created project {}", project.code);
    Ok((StatusCode::CREATED, Json(project)))
}

pub async fn update_project(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Json(payload): Json<UpdateProjectRequest>,
) -> Result<Json<Project>, APIError> {
    let id = parse_project_id(&id)?;

    let projects_repo = ProjectsRepo::new(state.database.clone());
    let project = projects_repo
        .update(
            id,
            ProjectChanges {
                title: payload.title,
                description: payload.description.map(Some),
                leader_id: payload.leader_id,
            },
        )
        .await?;

    Ok(Json(project))
}

pub async fn delete_project(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<Value>, APIError> {
    let id = parse_project_id(&id)?;

    let projects_repo = ProjectsRepo::new(state.database.clone());
    let project = projects_repo.delete(id).await?;

    info!("Deleted project {}", project.code);
    Ok(Json(json!({ "message": "Project deleted successfully" })))
}

pub async fn get_project_tasks(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Query(query): Query<ProjectTasksQuery>,
) -> Result<Json<Vec<TaskDetails>>, APIError> {
    let id = parse_project_id(&id)?;

    let tasks_repo = TasksRepo::new(state.database.clone());
    let tasks = tasks_repo
        .list_details(&TaskFilters {
            project_id: Some(id),
            status: query.status,
            search: query.search,
            ..Default::default()
        })
        .await?;

    Ok(Json(tasks))
}

// GET /projects/:code/statuses
pub async fn get_status_workflow(
    State(state): State<Arc<AppState>>,
    Path(code): Path<String>,
) -> Result<Json<WorkflowResponse>, APIError> {
    let projects_repo = ProjectsRepo::new(state.database.clone());
    let project = projects_repo.get_by_code(&code).await?;

    Ok(Json(WorkflowResponse {
        status_workflow: project.get_status_workflow(),
    }))
}

// PUT /projects/:code/statuses
//
// Leaders may add, reorder or drop statuses; dropping is refused while any
// task still holds the status.
pub async fn update_status_workflow(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<AuthUser>,
    Path(code): Path<String>,
    Json(payload): Json<UpdateWorkflowRequest>,
) -> Result<Json<WorkflowResponse>, APIError> {
    let requested = payload
        .status_workflow
        .ok_or_else(|| APIError::BadRequest("statusWorkflow is required".to_string()))?;

    let projects_repo = ProjectsRepo::new(state.database.clone());
    let project = projects_repo.get_by_code(&code).await?;

    let definitions_repo = StatusDefinitionsRepo::new(state.database.clone());
    let catalog = definitions_repo.codes().await?;

    let is_leader = project.leader_id == user.id;
    workflow::validate_workflow_request(&requested, is_leader, &catalog)?;

    let current = project.get_status_workflow();
    let tasks_repo = TasksRepo::new(state.database.clone());
    for status in workflow::removed_statuses(&current, &requested) {
        if tasks_repo.has_with_status(project.id, &status).await? {
            return Err(WorkflowError::StatusInUse(status).into());
        }
    }

    let updated = projects_repo
        .update_status_workflow(project.id, &requested, user.id)
        .await?;

    info!("Project {} status workflow updated by user {}", code, user.id);
    Ok(Json(WorkflowResponse {
        status_workflow: updated.get_status_workflow(),
    }))
}

// GET /projects/:id/kanban/tasks/column/:status
pub async fn get_column_positions(
    State(state): State<Arc<AppState>>,
    Path((id, status)): Path<(String, String)>,
) -> Result<Json<Vec<ColumnPosition>>, APIError> {
    let id = parse_project_id(&id)?;

    if !is_valid_status_code(&status) {
        return Err(APIError::BadRequest("Invalid status".to_string()));
    }

    let tasks_repo = TasksRepo::new(state.database.clone());
    let column = tasks_repo.column_positions(id, &status).await?;

    Ok(Json(column))
}

// PATCH /projects/:code/kanban/tasks/column/:status/positions
//
// Bulk verbatim writes; the client already produced a gap-respecting layout.
pub async fn update_column_positions(
    State(state): State<Arc<AppState>>,
    Path((code, status)): Path<(String, String)>,
    Json(payload): Json<ColumnPositionsRequest>,
) -> Result<Json<Vec<ColumnPosition>>, APIError> {
    if !is_valid_status_code(&status) {
        return Err(APIError::BadRequest("Invalid status".to_string()));
    }

    let projects_repo = ProjectsRepo::new(state.database.clone());
    let project = projects_repo.get_by_code(&code).await?;

    let updates: Vec<(i32, i32)> = payload
        .position_updates
        .iter()
        .map(|u| (u.task_id, u.new_position))
        .collect();

    let tasks_repo = TasksRepo::new(state.database.clone());
    tasks_repo.set_positions_verbatim(&updates).await?;

    let column = tasks_repo.column_positions(project.id, &status).await?;
    Ok(Json(column))
}

// PATCH /projects/:code/kanban/tasks/:taskId/position
pub async fn update_task_position(
    State(state): State<Arc<AppState>>,
    Path((code, task_id)): Path<(String, i32)>,
    Json(payload): Json<TaskPositionRequest>,
) -> Result<Json<TaskDetails>, APIError> {
    if !is_valid_status_code(&payload.status) {
        return Err(APIError::BadRequest("Invalid status".to_string()));
    }

    let projects_repo = ProjectsRepo::new(state.database.clone());
    projects_repo.get_by_code(&code).await?;

    let tasks_repo = TasksRepo::new(state.database.clone());
    let task = tasks_repo
        .reposition(task_id, payload.new_position, &payload.status)
        .await?;
    let details = tasks_repo.details(task).await?;

    Ok(Json(details))
}

// PATCH /projects/:code/tasks/:taskId/status
pub async fn change_project_task_status(
    State(state): State<Arc<AppState>>,
    Path((code, task_id)): Path<(String, String)>,
    Json(payload): Json<TaskStatusRequest>,
) -> Result<Json<TaskDetails>, APIError> {
    let status = payload
        .status
        .ok_or_else(|| APIError::BadRequest("Status is required".to_string()))?;
    if !is_valid_status_code(&status) {
        return Err(APIError::BadRequest("Invalid status".to_string()));
    }

    let task = project_task(&state, &code, &task_id).await?;

    let tasks_repo = TasksRepo::new(state.database.clone());
    let old_status = task.status.clone();
    let updated = tasks_repo.append_to_column(task.id, &status).await?;
    let details = tasks_repo.details(updated).await?;

    info!(
        "Task {} status changed from {} to {}",
        task_id, old_status, status
    );
    Ok(Json(details))
}

/// Look up a task by its human-readable id and check project membership.
async fn project_task(
    state: &AppState,
    code: &str,
    task_id: &str,
) -> Result<crate::models::task::Model, APIError> {
    let projects_repo = ProjectsRepo::new(state.database.clone());
    let project = projects_repo.get_by_code(code).await?;

    let tasks_repo = TasksRepo::new(state.database.clone());
    let task = tasks_repo.get_by_task_id(task_id).await?;

    if task.project_id != project.id {
        return Err(APIError::Forbidden(
            "Task does not belong to this project".to_string(),
        ));
    }

    Ok(task)
}

// PUT /projects/:code/tasks/:taskId
pub async fn update_project_task(
    State(state): State<Arc<AppState>>,
    Path((code, task_id)): Path<(String, String)>,
    Json(payload): Json<UpdateTaskRequest>,
) -> Result<Json<TaskDetails>, APIError> {
    let task = project_task(&state, &code, &task_id).await?;

    let details = apply_task_update(&state, &task, payload).await?;

    info!("Task {} updated", task_id);
    Ok(Json(details))
}

// DELETE /projects/:code/tasks/:taskId
pub async fn delete_project_task(
    State(state): State<Arc<AppState>>,
    Path((code, task_id)): Path<(String, String)>,
) -> Result<Json<Value>, APIError> {
    let task = project_task(&state, &code, &task_id).await?;

    let tasks_repo = TasksRepo::new(state.database.clone());
    tasks_repo.delete(task.id).await?;

    info!("Task {} deleted", task_id);
    Ok(Json(json!({ "message": "Task deleted successfully" })))
}

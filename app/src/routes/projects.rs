use std::sync::Arc;

use axum::{
    routing::{get, patch, put},
    Router,
};

use crate::{
    core::state::AppState,
    handlers::projects::{
        change_project_task_status, create_project, delete_project, delete_project_task,
        get_column_positions, get_project, get_project_tasks, get_status_workflow, list_projects,
        update_column_positions, update_project, update_project_task, update_status_workflow,
        update_task_position,
    },
};

pub fn project_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/", get(list_projects).post(create_project))
        .route(
            "/:code",
            get(get_project).put(update_project).delete(delete_project),
        )
        .route("/:code/tasks", get(get_project_tasks))
        .route(
            "/:code/tasks/:taskId",
            put(update_project_task).delete(delete_project_task),
        )
        .route("/:code/tasks/:taskId/status", patch(change_project_task_status))
        .route(
            "/:code/statuses",
            get(get_status_workflow).put(update_status_workflow),
        )
        .route(
            "/:code/kanban/tasks/column/:status",
            get(get_column_positions),
        )
        .route(
            "/:code/kanban/tasks/column/:status/positions",
            patch(update_column_positions),
        )
        .route(
            "/:code/kanban/tasks/:taskId/position",
            patch(update_task_position),
        )
}

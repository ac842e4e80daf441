use std::sync::Arc;

use axum::{
    routing::{get, patch},
    Router,
};

use crate::{
    core::state::AppState,
    handlers::{
        images::{list_task_images, upload_task_image},
        tasks::{change_task_status, create_task, delete_task, get_task, list_tasks, update_task},
    },
};

pub fn task_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/", get(list_tasks).post(create_task))
        .route("/:id", get(get_task).put(update_task).delete(delete_task))
        .route("/:id/status", patch(change_task_status))
        .route("/:id/images", get(list_task_images).post(upload_task_image))
}

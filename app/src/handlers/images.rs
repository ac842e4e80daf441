use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use base64::{engine::general_purpose::STANDARD as BASE64, Engine};
use serde::Deserialize;
use serde_json::{json, Value};
use tracing::info;

use crate::{
    core::state::AppState,
    models::image_metadata::Model as ImageMetadata,
    repos::{
        images::{ImagesRepo, NewImage},
        tasks::TasksRepo,
    },
    utils::response::APIError,
};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadImageRequest {
    original_name: String,
    content_type: String,
    base64_data: String,
}

// GET /tasks/:id/images
pub async fn list_task_images(
    State(state): State<Arc<AppState>>,
    Path(task_id): Path<i32>,
) -> Result<Json<Vec<ImageMetadata>>, APIError> {
    let tasks_repo = TasksRepo::new(state.database.clone());
    tasks_repo.get(task_id).await?;

    let images_repo = ImagesRepo::new(state.database.clone());
    let images = images_repo.list_for_task(task_id).await?;

    Ok(Json(images))
}

// POST /tasks/:id/images
pub async fn upload_task_image(
    State(state): State<Arc<AppState>>,
    Path(task_id): Path<i32>,
    Json(payload): Json<UploadImageRequest>,
) -> Result<(StatusCode, Json<ImageMetadata>), APIError> {
    let tasks_repo = TasksRepo::new(state.database.clone());
    tasks_repo.get(task_id).await?;

    let bytes = BASE64
        .decode(&payload.base64_data)
        .map_err(|_| APIError::BadRequest("Image data is not valid base64".to_string()))?;

    if !payload.content_type.starts_with("image/") {
        return Err(APIError::BadRequest(
            "Content type must be an image".to_string(),
        ));
    }

    let images_repo = ImagesRepo::new(state.database.clone());
    let metadata = images_repo
        .store(
            task_id,
            NewImage {
                original_name: payload.original_name,
                content_type: payload.content_type,
                file_size: bytes.len() as i32,
                base64_data: payload.base64_data,
            },
        )
        .await?;

    info!("Stored image {} for task {}", metadata.id, task_id);
    Ok((StatusCode::CREATED, Json(metadata)))
}

// GET /images/:id - serve the stored binary with its content type
pub async fn get_image(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i32>,
) -> Result<Response, APIError> {
    let images_repo = ImagesRepo::new(state.database.clone());
    let image = images_repo.get_with_data(id).await?;

    let bytes = BASE64
        .decode(&image.base64_data)
        .map_err(|_| APIError::InternalServerError("Stored image is corrupt".to_string()))?;

    Ok((
        [(header::CONTENT_TYPE, image.metadata.content_type)],
        bytes,
    )
        .into_response())
}

// DELETE /images/:id
pub async fn delete_image(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i32>,
) -> Result<Json<Value>, APIError> {
    let images_repo = ImagesRepo::new(state.database.clone());
    let metadata = images_repo.delete(id).await?;

    info!("Deleted image {}", metadata.id);
    Ok(Json(json!({ "message": "Image deleted successfully" })))
}

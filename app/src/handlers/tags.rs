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
    models::tag::Model as Tag,
    repos::tags::{TagWithUsage, TagsRepo},
    utils::{response::APIError, tag_colors::random_tag_color, validation::validate_tag_name},
};

#[derive(Debug, Deserialize)]
pub struct TagSearchQuery {
    search: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct CreateTagRequest {
    tag: String,
    color: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct UpdateTagRequest {
    color: String,
}

pub async fn list_tags(
    State(state): State<Arc<AppState>>,
    Query(query): Query<TagSearchQuery>,
) -> Result<Json<Vec<TagWithUsage>>, APIError> {
    let tags_repo = TagsRepo::new(state.database.clone());
    let tags = tags_repo.list(query.search.as_deref()).await?;

    Ok(Json(tags))
}

pub async fn create_tag(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<CreateTagRequest>,
) -> Result<(StatusCode, Json<Tag>), APIError> {
    validate_tag_name(&payload.tag).map_err(APIError::BadRequest)?;

    let tags_repo = TagsRepo::new(state.database.clone());
    if tags_repo.get(&payload.tag).await.is_ok() {
        return Err(APIError::Conflict("Tag already exists".to_string()));
    }

    let color = payload.color.unwrap_or_else(random_tag_color);
    let tag = tags_repo.create(payload.tag, color).await?;

    info!("Created tag {}", tag.tag);
    Ok((StatusCode::CREATED, Json(tag)))
}

pub async fn update_tag(
    State(state): State<Arc<AppState>>,
    Path(tag_name): Path<String>,
    Json(payload): Json<UpdateTagRequest>,
) -> Result<Json<Tag>, APIError> {
    let tags_repo = TagsRepo::new(state.database.clone());
    let tag = tags_repo.update_color(&tag_name, payload.color).await?;

    Ok(Json(tag))
}

pub async fn delete_tag(
    State(state): State<Arc<AppState>>,
    Path(tag_name): Path<String>,
) -> Result<Json<Value>, APIError> {
    let tags_repo = TagsRepo::new(state.database.clone());
    let tag = tags_repo.delete(&tag_name).await?;

    info!("Deleted tag {}", tag.tag);
    Ok(Json(json!({ "message": "Tag deleted successfully" })))
}

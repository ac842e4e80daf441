use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Extension, Json,
};
use serde::Deserialize;
use serde_json::{json, Value};
use tracing::{error, info};

use crate::{
    core::{state::AppState, token_cache::AuthUser},
    models::user::Model as User,
    repos::users::{NewUser, UserChanges, UsersRepo},
    utils::response::APIError,
};

#[derive(Debug, Deserialize)]
pub struct UserSearchQuery {
    search: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateUserRequest {
    full_name: String,
    email: String,
    access_token: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateUserRequest {
    full_name: Option<String>,
    email: Option<String>,
}

pub async fn get_me(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<AuthUser>,
) -> Result<Json<User>, APIError> {
    let users_repo = UsersRepo::new(state.database.clone());
    let user = users_repo.get(user.id).await?;

    Ok(Json(user))
}

pub async fn list_users(
    State(state): State<Arc<AppState>>,
    Query(query): Query<UserSearchQuery>,
) -> Result<Json<Vec<User>>, APIError> {
    let users_repo = UsersRepo::new(state.database.clone());
    let users = users_repo.list(query.search.as_deref()).await?;

    Ok(Json(users))
}

pub async fn get_user(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i32>,
) -> Result<Json<User>, APIError> {
    let users_repo = UsersRepo::new(state.database.clone());
    let user = users_repo.get(id).await?;

    Ok(Json(user))
}

pub async fn create_user(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<CreateUserRequest>,
) -> Result<(StatusCode, Json<User>), APIError> {
    let users_repo = UsersRepo::new(state.database.clone());

    if users_repo.get_by_email(&payload.email).await?.is_some() {
        return Err(APIError::Conflict(
            "User with this email already exists".to_string(),
        ));
    }

    let user = users_repo
        .create(NewUser {
            full_name: payload.full_name,
            email: payload.email,
            access_token: payload.access_token,
        })
        .await?;

    if let Err(e) = state.tokens.refresh(&state.database).await {
        error!("Failed to refresh token cache: {}", e);
    }

    info!("Created user {}", user.email);
    Ok((StatusCode::CREATED, Json(user)))
}

pub async fn update_user(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateUserRequest>,
) -> Result<Json<User>, APIError> {
    let users_repo = UsersRepo::new(state.database.clone());

    if let Some(email) = &payload.email {
        if let Some(existing) = users_repo.get_by_email(email).await? {
            if existing.id != id {
                return Err(APIError::Conflict(
                    "User with this email already exists".to_string(),
                ));
            }
        }
    }

    let user = users_repo
        .update(
            id,
            UserChanges {
                full_name: payload.full_name,
                email: payload.email,
            },
        )
        .await?;

    if let Err(e) = state.tokens.refresh(&state.database).await {
        error!("Failed to refresh token cache: {}", e);
    }

    Ok(Json(user))
}

pub async fn delete_user(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i32>,
) -> Result<Json<Value>, APIError> {
    let users_repo = UsersRepo::new(state.database.clone());
    let user = users_repo.delete(id).await?;

    if let Err(e) = state.tokens.refresh(&state.database).await {
        error!("Failed to refresh token cache: {}", e);
    }

    info!("Deleted user {}", user.email);
    Ok(Json(
        json!({ "message": "User deleted successfully", "user": user }),
    ))
}

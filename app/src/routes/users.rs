use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};

use crate::{
    core::state::AppState,
    handlers::users::{create_user, delete_user, get_me, get_user, list_users, update_user},
};

pub fn user_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/", get(list_users))
        .route("/", post(create_user))
        .route("/me", get(get_me))
        .route("/:id", get(get_user).put(update_user).delete(delete_user))
}

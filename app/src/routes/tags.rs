use std::sync::Arc;

use axum::{
    routing::{get, put},
    Router,
};

use crate::{
    core::state::AppState,
    handlers::tags::{create_tag, delete_tag, list_tags, update_tag},
};

pub fn tag_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/", get(list_tags).post(create_tag))
        .route("/:tag", put(update_tag).delete(delete_tag))
}

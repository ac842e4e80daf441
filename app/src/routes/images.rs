use std::sync::Arc;

use axum::{routing::get, Router};

use crate::{
    core::state::AppState,
    handlers::images::{delete_image, get_image},
};

pub fn image_routes() -> Router<Arc<AppState>> {
    Router::new().route("/:id", get(get_image).delete(delete_image))
}

use std::sync::Arc;

use axum::{routing::get, Router};

use crate::{core::state::AppState, handlers::translations::get_translations};

pub fn translation_routes() -> Router<Arc<AppState>> {
    Router::new().route("/:language", get(get_translations))
}

use std::sync::Arc;

use axum::{routing::get, Router};

use crate::{core::state::AppState, handlers::status_definitions::list_status_definitions};

pub fn status_definition_routes() -> Router<Arc<AppState>> {
    Router::new().route("/", get(list_status_definitions))
}

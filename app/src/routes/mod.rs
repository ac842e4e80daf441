pub mod images;
pub mod projects;
pub mod status_definitions;
pub mod tags;
pub mod tasks;
pub mod translations;
pub mod users;

use std::sync::Arc;

use axum::{middleware, routing::get, Router};
use tower_http::cors::CorsLayer;

use crate::{
    core::state::AppState,
    handlers::health::{get_health, get_root},
    middlewares::auth::require_auth,
    routes::{
        images::image_routes, projects::project_routes, status_definitions::status_definition_routes,
        tags::tag_routes, tasks::task_routes, translations::translation_routes, users::user_routes,
    },
    utils::global_error_handler::global_error_handler,
};

pub fn create_routers(state: Arc<AppState>) -> Router<()> {
    let public_routes = Router::new()
        .route("/", get(get_root))
        .route("/health", get(get_health));

    let protected_routes = Router::new()
        .nest("/users", user_routes())
        .nest("/projects", project_routes())
        .nest("/tasks", task_routes())
        .nest("/tags", tag_routes())
        .nest("/images", image_routes())
        .nest("/translations", translation_routes())
        .nest("/status-definitions", status_definition_routes())
        .layer(middleware::from_fn_with_state(state.clone(), require_auth));

    Router::new()
        .merge(public_routes)
        .merge(protected_routes)
        .layer(CorsLayer::permissive())
        .fallback(global_error_handler)
        .with_state(state)
}

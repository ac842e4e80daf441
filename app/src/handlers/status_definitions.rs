use std::sync::Arc;

use axum::{extract::State, Json};

use crate::{
    core::state::AppState, models::status_definition::Model as StatusDefinition,
    repos::status_definitions::StatusDefinitionsRepo, utils::response::APIError,
};

// GET /status-definitions - the global catalog, sorted by code
pub async fn list_status_definitions(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<StatusDefinition>>, APIError> {
    let definitions_repo = StatusDefinitionsRepo::new(state.database.clone());
    let definitions = definitions_repo.list().await?;

    Ok(Json(definitions))
}

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    Json,
};
use serde_json::{json, Value};

use crate::{
    core::state::AppState,
    repos::translations::TranslationsRepo,
    utils::{response::APIError, validation::is_valid_language_code},
};

// GET /translations/:language
pub async fn get_translations(
    State(state): State<Arc<AppState>>,
    Path(language): Path<String>,
) -> Result<Json<Value>, APIError> {
    if !is_valid_language_code(&language) {
        return Err(APIError::BadRequest(
            "Language code must be two lowercase letters".to_string(),
        ));
    }

    let translations_repo = TranslationsRepo::new(state.database.clone());
    let translation = translations_repo
        .get_by_language(&language)
        .await?
        .ok_or_else(|| {
            APIError::NotFound(format!("Translations not found for language: {}", language))
        })?;

    Ok(Json(json!({ "translations": translation.translations })))
}

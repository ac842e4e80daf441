use std::sync::Arc;

use axum::{
    body::Body,
    extract::{Request, State},
    middleware::Next,
    response::{IntoResponse, Response},
};
use tracing::error;

use crate::{core::state::AppState, utils::response::APIError};

/// Header carrying the per-user opaque access token.
pub const TOKEN_HEADER: &str = "TB_TOKEN";

pub async fn require_auth(
    State(state): State<Arc<AppState>>,
    mut request: Request<Body>,
    next: Next,
) -> Response {
    let token = request
        .headers()
        .get(TOKEN_HEADER)
        .and_then(|h| h.to_str().ok());

    let token = match token {
        Some(tok) if !tok.is_empty() => tok,
        _ => {
            error!("Auth failed, missing {} header", TOKEN_HEADER);
            return APIError::UnAuthorized.into_response();
        }
    };

    let user = match state.tokens.lookup(token).await {
        Some(user) => user,
        None => {
            error!("Auth failed, unknown token");
            return APIError::UnAuthorized.into_response();
        }
    };

    request.extensions_mut().insert(user);
    next.run(request).await
}

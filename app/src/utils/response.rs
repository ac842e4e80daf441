use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use sea_orm::DbErr;
use serde_json::json;
use tracing::error;

use crate::services::workflow::WorkflowError;

pub enum APIError {
    BadRequest(String),
    UnAuthorized,
    Forbidden(String),
    NotFound(String),
    Conflict(String),
    /// 400 carrying the full list of offending workflow codes.
    InvalidStatusCodes(Vec<String>),
    InternalServerError(String),
}

impl IntoResponse for APIError {
    fn into_response(self) -> Response {
        match self {
            Self::BadRequest(msg) => {
                (StatusCode::BAD_REQUEST, Json(json!({ "error": msg }))).into_response()
            }
            Self::UnAuthorized => (
                StatusCode::UNAUTHORIZED,
                Json(json!({ "error": "Unauthorized" })),
            )
                .into_response(),
            Self::Forbidden(msg) => {
                (StatusCode::FORBIDDEN, Json(json!({ "error": msg }))).into_response()
            }
            Self::NotFound(msg) => {
                (StatusCode::NOT_FOUND, Json(json!({ "error": msg }))).into_response()
            }
            Self::Conflict(msg) => {
                (StatusCode::CONFLICT, Json(json!({ "error": msg }))).into_response()
            }
            Self::InvalidStatusCodes(codes) => (
                StatusCode::BAD_REQUEST,
                Json(json!({ "error": "Invalid status codes", "invalidStatuses": codes })),
            )
                .into_response(),
            Self::InternalServerError(msg) => {
                (StatusCode::INTERNAL_SERVER_ERROR, Json(json!({ "error": msg }))).into_response()
            }
        }
    }
}

impl From<DbErr> for APIError {
    fn from(err: DbErr) -> Self {
        match err {
            DbErr::RecordNotFound(msg) => Self::NotFound(msg),
            other => {
                // Storage internals stay out of responses.
                error!("Database error: {}", other);
                Self::InternalServerError("Internal server error".to_string())
            }
        }
    }
}

impl From<WorkflowError> for APIError {
    fn from(err: WorkflowError) -> Self {
        match err {
            WorkflowError::EmptyWorkflow => Self::BadRequest(err.to_string()),
            WorkflowError::NotProjectLeader => Self::Forbidden(err.to_string()),
            WorkflowError::UnknownStatusCodes { codes } => Self::InvalidStatusCodes(codes),
            WorkflowError::StatusInUse(_) => Self::BadRequest(err.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_not_found_maps_to_not_found() {
        let err = APIError::from(DbErr::RecordNotFound("Task not found".to_string()));
        assert!(matches!(err, APIError::NotFound(msg) if msg == "Task not found"));
    }

    #[test]
    fn other_db_errors_hide_details() {
        let err = APIError::from(DbErr::Custom("connection reset".to_string()));
        assert!(matches!(
            err,
            APIError::InternalServerError(msg) if msg == "Internal server error"
        ));
    }

    #[test]
    fn status_in_use_becomes_bad_request_with_full_message() {
        let err = APIError::from(WorkflowError::StatusInUse("IN_REVIEW".to_string()));
        assert!(matches!(
            err,
            APIError::BadRequest(msg)
                if msg == "Cannot remove status 'IN_REVIEW' because tasks exist with this status"
        ));
    }

    #[test]
    fn unknown_codes_keep_the_offending_list() {
        let err = APIError::from(WorkflowError::UnknownStatusCodes {
            codes: vec!["FAKE_ONE".to_string(), "FAKE_TWO".to_string()],
        });
        assert!(matches!(
            err,
            APIError::InvalidStatusCodes(codes) if codes == vec!["FAKE_ONE", "FAKE_TWO"]
        ));
    }

    #[test]
    fn non_leader_maps_to_forbidden() {
        let err = APIError::from(WorkflowError::NotProjectLeader);
        assert!(matches!(err, APIError::Forbidden(_)));
    }
}

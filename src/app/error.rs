use axum::{
    extract::rejection::{JsonRejection, PathRejection, QueryRejection, StringRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use crate::app::accounts::AccountError;
use crate::app::hierarchy::{org_settings::PlacementError, HierarchyError};
use crate::app::training::TrainingError;

/// Application error type for unified error handling across the app.
#[derive(Debug)]
pub enum AppError {
    /// Validation errors (400 Bad Request) - invalid input data
    Validation(String),

    /// Missing node, plan, course, question or account (404 Not Found)
    NotFound(String),

    /// Request conflicts with existing state (409 Conflict) - level full, wrong level, taken username
    Conflict(String),

    /// Destructive request sent without confirmation (428 Precondition Required).
    /// Carries the warning the client must show before retrying with `confirm=true`.
    ConfirmationRequired(String),

    /// Generic internal errors (500 Internal Server Error)
    Internal,
}

impl From<HierarchyError> for AppError {
    fn from(err: HierarchyError) -> Self {
        match err {
            HierarchyError::NodeNotFound(_) => AppError::NotFound(err.to_string()),
            HierarchyError::LevelFull { .. } | HierarchyError::WrongLevel(_) => {
                AppError::Conflict(err.to_string())
            }
            HierarchyError::MalformedCode { .. } | HierarchyError::DuplicateCode(_) => {
                tracing::error!(%err, "hierarchy invariant broken");
                AppError::Internal
            }
        }
    }
}

impl From<TrainingError> for AppError {
    fn from(err: TrainingError) -> Self {
        match err {
            TrainingError::PlanNotFound(_) => AppError::NotFound(err.to_string()),
            TrainingError::CourseNotInPlan { .. } => AppError::Validation(err.to_string()),
        }
    }
}

impl From<AccountError> for AppError {
    fn from(err: AccountError) -> Self {
        match err {
            AccountError::UserNotFound(_) => AppError::NotFound(err.to_string()),
            AccountError::UsernameTaken(_) | AccountError::EmployeeIdTaken { .. } => {
                AppError::Conflict(err.to_string())
            }
        }
    }
}

impl From<PlacementError> for AppError {
    fn from(err: PlacementError) -> Self {
        AppError::Validation(err.to_string())
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::Validation(rejection.body_text())
    }
}

impl From<QueryRejection> for AppError {
    fn from(rejection: QueryRejection) -> Self {
        AppError::Validation(rejection.body_text())
    }
}

impl From<StringRejection> for AppError {
    fn from(rejection: StringRejection) -> Self {
        AppError::Validation(rejection.body_text())
    }
}

/// A path segment that does not deserialize (an unknown `:domain`) names nothing that exists.
impl From<PathRejection> for AppError {
    fn from(rejection: PathRejection) -> Self {
        match rejection {
            PathRejection::FailedToDeserializePathParams(err) => AppError::NotFound(err.body_text()),
            other => {
                tracing::error!(error = %other.body_text(), "path parameters missing from route");
                AppError::Internal
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, json!({ "error": msg })),
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, json!({ "error": msg })),
            AppError::Conflict(msg) => (StatusCode::CONFLICT, json!({ "error": msg })),
            AppError::ConfirmationRequired(warning) => (
                StatusCode::PRECONDITION_REQUIRED,
                json!({ "error": "Confirmation required", "warning": warning }),
            ),
            AppError::Internal => (
                StatusCode::INTERNAL_SERVER_ERROR,
                json!({ "error": "Internal server error" }),
            ),
        };

        (status, Json(body)).into_response()
    }
}

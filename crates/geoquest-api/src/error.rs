use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use geoquest_core::QuestError;

/// Unified API error type
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub message: String,
    pub details: Option<String>,
}

impl ApiError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message: message.into(),
            details: None,
        }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::NOT_FOUND,
            message: message.into(),
            details: None,
        }
    }

    pub fn conflict(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::CONFLICT,
            message: message.into(),
            details: None,
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message: message.into(),
            details: None,
        }
    }

    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<String>,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ErrorBody {
            error: self.message,
            details: self.details,
        };
        (self.status, Json(body)).into_response()
    }
}

impl From<QuestError> for ApiError {
    fn from(err: QuestError) -> Self {
        match &err {
            QuestError::UnknownQuest { .. } => {
                Self::not_found("Quest not found").with_details(err.to_string())
            }
            QuestError::InvalidPosition { .. } => {
                Self::bad_request("Invalid position").with_details(err.to_string())
            }
            // Recoverable quiz-flow conditions; the message itself is the
            // user-facing text (TooFar carries the rounded distance)
            QuestError::LocationUnavailable
            | QuestError::TooFar { .. }
            | QuestError::AlreadyCompleted { .. }
            | QuestError::NoActiveQuestion
            | QuestError::NoSelection => Self::conflict(err.to_string()),
            _ => Self::internal("Internal error").with_details(err.to_string()),
        }
    }
}

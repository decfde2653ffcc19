//! Error handling for the Smart Farm Server
//!
//! Two externally visible kinds: a missing plot identifier (not-found) and
//! a precondition violation (client error). Every rejection leaves the
//! farm state unchanged.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use shared::LifecycleError;
use thiserror::Error;

use crate::store::StoreError;

/// Application error types
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Validation error: {message}")]
    Validation { field: String, message: String },

    #[error("Invalid state transition: {0}")]
    InvalidStateTransition(String),

    #[error("Internal server error")]
    InternalError(#[from] anyhow::Error),
}

impl From<LifecycleError> for AppError {
    fn from(err: LifecycleError) -> Self {
        match err {
            LifecycleError::CropTypeRequired => AppError::Validation {
                field: "crop_type".to_string(),
                message: err.to_string(),
            },
            LifecycleError::FertilizeEmptyPlot
            | LifecycleError::PlotNotEmpty
            | LifecycleError::NotReadyToHarvest => AppError::InvalidStateTransition(err.to_string()),
        }
    }
}

impl From<StoreError> for AppError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::PlotNotFound => AppError::NotFound("Plot".to_string()),
            StoreError::MinimumPlots => AppError::Validation {
                field: "farm".to_string(),
                message: err.to_string(),
            },
        }
    }
}

/// Error response structure
#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: ErrorDetail,
}

#[derive(Serialize)]
pub struct ErrorDetail {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_detail) = match &self {
            AppError::NotFound(resource) => (
                StatusCode::NOT_FOUND,
                ErrorDetail {
                    code: "NOT_FOUND".to_string(),
                    message: format!("{} not found", resource),
                    field: None,
                },
            ),
            AppError::Validation { field, message } => (
                StatusCode::BAD_REQUEST,
                ErrorDetail {
                    code: "VALIDATION_ERROR".to_string(),
                    message: message.clone(),
                    field: Some(field.clone()),
                },
            ),
            AppError::InvalidStateTransition(msg) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                ErrorDetail {
                    code: "INVALID_STATE_TRANSITION".to_string(),
                    message: msg.clone(),
                    field: None,
                },
            ),
            AppError::InternalError(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ErrorDetail {
                    code: "INTERNAL_ERROR".to_string(),
                    message: "An internal server error occurred".to_string(),
                    field: None,
                },
            ),
        };

        // Log the error for debugging
        tracing::error!("Error: {:?}", self);

        (status, Json(ErrorResponse { error: error_detail })).into_response()
    }
}

/// Result type alias for handlers
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lifecycle_errors_map_to_state_transition() {
        let err: AppError = LifecycleError::NotReadyToHarvest.into();
        assert!(matches!(err, AppError::InvalidStateTransition(_)));

        let err: AppError = LifecycleError::FertilizeEmptyPlot.into();
        assert!(matches!(err, AppError::InvalidStateTransition(_)));
    }

    #[test]
    fn test_blank_crop_maps_to_validation() {
        let err: AppError = LifecycleError::CropTypeRequired.into();
        match err {
            AppError::Validation { field, message } => {
                assert_eq!(field, "crop_type");
                assert_eq!(message, "Crop type is required");
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_store_errors_split_not_found_from_floor() {
        let err: AppError = StoreError::PlotNotFound.into();
        assert!(matches!(err, AppError::NotFound(_)));

        let err: AppError = StoreError::MinimumPlots.into();
        assert!(matches!(err, AppError::Validation { .. }));
    }
}

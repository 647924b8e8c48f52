use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;
use uuid::Uuid;

/// Errors raised while creating or listing reservations
#[derive(Debug, Error)]
pub enum ReservationError {
    #[error("Validation failed: {0}")]
    ValidationError(String),

    #[error("Item not found: {0}")]
    ItemNotFound(Uuid),

    #[error("Profile not found for user {0}")]
    ProfileNotFound(Uuid),

    #[error("Insufficient balance: {required} required, {available} available")]
    InsufficientBalance {
        required: rust_decimal::Decimal,
        available: rust_decimal::Decimal,
    },

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

impl ReservationError {
    fn status_code(&self) -> StatusCode {
        match self {
            ReservationError::ValidationError(_) => StatusCode::BAD_REQUEST,
            ReservationError::ItemNotFound(_) | ReservationError::ProfileNotFound(_) => {
                StatusCode::NOT_FOUND
            }
            ReservationError::InsufficientBalance { .. } => StatusCode::UNPROCESSABLE_ENTITY,
            ReservationError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ReservationError {
    fn into_response(self) -> Response {
        match &self {
            ReservationError::Database(e) => {
                tracing::error!("Reservation database error: {}", e);
            }
            ReservationError::InsufficientBalance { required, available } => {
                tracing::warn!(
                    "Reservation rejected: balance {} below price {}",
                    available,
                    required
                );
            }
            _ => {
                tracing::debug!("Reservation request rejected: {}", self);
            }
        }

        let status = self.status_code();
        let body = Json(json!({ "error": self.to_string() }));
        (status, body).into_response()
    }
}

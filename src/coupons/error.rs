use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;
use uuid::Uuid;

/// Errors raised by coupon claim operations
#[derive(Debug, Error)]
pub enum CouponError {
    #[error("Coupon not found: {0}")]
    NotFound(Uuid),

    #[error("Coupon has already been claimed")]
    AlreadyClaimed,

    #[error("Coupon belongs to another user")]
    NotOwner,

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

impl CouponError {
    fn status_code(&self) -> StatusCode {
        match self {
            CouponError::NotFound(_) => StatusCode::NOT_FOUND,
            CouponError::AlreadyClaimed => StatusCode::CONFLICT,
            CouponError::NotOwner => StatusCode::FORBIDDEN,
            CouponError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for CouponError {
    fn into_response(self) -> Response {
        match &self {
            CouponError::Database(e) => {
                tracing::error!("Coupon database error: {}", e);
            }
            CouponError::AlreadyClaimed | CouponError::NotOwner => {
                tracing::warn!("Coupon claim rejected: {}", self);
            }
            CouponError::NotFound(_) => {
                tracing::debug!("Coupon lookup failed: {}", self);
            }
        }

        let status = self.status_code();
        let body = Json(json!({ "error": self.to_string() }));
        (status, body).into_response()
    }
}

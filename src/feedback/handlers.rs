// HTTP handlers for visitor feedback

use axum::{extract::State, http::StatusCode, Json};
use validator::Validate;

use crate::error::ApiError;
use crate::feedback::models::{CreateFeedbackRequest, Feedback};
use crate::AppState;

/// Handler for POST /api/feedback (public)
pub async fn create_feedback_handler(
    State(state): State<AppState>,
    Json(request): Json<CreateFeedbackRequest>,
) -> Result<(StatusCode, Json<Feedback>), ApiError> {
    request.validate()?;

    let feedback = state.feedback_repo.create(&request).await?;
    Ok((StatusCode::CREATED, Json(feedback)))
}

/// Handler for GET /api/feedback (admin)
pub async fn list_feedback_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<Feedback>>, ApiError> {
    let feedback = state.feedback_repo.list_all().await?;
    Ok(Json(feedback))
}

// HTTP handlers for the authenticated user's own profile

use axum::{extract::State, Json};
use validator::Validate;

use crate::auth::middleware::AuthenticatedUser;
use crate::error::ApiError;
use crate::profiles::models::{UpdateProfileRequest, UserProfile};
use crate::AppState;

/// Handler for GET /api/profile
pub async fn get_profile_handler(
    State(state): State<AppState>,
    user: AuthenticatedUser,
) -> Result<Json<UserProfile>, ApiError> {
    let profile = state
        .profile_repo
        .find_by_user_id(user.user_id)
        .await?
        .ok_or_else(|| ApiError::NotFound {
            resource: "Profile".to_string(),
            id: user.user_id.to_string(),
        })?;

    Ok(Json(profile))
}

/// Handler for PATCH /api/profile
/// Updates demographic fields only; balance and tours_attended are
/// off limits here
pub async fn update_profile_handler(
    State(state): State<AppState>,
    user: AuthenticatedUser,
    Json(request): Json<UpdateProfileRequest>,
) -> Result<Json<UserProfile>, ApiError> {
    request.validate()?;

    let profile = state
        .profile_repo
        .update_demographics(user.user_id, &request)
        .await?
        .ok_or_else(|| ApiError::NotFound {
            resource: "Profile".to_string(),
            id: user.user_id.to_string(),
        })?;

    Ok(Json(profile))
}

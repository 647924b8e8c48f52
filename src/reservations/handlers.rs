// HTTP handlers for reservations

use axum::{extract::State, http::StatusCode, Json};

use crate::auth::middleware::AuthenticatedUser;
use crate::reservations::error::ReservationError;
use crate::reservations::models::{CreateReservationRequest, Reservation, ReservationResponse};
use crate::AppState;

/// Handler for POST /api/reservations
/// Books an item for the authenticated user, applying coupon pricing
/// and cashback rewards for tours
pub async fn create_reservation_handler(
    State(state): State<AppState>,
    user: AuthenticatedUser,
    Json(request): Json<CreateReservationRequest>,
) -> Result<(StatusCode, Json<ReservationResponse>), ReservationError> {
    let response = state
        .reservation_service
        .create_reservation(user.user_id, request)
        .await?;

    Ok((StatusCode::CREATED, Json(response)))
}

/// Handler for GET /api/reservations (admin)
pub async fn list_reservations_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<Reservation>>, ReservationError> {
    let reservations = state.reservation_service.list_reservations().await?;
    Ok(Json(reservations))
}

// HTTP handlers for agent tours: agent CRUD plus admin moderation

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use uuid::Uuid;
use validator::Validate;

use crate::auth::middleware::AuthenticatedUser;
use crate::error::ApiError;
use crate::tours::models::{Tour, TourStatus, UpsertTourRequest};
use crate::validation::validate_positive_price;
use crate::AppState;

fn not_found(id: Uuid) -> ApiError {
    ApiError::NotFound {
        resource: "Tour".to_string(),
        id: id.to_string(),
    }
}

fn check_price(request: &UpsertTourRequest) -> Result<(), ApiError> {
    validate_positive_price(&request.price).map_err(|error| {
        let mut errors = validator::ValidationErrors::new();
        errors.add("price", error);
        ApiError::ValidationError(errors)
    })
}

/// Handler for POST /api/tours (agent)
/// New tours always enter moderation as pending
pub async fn create_tour_handler(
    State(state): State<AppState>,
    agent: AuthenticatedUser,
    Json(request): Json<UpsertTourRequest>,
) -> Result<(StatusCode, Json<Tour>), ApiError> {
    request.validate()?;
    check_price(&request)?;

    let agent_name = match state.company_repo.find_by_user_id(agent.user_id).await? {
        Some(company) => company.company_name,
        None => agent.email.clone(),
    };

    let tour = state
        .tour_repo
        .create(agent.user_id, &agent_name, &request)
        .await?;

    tracing::info!("Tour {} submitted by agent {}", tour.id, agent.user_id);
    Ok((StatusCode::CREATED, Json(tour)))
}

/// Handler for PUT /api/tours/:id (agent)
/// Agents can only touch their own tours, and never the status
pub async fn update_tour_handler(
    State(state): State<AppState>,
    agent: AuthenticatedUser,
    Path(id): Path<Uuid>,
    Json(request): Json<UpsertTourRequest>,
) -> Result<Json<Tour>, ApiError> {
    request.validate()?;
    check_price(&request)?;

    let tour = state
        .tour_repo
        .update_own(id, agent.user_id, &request)
        .await?
        .ok_or_else(|| not_found(id))?;

    Ok(Json(tour))
}

/// Handler for GET /api/tours/mine (agent)
pub async fn list_own_tours_handler(
    State(state): State<AppState>,
    agent: AuthenticatedUser,
) -> Result<Json<Vec<Tour>>, ApiError> {
    let tours = state.tour_repo.list_by_agent(agent.user_id).await?;
    Ok(Json(tours))
}

/// Handler for GET /api/tours
/// Public listing, approved tours only
pub async fn list_approved_tours_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<Tour>>, ApiError> {
    let tours = state.tour_repo.list_approved().await?;
    Ok(Json(tours))
}

/// Handler for GET /api/tours/all (admin)
pub async fn list_all_tours_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<Tour>>, ApiError> {
    let tours = state.tour_repo.list_all().await?;
    Ok(Json(tours))
}

/// Handler for POST /api/tours/:id/approve (admin)
pub async fn approve_tour_handler(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Tour>, ApiError> {
    let tour = state
        .tour_repo
        .update_status(id, TourStatus::Approved)
        .await?
        .ok_or_else(|| not_found(id))?;

    tracing::info!("Tour {} approved", id);
    Ok(Json(tour))
}

/// Handler for POST /api/tours/:id/reject (admin)
pub async fn reject_tour_handler(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Tour>, ApiError> {
    let tour = state
        .tour_repo
        .update_status(id, TourStatus::Rejected)
        .await?
        .ok_or_else(|| not_found(id))?;

    tracing::info!("Tour {} rejected", id);
    Ok(Json(tour))
}

/// Handler for DELETE /api/tours/:id (admin)
pub async fn delete_tour_handler(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    let deleted = state.tour_repo.delete(id).await?;
    if !deleted {
        return Err(not_found(id));
    }
    Ok(StatusCode::NO_CONTENT)
}

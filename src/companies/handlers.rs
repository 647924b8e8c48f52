// HTTP handlers for company moderation (admin only)

use axum::{
    extract::{Path, State},
    Json,
};
use uuid::Uuid;

use crate::companies::models::{Company, CompanyStatus};
use crate::error::ApiError;
use crate::AppState;

/// Handler for GET /api/companies
/// Lists all company applications for the admin dashboard
pub async fn list_companies_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<Company>>, ApiError> {
    let companies = state.company_repo.list_all().await?;
    Ok(Json(companies))
}

/// Handler for POST /api/companies/:id/approve
/// Activates a company, admitting its agent into the agent area
pub async fn approve_company_handler(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Company>, ApiError> {
    let company = state
        .company_repo
        .update_status(id, CompanyStatus::Active)
        .await?
        .ok_or_else(|| ApiError::NotFound {
            resource: "Company".to_string(),
            id: id.to_string(),
        })?;

    tracing::info!("Company {} approved", id);
    Ok(Json(company))
}

/// Handler for POST /api/companies/:id/reject
pub async fn reject_company_handler(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Company>, ApiError> {
    let company = state
        .company_repo
        .update_status(id, CompanyStatus::Rejected)
        .await?
        .ok_or_else(|| ApiError::NotFound {
            resource: "Company".to_string(),
            id: id.to_string(),
        })?;

    tracing::info!("Company {} rejected", id);
    Ok(Json(company))
}

// HTTP handlers for the coupon ledger

use axum::{
    extract::{Path, State},
    Json,
};
use uuid::Uuid;

use crate::auth::middleware::AuthenticatedUser;
use crate::coupons::error::CouponError;
use crate::coupons::models::Coupon;
use crate::AppState;

/// Handler for GET /api/coupons
/// Returns the authenticated user's ledger, claimed coupons included
pub async fn list_coupons_handler(
    State(state): State<AppState>,
    user: AuthenticatedUser,
) -> Result<Json<Vec<Coupon>>, CouponError> {
    let coupons = state.coupon_service.list_coupons(user.user_id).await?;
    Ok(Json(coupons))
}

/// Handler for POST /api/coupons/:id/claim
pub async fn claim_coupon_handler(
    State(state): State<AppState>,
    user: AuthenticatedUser,
    Path(id): Path<Uuid>,
) -> Result<Json<Coupon>, CouponError> {
    let coupon = state.coupon_service.claim_coupon(id, user.user_id).await?;
    Ok(Json(coupon))
}

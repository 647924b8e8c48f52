use uuid::Uuid;

use crate::coupons::error::CouponError;
use crate::coupons::models::Coupon;
use crate::coupons::repository::CouponRepository;

/// Service for coupon ledger operations
#[derive(Clone)]
pub struct CouponService {
    repository: CouponRepository,
}

impl CouponService {
    pub fn new(repository: CouponRepository) -> Self {
        Self { repository }
    }

    /// Full ledger for a user, newest first
    pub async fn list_coupons(&self, user_id: Uuid) -> Result<Vec<Coupon>, CouponError> {
        Ok(self.repository.list_for_user(user_id).await?)
    }

    /// Claim a coupon for its owner, crediting the points
    pub async fn claim_coupon(
        &self,
        coupon_id: Uuid,
        user_id: Uuid,
    ) -> Result<Coupon, CouponError> {
        let coupon = self.repository.claim(coupon_id, user_id).await?;
        tracing::info!(
            "Coupon {} claimed by user {} for {} points",
            coupon.code,
            user_id,
            coupon.points
        );
        Ok(coupon)
    }
}

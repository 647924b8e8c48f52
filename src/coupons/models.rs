use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A coupon in a user's ledger
///
/// `points` is the balance credit the coupon is worth when claimed.
/// Claimed coupons stay in the ledger with `is_used` set so the
/// history remains visible.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Coupon {
    pub id: Uuid,
    pub user_id: Uuid,
    pub code: String,
    pub description: String,
    pub points: Decimal,
    pub is_used: bool,
    pub created_at: DateTime<Utc>,
}

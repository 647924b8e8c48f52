use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;
use validator::Validate;

/// A traveller's profile
///
/// `balance` and `tours_attended` are never written directly by the
/// profile endpoints; they only move through the coupon ledger and
/// the reservation flow.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct UserProfile {
    pub user_id: Uuid,
    pub name: Option<String>,
    pub balance: Decimal,
    pub tours_attended: i32,
    pub referred_by: Option<String>,
    pub referral_bonus_claimed: bool,
    pub emergency_contact_name: Option<String>,
    pub emergency_contact_phone: Option<String>,
    pub gender: Option<String>,
    pub age: Option<i32>,
    pub family_size: Option<i32>,
}

/// Demographic fields a user may update on their own profile
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateProfileRequest {
    #[validate(length(min = 1, message = "Name cannot be empty"))]
    pub name: Option<String>,
    pub emergency_contact_name: Option<String>,
    pub emergency_contact_phone: Option<String>,
    pub gender: Option<String>,
    #[validate(range(min = 1, max = 120, message = "Age must be between 1 and 120"))]
    pub age: Option<i32>,
    #[validate(range(min = 1, message = "Family size must be at least 1"))]
    pub family_size: Option<i32>,
}

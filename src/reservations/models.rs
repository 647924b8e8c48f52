use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;
use validator::Validate;

/// What a reservation points at: a catalog info item (hotel,
/// restaurant, attraction) or an agent-published tour
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "text", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum ItemType {
    InfoItem,
    Tour,
}

impl ItemType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ItemType::InfoItem => "info_item",
            ItemType::Tour => "tour",
        }
    }
}

impl std::fmt::Display for ItemType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A stored reservation
///
/// The pricing columns are a snapshot taken at booking time so later
/// catalog price changes never rewrite history. They are null for
/// items without a price.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Reservation {
    pub id: Uuid,
    pub user_id: Uuid,
    pub item_id: Uuid,
    pub item_name: String,
    pub item_type: ItemType,
    pub mountain_slug: Option<String>,
    pub user_name: String,
    pub email: String,
    pub date: NaiveDate,
    pub time: String,
    pub guests: i32,
    pub special_requests: Option<String>,
    pub original_price: Option<Decimal>,
    pub final_price: Option<Decimal>,
    pub discount_amount: Option<Decimal>,
    pub coupon_code: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Request payload for creating a reservation
#[derive(Debug, Deserialize, Validate)]
pub struct CreateReservationRequest {
    pub item_id: Uuid,
    pub item_type: ItemType,
    pub mountain_slug: Option<String>,

    #[validate(length(min = 1, message = "Name is required"))]
    pub user_name: String,

    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    /// Checked against today in the service, not here
    pub date: NaiveDate,

    /// 24-hour HH:MM, checked in the service
    pub time: String,

    #[validate(range(min = 1, message = "At least one guest is required"))]
    pub guests: i32,

    pub special_requests: Option<String>,

    /// Coupon code to try; an unrecognized code is ignored, not an error
    pub coupon_code: Option<String>,
}

/// Response for a created reservation
///
/// `coupon_applied` tells the client whether the supplied coupon code
/// actually produced a discount.
#[derive(Debug, Serialize)]
pub struct ReservationResponse {
    #[serde(flatten)]
    pub reservation: Reservation,
    pub coupon_applied: bool,
}

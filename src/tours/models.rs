use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;
use validator::Validate;

/// Moderation status of an agent tour
///
/// Only approved tours are bookable or visible to travellers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "text", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum TourStatus {
    Pending,
    Approved,
    Rejected,
}

impl TourStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            TourStatus::Pending => "pending",
            TourStatus::Approved => "approved",
            TourStatus::Rejected => "rejected",
        }
    }
}

impl std::fmt::Display for TourStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A tour offered by an agent
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Tour {
    pub id: Uuid,
    pub agent_id: Uuid,
    pub agent_name: String,
    pub name: String,
    pub country: String,
    pub description: String,
    pub image_url: String,
    pub duration_hours: i32,
    pub price: Decimal,
    pub has_coupon: bool,
    pub status: TourStatus,
    pub created_at: DateTime<Utc>,
}

/// Payload for creating or updating a tour (agent)
///
/// Status is never part of the payload. New tours always start
/// pending and updates leave the moderation state untouched.
#[derive(Debug, Deserialize, Validate)]
pub struct UpsertTourRequest {
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,
    #[validate(length(min = 1, message = "Country is required"))]
    pub country: String,
    #[validate(length(min = 1, message = "Description is required"))]
    pub description: String,
    #[validate(url(message = "Image URL must be a valid URL"))]
    pub image_url: String,
    #[validate(range(min = 1, message = "Duration must be at least one hour"))]
    pub duration_hours: i32,
    /// Must be positive, checked in the handler
    pub price: Decimal,
    #[serde(default)]
    pub has_coupon: bool,
}

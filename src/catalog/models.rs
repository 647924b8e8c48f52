use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

/// A mountain destination in the catalog
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Mountain {
    pub id: Uuid,
    #[schema(example = "Şahdağ")]
    pub name: String,
    #[schema(example = "Shahdag")]
    pub name_en: Option<String>,
    #[schema(example = "sahdag")]
    pub slug: String,
    #[schema(example = "https://cdn.example.com/sahdag.jpg")]
    pub image_url: String,
    pub description: String,
    pub description_en: Option<String>,
    /// Trip price in points
    #[schema(value_type = f64, example = 120.0)]
    pub price: Decimal,
    #[schema(example = 8)]
    pub duration_hours: i32,
    #[schema(example = true)]
    pub has_coupon: bool,
    #[schema(example = 4243)]
    pub height: Option<i32>,
    #[schema(example = "summer")]
    pub best_season: Option<String>,
    #[schema(example = "moderate")]
    pub difficulty: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub temperature: Option<String>,
}

/// Payload for creating or replacing a mountain (admin)
///
/// The slug is derived from the name on the server, never supplied.
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateMountainRequest {
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,
    pub name_en: Option<String>,
    #[validate(url(message = "Image URL must be a valid URL"))]
    pub image_url: String,
    #[validate(length(min = 1, message = "Description is required"))]
    pub description: String,
    pub description_en: Option<String>,
    /// Must be positive, checked in the handler
    #[schema(value_type = f64, example = 120.0)]
    pub price: Decimal,
    #[validate(range(min = 1, message = "Duration must be at least one hour"))]
    pub duration_hours: i32,
    #[serde(default)]
    pub has_coupon: bool,
    pub height: Option<i32>,
    pub best_season: Option<String>,
    pub difficulty: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub temperature: Option<String>,
}

/// Category an info item belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, ToSchema)]
#[sqlx(type_name = "text", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum InfoCategory {
    Hotels,
    Restaurants,
    Attractions,
    Cuisine,
}

impl InfoCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            InfoCategory::Hotels => "hotels",
            InfoCategory::Restaurants => "restaurants",
            InfoCategory::Attractions => "attractions",
            InfoCategory::Cuisine => "cuisine",
        }
    }
}

impl std::fmt::Display for InfoCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A bookable or browsable entry attached to a mountain: hotel,
/// restaurant, attraction, or cuisine item
///
/// Most fields only make sense for some categories (a cuisine entry
/// has ingredients, a hotel has an address), so they are all optional
/// except the shared core.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct InfoItem {
    pub id: Uuid,
    pub mountain_id: Uuid,
    #[schema(example = "sahdag")]
    pub mountain_slug: String,
    pub category: InfoCategory,
    #[schema(example = "Shahdag Hotel & Spa")]
    pub name: String,
    pub name_en: Option<String>,
    pub description: String,
    pub description_en: Option<String>,
    pub image_url: Option<String>,
    #[schema(example = 4.7)]
    pub rating: Option<f64>,
    /// Display price, free-form (for example "from 150 AZN")
    pub price: Option<String>,
    pub google_maps_url: Option<String>,
    pub ingredients: Option<String>,
    pub ingredients_en: Option<String>,
    pub menu: Option<String>,
    pub address: Option<String>,
    pub phone: Option<String>,
    pub entrance_fee: Option<String>,
    pub nearby_restaurants: Option<String>,
    pub nearby_restaurant_image_url: Option<String>,
}

/// Payload for creating or replacing an info item (admin)
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateInfoItemRequest {
    pub mountain_id: Uuid,
    pub category: InfoCategory,
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,
    pub name_en: Option<String>,
    #[validate(length(min = 1, message = "Description is required"))]
    pub description: String,
    pub description_en: Option<String>,
    pub image_url: Option<String>,
    /// 0.0 to 5.0, checked in the handler
    pub rating: Option<f64>,
    pub price: Option<String>,
    pub google_maps_url: Option<String>,
    pub ingredients: Option<String>,
    pub ingredients_en: Option<String>,
    pub menu: Option<String>,
    pub address: Option<String>,
    pub phone: Option<String>,
    pub entrance_fee: Option<String>,
    pub nearby_restaurants: Option<String>,
    pub nearby_restaurant_image_url: Option<String>,
}

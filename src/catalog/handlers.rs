// HTTP handlers for the destination catalog
// Public reads, admin writes

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use serde_json::json;
use uuid::Uuid;
use validator::Validate;

use crate::catalog::models::{
    CreateInfoItemRequest, CreateMountainRequest, InfoCategory, InfoItem, Mountain,
};
use crate::error::ApiError;
use crate::validation::{validate_positive_price, validate_rating_range};
use crate::AppState;

#[utoipa::path(
    get,
    path = "/api/mountains",
    responses(
        (status = 200, description = "List of all mountains", body = Vec<Mountain>),
        (status = 500, description = "Internal server error", body = String, example = json!({"error": "Database error"}))
    ),
    tag = "catalog"
)]
pub async fn list_mountains_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<Mountain>>, ApiError> {
    tracing::debug!("Fetching all mountains");
    let mountains = state.mountain_repo.list_all().await?;
    Ok(Json(mountains))
}

#[utoipa::path(
    get,
    path = "/api/mountains/{slug}",
    params(
        ("slug" = String, Path, description = "Mountain slug")
    ),
    responses(
        (status = 200, description = "Mountain found", body = Mountain),
        (status = 404, description = "Mountain not found", body = String, example = json!({"error": "Mountain with id sahdag not found"})),
        (status = 500, description = "Internal server error", body = String, example = json!({"error": "Database error"}))
    ),
    tag = "catalog"
)]
pub async fn get_mountain_handler(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<Json<Mountain>, ApiError> {
    tracing::debug!("Fetching mountain: {}", slug);
    let mountain = state
        .mountain_repo
        .find_by_slug(&slug)
        .await?
        .ok_or_else(|| ApiError::NotFound {
            resource: "Mountain".to_string(),
            id: slug,
        })?;
    Ok(Json(mountain))
}

#[utoipa::path(
    post,
    path = "/api/mountains",
    request_body = CreateMountainRequest,
    responses(
        (status = 201, description = "Mountain created successfully", body = Mountain),
        (status = 400, description = "Invalid input data", body = String, example = json!({"error": "Price must be a positive number"})),
        (status = 500, description = "Internal server error", body = String, example = json!({"error": "Database error"}))
    ),
    tag = "catalog"
)]
pub async fn create_mountain_handler(
    State(state): State<AppState>,
    Json(payload): Json<CreateMountainRequest>,
) -> Result<(StatusCode, Json<Mountain>), ApiError> {
    tracing::debug!("Creating mountain: {}", payload.name);

    payload.validate()?;
    validate_positive_price(&payload.price).map_err(price_validation_error)?;

    let mountain = state.mountain_repo.create(&payload).await?;
    Ok((StatusCode::CREATED, Json(mountain)))
}

#[utoipa::path(
    put,
    path = "/api/mountains/{id}",
    params(
        ("id" = Uuid, Path, description = "Mountain ID")
    ),
    request_body = CreateMountainRequest,
    responses(
        (status = 200, description = "Mountain updated successfully", body = Mountain),
        (status = 400, description = "Invalid input data", body = String, example = json!({"error": "Price must be a positive number"})),
        (status = 404, description = "Mountain not found", body = String, example = json!({"error": "Mountain not found"})),
        (status = 500, description = "Internal server error", body = String, example = json!({"error": "Database error"}))
    ),
    tag = "catalog"
)]
pub async fn update_mountain_handler(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<CreateMountainRequest>,
) -> Result<Json<Mountain>, ApiError> {
    tracing::debug!("Updating mountain: {}", id);

    payload.validate()?;
    validate_positive_price(&payload.price).map_err(price_validation_error)?;

    let mountain = state
        .mountain_repo
        .update(id, &payload)
        .await?
        .ok_or_else(|| ApiError::NotFound {
            resource: "Mountain".to_string(),
            id: id.to_string(),
        })?;
    Ok(Json(mountain))
}

#[utoipa::path(
    delete,
    path = "/api/mountains/{id}",
    params(
        ("id" = Uuid, Path, description = "Mountain ID")
    ),
    responses(
        (status = 204, description = "Mountain and its info items deleted"),
        (status = 404, description = "Mountain not found", body = String, example = json!({"error": "Mountain not found"})),
        (status = 500, description = "Internal server error", body = String, example = json!({"error": "Database error"}))
    ),
    tag = "catalog"
)]
pub async fn delete_mountain_handler(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    tracing::debug!("Deleting mountain: {}", id);

    let deleted = state.mountain_repo.delete(id).await?;
    if !deleted {
        return Err(ApiError::NotFound {
            resource: "Mountain".to_string(),
            id: id.to_string(),
        });
    }
    Ok(StatusCode::NO_CONTENT)
}

/// Query filters for info item listing
#[derive(Debug, Deserialize)]
pub struct InfoItemQuery {
    pub mountain: Option<String>,
    pub category: Option<InfoCategory>,
    pub name: Option<String>,
}

#[utoipa::path(
    get,
    path = "/api/info-items",
    params(
        ("mountain" = Option<String>, Query, description = "Filter by mountain slug"),
        ("category" = Option<String>, Query, description = "Filter by category (requires mountain)"),
        ("name" = Option<String>, Query, description = "Look up a single item by exact name")
    ),
    responses(
        (status = 200, description = "Matching info items", body = Vec<InfoItem>),
        (status = 500, description = "Internal server error", body = String, example = json!({"error": "Database error"}))
    ),
    tag = "catalog"
)]
pub async fn list_info_items_handler(
    State(state): State<AppState>,
    Query(query): Query<InfoItemQuery>,
) -> Result<Json<Vec<InfoItem>>, ApiError> {
    tracing::debug!("Fetching info items: {:?}", query);

    if let Some(name) = &query.name {
        let item = state.info_item_repo.find_by_name(name).await?;
        return Ok(Json(item.into_iter().collect()));
    }

    let items = match (&query.mountain, query.category) {
        (Some(slug), Some(category)) => {
            state.info_item_repo.list_by_category(slug, category).await?
        }
        (Some(slug), None) => state.info_item_repo.list_by_mountain(slug).await?,
        (None, _) => state.info_item_repo.list_all().await?,
    };
    Ok(Json(items))
}

#[utoipa::path(
    get,
    path = "/api/info-items/{id}",
    params(
        ("id" = Uuid, Path, description = "Info item ID")
    ),
    responses(
        (status = 200, description = "Info item found", body = InfoItem),
        (status = 404, description = "Info item not found", body = String, example = json!({"error": "Info item not found"})),
        (status = 500, description = "Internal server error", body = String, example = json!({"error": "Database error"}))
    ),
    tag = "catalog"
)]
pub async fn get_info_item_handler(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<InfoItem>, ApiError> {
    tracing::debug!("Fetching info item: {}", id);
    let item = state
        .info_item_repo
        .find_by_id(id)
        .await?
        .ok_or_else(|| ApiError::NotFound {
            resource: "Info item".to_string(),
            id: id.to_string(),
        })?;
    Ok(Json(item))
}

#[utoipa::path(
    post,
    path = "/api/info-items",
    request_body = CreateInfoItemRequest,
    responses(
        (status = 201, description = "Info item created successfully", body = InfoItem),
        (status = 400, description = "Invalid input data", body = String, example = json!({"error": "Rating must be between 0 and 5"})),
        (status = 404, description = "Parent mountain not found", body = String, example = json!({"error": "Mountain not found"})),
        (status = 500, description = "Internal server error", body = String, example = json!({"error": "Database error"}))
    ),
    tag = "catalog"
)]
pub async fn create_info_item_handler(
    State(state): State<AppState>,
    Json(payload): Json<CreateInfoItemRequest>,
) -> Result<(StatusCode, Json<InfoItem>), ApiError> {
    tracing::debug!("Creating info item: {}", payload.name);

    payload.validate()?;
    validate_optional_rating(payload.rating)?;

    let slug = state
        .info_item_repo
        .mountain_slug(payload.mountain_id)
        .await?
        .ok_or_else(|| ApiError::NotFound {
            resource: "Mountain".to_string(),
            id: payload.mountain_id.to_string(),
        })?;

    let item = state.info_item_repo.create(&payload, &slug).await?;
    Ok((StatusCode::CREATED, Json(item)))
}

#[utoipa::path(
    put,
    path = "/api/info-items/{id}",
    params(
        ("id" = Uuid, Path, description = "Info item ID")
    ),
    request_body = CreateInfoItemRequest,
    responses(
        (status = 200, description = "Info item updated successfully", body = InfoItem),
        (status = 400, description = "Invalid input data", body = String, example = json!({"error": "Rating must be between 0 and 5"})),
        (status = 404, description = "Info item not found", body = String, example = json!({"error": "Info item not found"})),
        (status = 500, description = "Internal server error", body = String, example = json!({"error": "Database error"}))
    ),
    tag = "catalog"
)]
pub async fn update_info_item_handler(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<CreateInfoItemRequest>,
) -> Result<Json<InfoItem>, ApiError> {
    tracing::debug!("Updating info item: {}", id);

    payload.validate()?;
    validate_optional_rating(payload.rating)?;

    let slug = state
        .info_item_repo
        .mountain_slug(payload.mountain_id)
        .await?
        .ok_or_else(|| ApiError::NotFound {
            resource: "Mountain".to_string(),
            id: payload.mountain_id.to_string(),
        })?;

    let item = state
        .info_item_repo
        .update(id, &payload, &slug)
        .await?
        .ok_or_else(|| ApiError::NotFound {
            resource: "Info item".to_string(),
            id: id.to_string(),
        })?;
    Ok(Json(item))
}

#[utoipa::path(
    delete,
    path = "/api/info-items/{id}",
    params(
        ("id" = Uuid, Path, description = "Info item ID")
    ),
    responses(
        (status = 204, description = "Info item deleted"),
        (status = 404, description = "Info item not found", body = String, example = json!({"error": "Info item not found"})),
        (status = 500, description = "Internal server error", body = String, example = json!({"error": "Database error"}))
    ),
    tag = "catalog"
)]
pub async fn delete_info_item_handler(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    tracing::debug!("Deleting info item: {}", id);

    let deleted = state.info_item_repo.delete(id).await?;
    if !deleted {
        return Err(ApiError::NotFound {
            resource: "Info item".to_string(),
            id: id.to_string(),
        });
    }
    Ok(StatusCode::NO_CONTENT)
}

fn price_validation_error(error: validator::ValidationError) -> ApiError {
    let mut errors = validator::ValidationErrors::new();
    errors.add("price", error);
    ApiError::ValidationError(errors)
}

fn validate_optional_rating(rating: Option<f64>) -> Result<(), ApiError> {
    if let Some(rating) = rating {
        validate_rating_range(rating).map_err(|error| {
            let mut errors = validator::ValidationErrors::new();
            errors.add("rating", error);
            ApiError::ValidationError(errors)
        })?;
    }
    Ok(())
}

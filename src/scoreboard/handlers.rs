// HTTP handlers for the scoreboard

use axum::{extract::State, Json};

use crate::error::ApiError;
use crate::scoreboard::models::{AwardResult, Standing};
use crate::AppState;

/// Handler for GET /api/scoreboard
pub async fn standings_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<Standing>>, ApiError> {
    let standings = state.scoreboard_service.standings().await?;
    Ok(Json(standings))
}

/// Handler for POST /api/scoreboard/award (admin)
/// Credits the prize table to the current top three
pub async fn award_prizes_handler(
    State(state): State<AppState>,
) -> Result<Json<AwardResult>, ApiError> {
    let result = state.scoreboard_service.award_prizes().await?;
    Ok(Json(result))
}

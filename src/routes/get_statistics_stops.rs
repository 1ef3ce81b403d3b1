use crate::{
    types::{app_state::AppState, bounding_box::BoundingBox},
    utils::app_error::AppError,
};
use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

/// Stop list for the statistics endpoints (generated data set).
pub async fn get_statistics_stops(State(state): State<AppState>) -> Result<Response, AppError> {
    let stops = state.ridership_service.stops_in_area(&BoundingBox::PANGYO);

    if stops.is_empty() {
        return Err(AppError::not_found("No stops found for the area"));
    }

    Ok((StatusCode::OK, Json(stops)).into_response())
}

use crate::{
    types::{app_state::AppState, stop_info::StopInfo},
    utils::app_error::AppError,
};
use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use tracing::error;

/// Stops previously collected by `/api/real/fetch-stops`.
pub async fn get_saved_stops(State(state): State<AppState>) -> Result<Response, AppError> {
    let stops = state.stop_repository.list_all().await.map_err(|e| {
        error!("Failed to read saved stops: {}", e);
        AppError::internal()
    })?;

    if stops.is_empty() {
        return Err(AppError::not_found(
            "No saved stops. Call /api/real/fetch-stops first.",
        ));
    }

    let stops: Vec<StopInfo> = stops
        .into_iter()
        .map(|s| StopInfo {
            stop_id: s.station_id,
            stop_name: s.station_name,
            latitude: s.latitude,
            longitude: s.longitude,
        })
        .collect();

    Ok((StatusCode::OK, Json(stops)).into_response())
}

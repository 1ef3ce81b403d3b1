use crate::{
    services::ingestion_service::IngestionError,
    types::{app_state::AppState, bounding_box::BoundingBox, stop_info::StopInfo},
    utils::app_error::AppError,
};
use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
#[cfg(test)]
use axum_macros::debug_handler;
use serde::{Deserialize, Serialize};
use tracing::error;

#[derive(Serialize, Deserialize)]
pub struct FetchStopsResponse {
    pub message: String,
    pub total_stops: usize,
    pub saved_stops: usize,
    pub stops: Vec<StopInfo>,
}

/// Collects the Pangyo-dong stop set from the provider and saves it.
#[cfg_attr(test, debug_handler)]
pub async fn fetch_stops(State(state): State<AppState>) -> Result<Response, AppError> {
    let report = state
        .ingestion_service
        .ingest_area(&BoundingBox::PANGYO)
        .await
        .map_err(|e| match e {
            IngestionError::NoDataFound => AppError::not_found(
                "No stops found for the requested area. Check the API key and try again.",
            ),
            IngestionError::Database(e) => {
                error!("Failed to save fetched stops: {}", e);
                AppError::internal()
            }
        })?;

    let stops = report
        .stations
        .iter()
        .map(|s| StopInfo {
            stop_id: s.station_id.clone(),
            stop_name: s.station_name.clone(),
            latitude: s.latitude,
            longitude: s.longitude,
        })
        .collect();

    Ok((
        StatusCode::OK,
        Json(FetchStopsResponse {
            message: "Stop data collection complete".to_string(),
            total_stops: report.total_found,
            saved_stops: report.saved,
            stops,
        }),
    )
        .into_response())
}

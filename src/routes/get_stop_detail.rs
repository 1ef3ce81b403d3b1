use crate::{
    services::gbis_client::xml_parser, types::app_state::AppState, utils::app_error::AppError,
};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::error;

#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StopDetailResponse {
    pub station_id: String,
    pub station_name: String,
    pub latitude: f64,
    pub longitude: f64,
    pub routes: Vec<StopDetailRoute>,
}

#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StopDetailRoute {
    pub route_id: String,
    pub route_name: String,
    pub route_type: String,
}

/// Live detail for one stop, straight from the provider.
pub async fn get_stop_detail(
    State(state): State<AppState>,
    Path(stop_id): Path<String>,
) -> Result<Response, AppError> {
    let not_found =
        || AppError::not_found(format!("Stop information not found: {}", stop_id).as_str());

    let body = state
        .gbis_service
        .fetch_station_detail(&stop_id)
        .await
        .map_err(|e| {
            error!("Failed to fetch stop detail: {}", e);
            not_found()
        })?;

    let detail = xml_parser::parse_station_detail(&body).map_err(|e| {
        error!("Failed to parse stop detail: {}", e);
        not_found()
    })?;

    // The provider reports unknown ids as a well-formed response with an
    // empty body.
    if detail.station_id.is_empty() {
        return Err(not_found());
    }

    Ok((
        StatusCode::OK,
        Json(StopDetailResponse {
            station_id: detail.station_id,
            station_name: detail.station_name,
            latitude: detail.latitude,
            longitude: detail.longitude,
            routes: detail
                .routes
                .into_iter()
                .map(|r| StopDetailRoute {
                    route_id: r.route_id,
                    route_name: r.route_name,
                    route_type: r.route_type,
                })
                .collect(),
        }),
    )
        .into_response())
}

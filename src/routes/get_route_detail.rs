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
pub struct RouteDetailResponse {
    pub route_id: String,
    pub route_name: String,
    pub route_type_cd: String,
    pub start_station_name: String,
    pub end_station_name: String,
    pub stations: Vec<RouteDetailStation>,
}

#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteDetailStation {
    pub station_id: String,
    pub station_name: String,
    pub sequence: i64,
}

/// Live detail for one route, including its ordered stop list.
pub async fn get_route_detail(
    State(state): State<AppState>,
    Path(route_id): Path<String>,
) -> Result<Response, AppError> {
    let not_found =
        || AppError::not_found(format!("Route information not found: {}", route_id).as_str());

    let body = state
        .gbis_service
        .fetch_route_detail(&route_id)
        .await
        .map_err(|e| {
            error!("Failed to fetch route detail: {}", e);
            not_found()
        })?;

    let detail = xml_parser::parse_route_detail(&body).map_err(|e| {
        error!("Failed to parse route detail: {}", e);
        not_found()
    })?;

    if detail.route_id.is_empty() {
        return Err(not_found());
    }

    Ok((
        StatusCode::OK,
        Json(RouteDetailResponse {
            route_id: detail.route_id,
            route_name: detail.route_name,
            route_type_cd: detail.route_type,
            start_station_name: detail.start_station_name,
            end_station_name: detail.end_station_name,
            stations: detail
                .stations
                .into_iter()
                .map(|s| RouteDetailStation {
                    station_id: s.station_id,
                    station_name: s.station_name,
                    sequence: s.sequence,
                })
                .collect(),
        }),
    )
        .into_response())
}

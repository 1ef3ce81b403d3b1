use axum::{routing::get, Router};

use crate::types::app_state::AppState;

mod fetch_stops;
mod get_route_detail;
mod get_saved_stops;
mod get_sample_routes;
mod get_sample_stops;
mod get_statistics_stops;
mod get_statistics_summary;
mod get_stop_detail;
mod get_top_stops;
mod get_weekly_ridership;
mod search_routes;

pub fn apply_routes(app: Router<AppState>) -> Router<AppState> {
    app.route("/routes", get(get_sample_routes::get_routes))
        .route("/routes/:route_id", get(get_sample_routes::get_route))
        .route("/stops", get(get_sample_stops::get_stops))
        .route("/stops/:stop_id", get(get_sample_stops::get_stop))
        .route("/search", get(search_routes::search_routes))
        .route(
            "/api/statistics/stops",
            get(get_statistics_stops::get_statistics_stops),
        )
        .route(
            "/api/statistics/weekly/:stop_id",
            get(get_weekly_ridership::get_weekly_ridership),
        )
        .route("/api/statistics/top-stops", get(get_top_stops::get_top_stops))
        .route(
            "/api/statistics/summary",
            get(get_statistics_summary::get_statistics_summary),
        )
        .route("/api/real/fetch-stops", get(fetch_stops::fetch_stops))
        .route("/api/real/stops", get(get_saved_stops::get_saved_stops))
        .route(
            "/api/real/stops/:stop_id/info",
            get(get_stop_detail::get_stop_detail),
        )
        .route(
            "/api/real/routes/:route_id/info",
            get(get_route_detail::get_route_detail),
        )
}

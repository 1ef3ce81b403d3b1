use crate::{
    db::stop_repository::StopRepository,
    routes::apply_routes,
    services::{
        gbis_client::{
            area_scanner::AreaScanner,
            gbis_service::{GbisConfig, GbisService},
        },
        ingestion_service::IngestionService,
        ridership_service::RidershipService,
    },
    types::app_state::AppState,
};
use axum::{routing::get, Json, Router};
use serde_json::{json, Value};
use sqlx::SqlitePool;
use tower_http::cors::CorsLayer;

pub fn gen_app(gbis_config: GbisConfig, pool: SqlitePool) -> Router {
    let gbis_service = GbisService::new(gbis_config.clone());
    let stop_repository = StopRepository::new(pool);
    let scanner = AreaScanner::new(gbis_service.clone(), gbis_config.grid_divisions);

    let state = AppState {
        ingestion_service: IngestionService::new(scanner, stop_repository.clone()),
        ridership_service: RidershipService::new(),
        gbis_service,
        stop_repository,
    };

    apply_routes(Router::new())
        .route("/", get(root))
        .route("/health", get(health))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

async fn root() -> Json<Value> {
    Json(json!({
        "message": "Welcome to Bus Searcher API - Pangyo-dong Statistics",
        "version": env!("CARGO_PKG_VERSION"),
        "endpoints": {
            "mock_data": {
                "stops": "/api/statistics/stops",
                "weekly_ridership": "/api/statistics/weekly/{stop_id}"
            },
            "real_api": {
                "fetch_stops": "/api/real/fetch-stops",
                "saved_stops": "/api/real/stops",
                "stop_detail": "/api/real/stops/{stop_id}/info",
                "route_detail": "/api/real/routes/{route_id}/info"
            }
        }
    }))
}

async fn health() -> Json<Value> {
    Json(json!({ "status": "healthy" }))
}

#[cfg(test)]
pub struct MockApp {
    pub app: Router,
    pub gbis_server: mockito::ServerGuard,
    pub stop_repository: StopRepository,
}

/// App wired to a mockito provider and a shared in-memory database.
#[cfg(test)]
pub async fn gen_mock_app() -> MockApp {
    use sqlx::sqlite::SqlitePoolOptions;

    use crate::db::stop_repository::create_schema;

    let gbis_server = mockito::Server::new_async().await;

    // One connection so every clone of the pool sees the same in-memory db.
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .unwrap();
    create_schema(&pool).await.unwrap();

    let app = gen_app(
        GbisConfig::new(gbis_server.url().as_str(), "test-key"),
        pool.clone(),
    );

    MockApp {
        app,
        gbis_server,
        stop_repository: StopRepository::new(pool),
    }
}

#[cfg(test)]
mod tests {
    use axum::{body::Body, http::Request, http::StatusCode};
    use tower::ServiceExt;

    use super::*;

    #[tokio::test]
    async fn root_lists_the_endpoint_groups() {
        let mock_app = gen_mock_app().await;

        let response = mock_app
            .app
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn health_check_responds() {
        let mock_app = gen_mock_app().await;

        let response = mock_app
            .app
            .oneshot(
                Request::builder()
                    .uri("/health")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }
}

mod app;
mod db;
mod routes;
mod services;
mod types;
mod utils;

use std::{env, str::FromStr};

use services::gbis_client::gbis_service::GbisConfig;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool};
use tracing::info;

#[tokio::main]
async fn main() {
    _ = dotenvy::dotenv();
    tracing_subscriber::fmt::init();
    info!("Starting Bus Searcher API...");

    let api_key = env::var("BUSINFO_API_KEY").unwrap_or_default();
    let base_url = env::var("BUSINFO_API_BASE_URL")
        .unwrap_or_else(|_| "http://openapi.gbis.go.kr/ws/rest".to_string());
    let database_url =
        env::var("DATABASE_URL").unwrap_or_else(|_| "sqlite:bus_statistics.db".to_string());

    let options = SqliteConnectOptions::from_str(&database_url)
        .unwrap()
        .create_if_missing(true);
    let pool = SqlitePool::connect_with(options).await.unwrap();
    db::stop_repository::create_schema(&pool).await.unwrap();

    let app = app::gen_app(GbisConfig::new(&base_url, &api_key), pool);

    let listener = tokio::net::TcpListener::bind("0.0.0.0:8000").await.unwrap();
    info!("Listening on {}", listener.local_addr().unwrap());
    axum::serve(listener, app).await.unwrap();
}

use chrono::{DateTime, Utc};
use sqlx::SqlitePool;

use crate::services::gbis_client::types::station_record::StationRecord;

/// Persisted stop row. `station_id` is the unique key; everything else is
/// overwritten on re-ingestion.
#[derive(Clone, Debug, sqlx::FromRow)]
pub struct BusStop {
    pub station_id: String,
    pub station_name: String,
    pub latitude: f64,
    pub longitude: f64,
    pub route_count: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, PartialEq, Eq)]
pub enum UpsertOutcome {
    Created,
    Updated,
}

pub async fn create_schema(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    sqlx::query(
        "CREATE TABLE IF NOT EXISTS bus_stops (
            station_id TEXT PRIMARY KEY,
            station_name TEXT NOT NULL,
            latitude REAL NOT NULL,
            longitude REAL NOT NULL,
            route_count INTEGER NOT NULL DEFAULT 0,
            created_at TEXT NOT NULL,
            updated_at TEXT NOT NULL
        )",
    )
    .execute(pool)
    .await?;

    Ok(())
}

#[derive(Clone)]
pub struct StopRepository {
    pool: SqlitePool,
}

impl StopRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Insert-or-overwrite by station id. A fresh row gets
    /// `created_at = updated_at = now`; an existing row keeps its
    /// `created_at` and has every other field replaced.
    pub async fn upsert(&self, record: &StationRecord) -> Result<UpsertOutcome, sqlx::Error> {
        let existing = sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(1) FROM bus_stops WHERE station_id = $1",
        )
        .bind(&record.station_id)
        .fetch_one(&self.pool)
        .await?;

        let now = Utc::now();

        sqlx::query(
            "INSERT INTO bus_stops (
                station_id, station_name, latitude, longitude, route_count,
                created_at, updated_at
             )
             VALUES ($1, $2, $3, $4, $5, $6, $7)
             ON CONFLICT (station_id) DO UPDATE SET
                station_name = excluded.station_name,
                latitude = excluded.latitude,
                longitude = excluded.longitude,
                route_count = excluded.route_count,
                updated_at = excluded.updated_at",
        )
        .bind(&record.station_id)
        .bind(&record.station_name)
        .bind(record.latitude)
        .bind(record.longitude)
        .bind(record.route_count)
        .bind(now)
        .bind(now)
        .execute(&self.pool)
        .await?;

        if existing > 0 {
            Ok(UpsertOutcome::Updated)
        } else {
            Ok(UpsertOutcome::Created)
        }
    }

    pub async fn find_by_id(&self, station_id: &str) -> Result<Option<BusStop>, sqlx::Error> {
        sqlx::query_as::<_, BusStop>("SELECT * FROM bus_stops WHERE station_id = $1")
            .bind(station_id)
            .fetch_optional(&self.pool)
            .await
    }

    pub async fn list_all(&self) -> Result<Vec<BusStop>, sqlx::Error> {
        sqlx::query_as::<_, BusStop>("SELECT * FROM bus_stops ORDER BY station_id")
            .fetch_all(&self.pool)
            .await
    }
}

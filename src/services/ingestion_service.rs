use thiserror::Error;
use tracing::info;

use crate::{
    db::stop_repository::StopRepository,
    services::gbis_client::{area_scanner::AreaScanner, types::station_record::StationRecord},
    types::bounding_box::BoundingBox,
};

#[derive(Debug, Error)]
pub enum IngestionError {
    /// Every cell failed or came back empty. A legitimate outcome, not a
    /// server fault — callers surface it as not-found.
    #[error("no stops found in the requested area")]
    NoDataFound,

    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

pub struct IngestionReport {
    pub total_found: usize,
    pub saved: usize,
    /// The scanned records, for immediate display. Counts reflect this
    /// list, not a storage re-read.
    pub stations: Vec<StationRecord>,
}

/// Drives one collection run: area scan, then upsert of every record.
#[derive(Clone)]
pub struct IngestionService {
    scanner: AreaScanner,
    repository: StopRepository,
}

impl IngestionService {
    pub fn new(scanner: AreaScanner, repository: StopRepository) -> Self {
        Self {
            scanner,
            repository,
        }
    }

    pub async fn ingest_area(&self, bounds: &BoundingBox) -> Result<IngestionReport, IngestionError> {
        let stations = self.scanner.scan(bounds).await;

        if stations.is_empty() {
            return Err(IngestionError::NoDataFound);
        }

        let mut saved = 0;
        for station in &stations {
            self.repository.upsert(station).await?;
            saved += 1;
        }

        info!(total = stations.len(), saved, "stop ingestion run complete");

        Ok(IngestionReport {
            total_found: stations.len(),
            saved,
            stations,
        })
    }
}

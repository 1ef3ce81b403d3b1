use crate::{
    db::stop_repository::StopRepository,
    services::{
        gbis_client::gbis_service::GbisService, ingestion_service::IngestionService,
        ridership_service::RidershipService,
    },
};

#[derive(Clone)]
pub struct AppState {
    pub gbis_service: GbisService,
    pub ingestion_service: IngestionService,
    pub ridership_service: RidershipService,
    pub stop_repository: StopRepository,
}

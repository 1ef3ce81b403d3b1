pub mod gbis_client;
pub mod ingestion_service;
pub mod ridership_service;

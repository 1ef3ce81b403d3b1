pub mod gbis_service_error;
pub mod route_detail;
pub mod station_detail;
pub mod station_record;

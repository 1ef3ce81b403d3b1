pub mod area_scanner;
pub mod gbis_service;
pub mod types;
pub mod xml_parser;

use std::time::Duration;

use urlencoding::encode;

use super::types::gbis_service_error::GbisServiceError;

#[derive(Clone)]
pub struct GbisConfig {
    pub host: String,
    pub api_key: String,
    /// Per-call upper bound; a timed-out call is a transport failure.
    pub timeout_secs: u64,
    /// Radius of a single station search, meters.
    pub search_radius_m: u32,
    /// Sample points per bounding-box axis when tiling an area scan.
    pub grid_divisions: u32,
}

impl GbisConfig {
    pub fn new(host: &str, api_key: &str) -> Self {
        GbisConfig {
            host: host.to_string(),
            api_key: api_key.to_string(),
            timeout_secs: 30,
            search_radius_m: 1000,
            grid_divisions: 2,
        }
    }
}

/// Client for the GBIS open API. Returns raw XML bodies; parsing lives in
/// `xml_parser`. No internal retry — a failed call is the caller's signal
/// that this coordinate yielded nothing.
#[derive(Clone)]
pub struct GbisService {
    config: GbisConfig,
    client: reqwest::Client,
}

impl GbisService {
    pub fn new(config: GbisConfig) -> Self {
        Self {
            config,
            client: reqwest::Client::new(),
        }
    }

    /// Stations within `search_radius_m` of a single coordinate pair.
    pub async fn search_stations(
        &self,
        latitude: f64,
        longitude: f64,
    ) -> Result<String, GbisServiceError> {
        let url = format!(
            "{}/stationinfo/getStationByPolyline?apiKey={}&lat={}&lon={}&radius={}",
            self.config.host,
            encode(&self.config.api_key),
            latitude,
            longitude,
            self.config.search_radius_m
        );

        self.fetch(&url).await
    }

    pub async fn fetch_station_detail(&self, station_id: &str) -> Result<String, GbisServiceError> {
        let url = format!(
            "{}/stationinfo/getStationWithBusLisInfo?apiKey={}&stationId={}",
            self.config.host,
            encode(&self.config.api_key),
            encode(station_id)
        );

        self.fetch(&url).await
    }

    pub async fn fetch_route_detail(&self, route_id: &str) -> Result<String, GbisServiceError> {
        let url = format!(
            "{}/routeinfo/getRouteWithStationList?apiKey={}&routeId={}",
            self.config.host,
            encode(&self.config.api_key),
            encode(route_id)
        );

        self.fetch(&url).await
    }

    async fn fetch(&self, url: &str) -> Result<String, GbisServiceError> {
        let resp = self
            .client
            .get(url)
            .timeout(Duration::from_secs(self.config.timeout_secs))
            .send()
            .await
            .map_err(|e| GbisServiceError::Transport(e.to_string()))?;

        if !resp.status().is_success() {
            return Err(GbisServiceError::Status(resp.status().as_u16()));
        }

        resp.text()
            .await
            .map_err(|e| GbisServiceError::Transport(e.to_string()))
    }
}

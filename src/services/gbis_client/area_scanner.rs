use std::collections::HashMap;

use futures::future::join_all;
use tracing::warn;

use crate::types::bounding_box::BoundingBox;

use super::{gbis_service::GbisService, types::station_record::StationRecord, xml_parser};

/// Tiles a bounding box with radius-limited station searches.
///
/// One provider call covers only a fixed radius around a point, so the box
/// is sampled on a `grid_divisions`-per-axis grid and the per-cell results
/// are merged. Cells fail independently: a transport or parse failure
/// contributes zero records without aborting the scan.
#[derive(Clone)]
pub struct AreaScanner {
    service: GbisService,
    grid_divisions: u32,
}

impl AreaScanner {
    pub fn new(service: GbisService, grid_divisions: u32) -> Self {
        Self {
            service,
            grid_divisions,
        }
    }

    /// Deduplicated stations for the area, keyed by station id
    /// (last-seen-wins; overlapping cells report identical records).
    /// Order is unspecified.
    pub async fn scan(&self, bounds: &BoundingBox) -> Vec<StationRecord> {
        let cells = bounds.grid_points(self.grid_divisions);

        let results = join_all(
            cells
                .iter()
                .map(|(lat, lon)| self.scan_cell(*lat, *lon)),
        )
        .await;

        let mut unique = HashMap::new();
        for station in results.into_iter().flatten() {
            unique.insert(station.station_id.clone(), station);
        }

        unique.into_values().collect()
    }

    async fn scan_cell(&self, latitude: f64, longitude: f64) -> Vec<StationRecord> {
        let body = match self.service.search_stations(latitude, longitude).await {
            Ok(body) => body,
            Err(e) => {
                warn!(latitude, longitude, "station search failed: {}", e);
                return Vec::new();
            }
        };

        match xml_parser::parse_station_list(&body) {
            Ok(stations) => stations,
            Err(e) => {
                warn!(latitude, longitude, "station search unparsable: {}", e);
                Vec::new()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use mockito::Matcher;

    use crate::services::gbis_client::gbis_service::GbisConfig;

    use super::*;

    // Exactly representable bounds so the grid points format to stable
    // query strings: lat 37 / 37.5, lon 127 / 127.5.
    const BOUNDS: BoundingBox = BoundingBox {
        lat_min: 37.0,
        lat_max: 38.0,
        lon_min: 127.0,
        lon_max: 128.0,
    };

    fn station_xml(entries: &[(&str, &str)]) -> String {
        let mut body = String::from("<response><msgBody>");
        for (id, name) in entries {
            body.push_str(&format!(
                "<busStationList><stationId>{}</stationId><stationName>{}</stationName>\
                 <latitude>37.39</latitude><longitude>127.11</longitude></busStationList>",
                id, name
            ));
        }
        body.push_str("</msgBody></response>");
        body
    }

    fn scanner_for(server: &mockito::Server) -> AreaScanner {
        let service = GbisService::new(GbisConfig::new(server.url().as_str(), "key"));
        AreaScanner::new(service, 2)
    }

    #[tokio::test]
    async fn merges_cells_and_dedupes_by_station_id() {
        let mut server = mockito::Server::new_async().await;

        // Every cell reports the same two stations.
        let mock = server
            .mock("GET", "/stationinfo/getStationByPolyline")
            .match_query(Matcher::Regex(".*".to_string()))
            .with_body(station_xml(&[
                ("22000001", "판교역 1번출구"),
                ("22000002", "판교역 2번출구"),
            ]))
            .expect(4)
            .create_async()
            .await;

        let stations = scanner_for(&server).scan(&BOUNDS).await;

        mock.assert();
        assert_eq!(stations.len(), 2);

        let mut ids: Vec<_> = stations.iter().map(|s| s.station_id.as_str()).collect();
        ids.sort();
        assert_eq!(ids, vec!["22000001", "22000002"]);
    }

    #[tokio::test]
    async fn failed_cells_do_not_abort_the_scan() {
        let mut server = mockito::Server::new_async().await;

        // Both lat=37 cells fail, both lat=37.5 cells succeed.
        server
            .mock("GET", "/stationinfo/getStationByPolyline")
            .match_query(Matcher::AllOf(vec![Matcher::UrlEncoded(
                "lat".to_string(),
                "37".to_string(),
            )]))
            .with_status(500)
            .expect(2)
            .create_async()
            .await;

        server
            .mock("GET", "/stationinfo/getStationByPolyline")
            .match_query(Matcher::AllOf(vec![Matcher::UrlEncoded(
                "lat".to_string(),
                "37.5".to_string(),
            )]))
            .with_body(station_xml(&[("22000003", "삼성전자 남문")]))
            .expect(2)
            .create_async()
            .await;

        let stations = scanner_for(&server).scan(&BOUNDS).await;

        assert_eq!(stations.len(), 1);
        assert_eq!(stations[0].station_id, "22000003");
    }

    #[tokio::test]
    async fn unparsable_cells_count_as_empty() {
        let mut server = mockito::Server::new_async().await;

        server
            .mock("GET", "/stationinfo/getStationByPolyline")
            .match_query(Matcher::AllOf(vec![Matcher::UrlEncoded(
                "lat".to_string(),
                "37".to_string(),
            )]))
            .with_body("<response><msgBody><busStationList></msgBody></response>")
            .expect(2)
            .create_async()
            .await;

        server
            .mock("GET", "/stationinfo/getStationByPolyline")
            .match_query(Matcher::AllOf(vec![Matcher::UrlEncoded(
                "lat".to_string(),
                "37.5".to_string(),
            )]))
            .with_body(station_xml(&[("22000004", "판교 테크원")]))
            .expect(2)
            .create_async()
            .await;

        let stations = scanner_for(&server).scan(&BOUNDS).await;

        assert_eq!(stations.len(), 1);
        assert_eq!(stations[0].station_id, "22000004");
    }

    #[tokio::test]
    async fn all_cells_failing_yields_an_empty_scan() {
        let mut server = mockito::Server::new_async().await;

        server
            .mock("GET", "/stationinfo/getStationByPolyline")
            .match_query(Matcher::Regex(".*".to_string()))
            .with_status(500)
            .expect(4)
            .create_async()
            .await;

        let stations = scanner_for(&server).scan(&BOUNDS).await;

        assert!(stations.is_empty());
    }
}

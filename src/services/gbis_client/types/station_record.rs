/// One stop as reported by the station search endpoint. Transient: the
/// repository owns the persisted form.
#[derive(Clone, Debug, PartialEq)]
pub struct StationRecord {
    pub station_id: String,
    pub station_name: String,
    pub latitude: f64,
    pub longitude: f64,
    pub route_count: i64,
}

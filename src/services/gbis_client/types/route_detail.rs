/// Detail payload for a single route, including its ordered stop list.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RouteDetail {
    pub route_id: String,
    pub route_name: String,
    pub route_type: String,
    pub start_station_name: String,
    pub end_station_name: String,
    pub stations: Vec<RouteStopEntry>,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct RouteStopEntry {
    pub station_id: String,
    pub station_name: String,
    pub sequence: i64,
}

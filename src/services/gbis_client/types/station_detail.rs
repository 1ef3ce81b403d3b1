/// Detail payload for a single stop, including the routes serving it.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct StationDetail {
    pub station_id: String,
    pub station_name: String,
    pub latitude: f64,
    pub longitude: f64,
    pub routes: Vec<ServedRoute>,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ServedRoute {
    pub route_id: String,
    pub route_name: String,
    pub route_type: String,
}

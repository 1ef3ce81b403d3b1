use serde::{Deserialize, Serialize};

/// Compact stop shape shared by the list endpoints.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct StopInfo {
    pub stop_id: String,
    pub stop_name: String,
    pub latitude: f64,
    pub longitude: f64,
}

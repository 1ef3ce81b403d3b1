use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct DailyRidership {
    pub date: String,
    pub stop_id: String,
    pub passenger_count: i64,
    pub peak_hour: Option<i64>,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct WeeklyRidership {
    pub stop_id: String,
    pub stop_name: Option<String>,
    pub week_data: Vec<DailyRidership>,
    pub total_count: i64,
    pub average_daily: i64,
}

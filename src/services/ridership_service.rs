use chrono::{Duration, Utc};
use rand::Rng;

use crate::types::{
    bounding_box::BoundingBox,
    ridership::{DailyRidership, WeeklyRidership},
    stop_info::StopInfo,
};

/// Placeholder ridership source. The provider publishes no per-stop
/// passenger counts, so the statistics endpoints run on generated data;
/// the persisted store is never involved.
#[derive(Clone, Default)]
pub struct RidershipService;

impl RidershipService {
    pub fn new() -> Self {
        Self
    }

    /// The Pangyo-dong stop set the statistics endpoints report on.
    pub fn stops_in_area(&self, _bounds: &BoundingBox) -> Vec<StopInfo> {
        vec![
            StopInfo {
                stop_id: "22000001".to_string(),
                stop_name: "판교역 1번출구".to_string(),
                latitude: 37.3950,
                longitude: 127.1100,
            },
            StopInfo {
                stop_id: "22000002".to_string(),
                stop_name: "판교역 2번출구".to_string(),
                latitude: 37.3951,
                longitude: 127.1101,
            },
            StopInfo {
                stop_id: "22000003".to_string(),
                stop_name: "삼성전자 남문".to_string(),
                latitude: 37.3975,
                longitude: 127.1125,
            },
            StopInfo {
                stop_id: "22000004".to_string(),
                stop_name: "판교 테크원".to_string(),
                latitude: 37.4000,
                longitude: 127.1150,
            },
        ]
    }

    /// Seven days of generated counts, most recent day first.
    pub fn weekly_ridership(&self, stop_id: &str) -> WeeklyRidership {
        let mut rng = rand::rng();

        let mut week_data = Vec::with_capacity(7);
        for days_ago in 0..7 {
            let date = (Utc::now() - Duration::days(days_ago))
                .format("%Y-%m-%d")
                .to_string();

            week_data.push(DailyRidership {
                date,
                stop_id: stop_id.to_string(),
                passenger_count: rng.random_range(100..=500),
                peak_hour: Some(rng.random_range(7..=9)),
            });
        }

        let total_count: i64 = week_data.iter().map(|d| d.passenger_count).sum();

        WeeklyRidership {
            stop_id: stop_id.to_string(),
            stop_name: None,
            week_data,
            total_count,
            average_daily: total_count / 7,
        }
    }
}

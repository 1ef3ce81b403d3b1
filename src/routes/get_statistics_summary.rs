use crate::{
    types::{app_state::AppState, bounding_box::BoundingBox},
    utils::app_error::AppError,
};
use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize)]
pub struct TopStopSummary {
    pub name: String,
    pub weekly_count: i64,
}

#[derive(Serialize, Deserialize)]
pub struct StatisticsSummaryResponse {
    pub total_stops: usize,
    pub total_weekly_ridership: i64,
    pub top_stop: TopStopSummary,
    pub average_per_stop: i64,
    pub period: String,
}

/// Area-wide roll-up of the generated ridership data.
pub async fn get_statistics_summary(
    State(state): State<AppState>,
) -> Result<Json<StatisticsSummaryResponse>, AppError> {
    let stops = state.ridership_service.stops_in_area(&BoundingBox::PANGYO);

    if stops.is_empty() {
        return Err(AppError::not_found("No stops found for the area"));
    }

    let mut total_ridership = 0;
    let mut top_stop = TopStopSummary {
        name: String::new(),
        weekly_count: 0,
    };

    for stop in &stops {
        let weekly = state.ridership_service.weekly_ridership(&stop.stop_id);
        total_ridership += weekly.total_count;

        if weekly.total_count > top_stop.weekly_count {
            top_stop = TopStopSummary {
                name: stop.stop_name.clone(),
                weekly_count: weekly.total_count,
            };
        }
    }

    Ok(Json(StatisticsSummaryResponse {
        total_stops: stops.len(),
        total_weekly_ridership: total_ridership,
        average_per_stop: total_ridership / stops.len() as i64,
        top_stop,
        period: "Last 7 days".to_string(),
    }))
}

#[cfg(test)]
mod tests {
    use axum::{
        body::{to_bytes, Body},
        http::{Request, StatusCode},
    };
    use tower::ServiceExt;

    use crate::app::gen_mock_app;

    use super::*;

    #[tokio::test]
    async fn summarizes_the_whole_area() {
        let mock_app = gen_mock_app().await;

        let response = mock_app
            .app
            .oneshot(
                Request::builder()
                    .uri("/api/statistics/summary")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);

        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body: StatisticsSummaryResponse = serde_json::from_slice(&body).unwrap();

        assert_eq!(body.total_stops, 4);
        assert_eq!(body.period, "Last 7 days");
        assert!(!body.top_stop.name.is_empty());
        assert!(body.top_stop.weekly_count >= body.average_per_stop);
        // 4 stops, each 7 days in the 100..=500 range.
        assert!(body.total_weekly_ridership >= 4 * 7 * 100);
        assert!(body.total_weekly_ridership <= 4 * 7 * 500);
    }
}

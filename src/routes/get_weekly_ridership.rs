use crate::types::{app_state::AppState, ridership::WeeklyRidership};
use axum::{
    extract::{Path, State},
    Json,
};

/// Generated 7-day ridership for one stop.
pub async fn get_weekly_ridership(
    State(state): State<AppState>,
    Path(stop_id): Path<String>,
) -> Json<WeeklyRidership> {
    Json(state.ridership_service.weekly_ridership(&stop_id))
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
    async fn returns_a_full_week() {
        let mock_app = gen_mock_app().await;

        let response = mock_app
            .app
            .oneshot(
                Request::builder()
                    .uri("/api/statistics/weekly/22000001")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);

        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body: WeeklyRidership = serde_json::from_slice(&body).unwrap();

        assert_eq!(body.stop_id, "22000001");
        assert_eq!(body.week_data.len(), 7);
        assert_eq!(
            body.total_count,
            body.week_data.iter().map(|d| d.passenger_count).sum::<i64>()
        );
    }
}

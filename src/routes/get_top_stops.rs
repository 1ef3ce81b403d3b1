use crate::{
    types::{app_state::AppState, bounding_box::BoundingBox, ridership::WeeklyRidership},
    utils::{app_error::AppError, validated_query::ValidatedQuery},
};
use axum::{extract::State, Json};
use serde::Deserialize;
use validator::Validate;

fn default_limit() -> usize {
    5
}

#[derive(Validate, Deserialize)]
pub struct GetTopStopsPayload {
    #[validate(range(min = 1, message = "Must be at least 1"))]
    #[serde(default = "default_limit")]
    pub limit: usize,
}

/// Stops ranked by generated weekly ridership, busiest first.
pub async fn get_top_stops(
    State(state): State<AppState>,
    ValidatedQuery(payload): ValidatedQuery<GetTopStopsPayload>,
) -> Result<Json<Vec<WeeklyRidership>>, AppError> {
    let stops = state.ridership_service.stops_in_area(&BoundingBox::PANGYO);

    let mut ranked: Vec<WeeklyRidership> = stops
        .iter()
        .take(payload.limit)
        .map(|stop| {
            let mut weekly = state.ridership_service.weekly_ridership(&stop.stop_id);
            weekly.stop_name = Some(stop.stop_name.clone());
            weekly
        })
        .collect();

    ranked.sort_by(|a, b| b.total_count.cmp(&a.total_count));
    ranked.truncate(payload.limit);

    Ok(Json(ranked))
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
    async fn ranks_descending_and_honors_the_limit() {
        let mock_app = gen_mock_app().await;

        let response = mock_app
            .app
            .oneshot(
                Request::builder()
                    .uri("/api/statistics/top-stops?limit=2")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);

        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body: Vec<WeeklyRidership> = serde_json::from_slice(&body).unwrap();

        assert_eq!(body.len(), 2);
        assert!(body[0].total_count >= body[1].total_count);
        assert!(body[0].stop_name.is_some());
    }

    #[tokio::test]
    async fn defaults_to_the_whole_fixture() {
        let mock_app = gen_mock_app().await;

        let response = mock_app
            .app
            .oneshot(
                Request::builder()
                    .uri("/api/statistics/top-stops")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);

        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body: Vec<WeeklyRidership> = serde_json::from_slice(&body).unwrap();

        assert_eq!(body.len(), 4);
    }

    #[tokio::test]
    async fn zero_limit_is_rejected() {
        let mock_app = gen_mock_app().await;

        let response = mock_app
            .app
            .oneshot(
                Request::builder()
                    .uri("/api/statistics/top-stops?limit=0")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}

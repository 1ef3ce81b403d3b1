use crate::utils::app_error::AppError;
use axum::{
    extract::{Path, Query},
    Json,
};
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Clone)]
pub struct SampleRoute {
    pub id: i64,
    pub route_number: String,
    pub origin: String,
    pub destination: String,
    pub stops: Vec<String>,
}

/// Demonstration routes served without any backing store.
pub fn sample_routes() -> Vec<SampleRoute> {
    vec![
        SampleRoute {
            id: 1,
            route_number: "101".to_string(),
            origin: "Downtown".to_string(),
            destination: "Airport".to_string(),
            stops: vec![
                "Downtown".to_string(),
                "Main Street".to_string(),
                "Park Avenue".to_string(),
                "Airport".to_string(),
            ],
        },
        SampleRoute {
            id: 2,
            route_number: "202".to_string(),
            origin: "University".to_string(),
            destination: "Mall".to_string(),
            stops: vec![
                "University".to_string(),
                "Library".to_string(),
                "Shopping District".to_string(),
                "Mall".to_string(),
            ],
        },
    ]
}

#[derive(Deserialize)]
pub struct GetRoutesPayload {
    pub origin: Option<String>,
    pub destination: Option<String>,
}

pub async fn get_routes(Query(payload): Query<GetRoutesPayload>) -> Json<Vec<SampleRoute>> {
    let mut routes = sample_routes();

    if let Some(origin) = payload.origin {
        routes.retain(|r| r.origin.eq_ignore_ascii_case(&origin));
    }

    if let Some(destination) = payload.destination {
        routes.retain(|r| r.destination.eq_ignore_ascii_case(&destination));
    }

    Json(routes)
}

pub async fn get_route(Path(route_id): Path<i64>) -> Result<Json<SampleRoute>, AppError> {
    sample_routes()
        .into_iter()
        .find(|r| r.id == route_id)
        .map(Json)
        .ok_or_else(|| AppError::not_found("Route not found"))
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
    async fn filters_by_origin() {
        let mock_app = gen_mock_app().await;

        let response = mock_app
            .app
            .oneshot(
                Request::builder()
                    .uri("/routes?origin=downtown")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);

        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body: Vec<SampleRoute> = serde_json::from_slice(&body).unwrap();

        assert_eq!(body.len(), 1);
        assert_eq!(body[0].route_number, "101");
    }

    #[tokio::test]
    async fn unknown_route_id_is_not_found() {
        let mock_app = gen_mock_app().await;

        let response = mock_app
            .app
            .oneshot(
                Request::builder()
                    .uri("/routes/99")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}

use crate::utils::app_error::AppError;
use axum::{
    extract::{Path, Query},
    Json,
};
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Clone)]
pub struct SampleStop {
    pub id: i64,
    pub name: String,
    pub location: String,
}

/// Demonstration stops served without any backing store.
pub fn sample_stops() -> Vec<SampleStop> {
    vec![
        SampleStop {
            id: 1,
            name: "Downtown".to_string(),
            location: "City Center".to_string(),
        },
        SampleStop {
            id: 2,
            name: "Main Street".to_string(),
            location: "Business District".to_string(),
        },
        SampleStop {
            id: 3,
            name: "Park Avenue".to_string(),
            location: "Residential Area".to_string(),
        },
        SampleStop {
            id: 4,
            name: "Airport".to_string(),
            location: "International Airport".to_string(),
        },
    ]
}

#[derive(Deserialize)]
pub struct GetStopsPayload {
    pub name: Option<String>,
}

pub async fn get_stops(Query(payload): Query<GetStopsPayload>) -> Json<Vec<SampleStop>> {
    let mut stops = sample_stops();

    if let Some(name) = payload.name {
        let name = name.to_lowercase();
        stops.retain(|s| s.name.to_lowercase().contains(&name));
    }

    Json(stops)
}

pub async fn get_stop(Path(stop_id): Path<i64>) -> Result<Json<SampleStop>, AppError> {
    sample_stops()
        .into_iter()
        .find(|s| s.id == stop_id)
        .map(Json)
        .ok_or_else(|| AppError::not_found("Stop not found"))
}

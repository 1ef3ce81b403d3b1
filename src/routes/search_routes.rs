use crate::utils::{app_error::AppError, validated_query::ValidatedQuery};
use axum::Json;
use serde::{Deserialize, Serialize};
use validator::Validate;

use super::get_sample_routes::{sample_routes, SampleRoute};

#[derive(Validate, Deserialize)]
pub struct SearchRoutesPayload {
    #[validate(length(min = 1, message = "Must be at least 1 character"))]
    pub query: String,
}

#[derive(Serialize, Deserialize)]
pub struct SearchRoutesResponse {
    pub query: String,
    pub results: Vec<SampleRoute>,
    pub count: usize,
}

/// Substring search across every sample-route field.
pub async fn search_routes(
    ValidatedQuery(payload): ValidatedQuery<SearchRoutesPayload>,
) -> Result<Json<SearchRoutesResponse>, AppError> {
    let query = payload.query.to_lowercase();

    let results: Vec<SampleRoute> = sample_routes()
        .into_iter()
        .filter(|r| {
            r.route_number.to_lowercase().contains(&query)
                || r.origin.to_lowercase().contains(&query)
                || r.destination.to_lowercase().contains(&query)
                || r.stops.iter().any(|s| s.to_lowercase().contains(&query))
        })
        .collect();

    let count = results.len();

    Ok(Json(SearchRoutesResponse {
        query: payload.query,
        results,
        count,
    }))
}

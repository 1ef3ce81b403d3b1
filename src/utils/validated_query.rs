use std::error::Error;

use axum::{
    async_trait,
    extract::{FromRequest, Query, Request},
    http::StatusCode,
};
use serde::de::DeserializeOwned;
use validator::Validate;

use super::app_error::AppError;

/// Query extractor that rejects with a 400 JSON body on either a
/// deserialization failure or a failed `validator` check.
pub struct ValidatedQuery<T>(pub T);

#[async_trait]
impl<T, S> FromRequest<S> for ValidatedQuery<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Query(data) = Query::<T>::from_request(req, state).await.map_err(|e| {
            let detail = match e.source() {
                Some(source) => source.to_string(),
                None => e.body_text(),
            };
            AppError::new(
                StatusCode::BAD_REQUEST,
                format!("Invalid query: {}", detail).as_str(),
            )
        })?;

        data.validate().map_err(|e| {
            AppError::new(
                StatusCode::BAD_REQUEST,
                format!("Invalid query: {}", e).as_str(),
            )
        })?;

        Ok(ValidatedQuery(data))
    }
}

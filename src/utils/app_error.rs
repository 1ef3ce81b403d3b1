use axum::{
    body::Body,
    http::{Response, StatusCode},
    response::IntoResponse,
    Json,
};
use serde::Serialize;

#[derive(Debug)]
pub struct AppError {
    pub code: StatusCode,
    pub message: String,
}

impl AppError {
    pub fn new(code: StatusCode, message: &str) -> Self {
        AppError {
            code,
            message: message.to_string(),
        }
    }

    pub fn not_found(message: &str) -> Self {
        AppError::new(StatusCode::NOT_FOUND, message)
    }

    pub fn internal() -> Self {
        AppError::new(StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error")
    }
}

#[derive(Serialize)]
struct ResponseJson {
    message: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response<Body> {
        (
            self.code,
            Json(ResponseJson {
                message: self.message,
            }),
        )
            .into_response()
    }
}

//! Typed errors and HTTP mapping.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::response::{self, MessageBody};

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("invalid value for {var}: {value}")]
    InvalidVar { var: &'static str, value: String },
    #[error("invalid DATABASE_URL: {0}")]
    InvalidUrl(String),
}

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("name and description are required")]
    InvalidInput,
    #[error("item not found")]
    NotFound,
    #[error("no matching route")]
    RouteNotFound,
    #[error("malformed request")]
    BadRequest,
    #[error("database: {0}")]
    Db(#[from] sqlx::Error),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            ApiError::InvalidInput => (StatusCode::BAD_REQUEST, response::INVALID_INPUT),
            ApiError::NotFound => (StatusCode::NOT_FOUND, response::ITEM_NOT_FOUND),
            ApiError::RouteNotFound => (StatusCode::NOT_FOUND, response::RESOURCE_NOT_FOUND),
            ApiError::BadRequest => (StatusCode::BAD_REQUEST, response::BAD_REQUEST),
            ApiError::Db(e) => {
                // Full detail stays in the log; the body is the fixed string.
                tracing::error!(error = %e, "storage operation failed");
                (StatusCode::INTERNAL_SERVER_ERROR, response::INTERNAL_ERROR)
            }
        };
        (status, Json(MessageBody { message })).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;
    use serde_json::{json, Value};

    async fn rendered(error: ApiError) -> (StatusCode, Value) {
        let response = error.into_response();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn maps_each_variant_to_its_wire_body() {
        let (status, body) = rendered(ApiError::InvalidInput).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(
            body,
            json!({"message": "Invalid input, name and description are required"})
        );

        let (status, body) = rendered(ApiError::NotFound).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body, json!({"message": "Item not found"}));

        let (status, body) = rendered(ApiError::RouteNotFound).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body, json!({"message": "Resource not found"}));

        let (status, body) = rendered(ApiError::BadRequest).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, json!({"message": "Bad request. Please check the input."}));
    }

    #[tokio::test]
    async fn storage_detail_never_reaches_the_body() {
        let (status, body) = rendered(ApiError::Db(sqlx::Error::RowNotFound)).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            body,
            json!({"message": "Internal server error. Please try again later."})
        );
    }
}

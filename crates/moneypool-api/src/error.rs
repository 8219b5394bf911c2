//! Error types for moneypool-api

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use moneypool_core::{ErrorCode, ErrorDetails, FetchFailure};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Not found: {resource}")]
    NotFound { resource: String },

    #[error("{0}")]
    Fetch(FetchFailure),
}

impl ApiError {
    /// HTTP status for the response
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::NotFound { .. } => StatusCode::NOT_FOUND,
            ApiError::Fetch(failure) => match failure {
                FetchFailure::NotFound { .. } => StatusCode::NOT_FOUND,
                FetchFailure::Invalid { .. } => StatusCode::UNPROCESSABLE_ENTITY,
                FetchFailure::Rejected { .. }
                | FetchFailure::Upstream { .. }
                | FetchFailure::Network { .. }
                | FetchFailure::Decode { .. } => StatusCode::BAD_GATEWAY,
            },
        }
    }

    /// JSON body for the response
    pub fn to_details(&self) -> ErrorDetails {
        match self {
            ApiError::NotFound { .. } => ErrorDetails::new(ErrorCode::NotFound, self.to_string()),
            ApiError::Fetch(failure) => failure.to_details(),
        }
    }
}

impl From<FetchFailure> for ApiError {
    fn from(failure: FetchFailure) -> Self {
        ApiError::Fetch(failure)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            log::error!("[{}] {}", self.to_details().code, self);
        } else {
            log::warn!("[{}] {}", self.to_details().code, self);
        }
        (status, Json(self.to_details())).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        let not_found = ApiError::from(FetchFailure::NotFound { pool_id: "x".to_string() });
        assert_eq!(not_found.status(), StatusCode::NOT_FOUND);

        let invalid = ApiError::from(FetchFailure::Invalid { message: "bad date".to_string() });
        assert_eq!(invalid.status(), StatusCode::UNPROCESSABLE_ENTITY);

        let offline = ApiError::from(FetchFailure::Network { message: "refused".to_string() });
        assert_eq!(offline.status(), StatusCode::BAD_GATEWAY);
        assert_eq!(offline.to_details().code, ErrorCode::NetworkError);
    }

    #[test]
    fn test_route_not_found_details() {
        let error = ApiError::NotFound { resource: "/x".to_string() };
        assert_eq!(error.to_details().code, ErrorCode::NotFound);
        assert!(error.to_details().message.contains("/x"));
    }
}

//! API Error Types
//!
//! Converts core errors into HTTP responses. Client-side validation
//! failures become 400s whose body is the error's own plain-text
//! explanation, so the caller sees exactly which rule was broken.
//! Server-side data problems become 500s and are logged with a request id.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::climate::{DataError, RangeOrderError, ValidationError};
use crate::store::StoreError;

/// API error types
#[derive(Error, Debug)]
pub enum ApiError {
    /// User-supplied date failed validation
    #[error("{0}")]
    Validation(#[from] ValidationError),

    /// Two-date query with end before start
    #[error("{0}")]
    RangeOrder(#[from] RangeOrderError),

    /// Data-integrity problem in the dataset
    #[error("Data error: {0}")]
    Data(#[from] DataError),

    /// Store query failure
    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Internal server error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ApiError {
    fn status(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) | ApiError::RangeOrder(_) => StatusCode::BAD_REQUEST,
            ApiError::Data(_)
            | ApiError::Store(_)
            | ApiError::Io(_)
            | ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();

        if status.is_server_error() {
            let request_id = uuid::Uuid::new_v4().to_string();
            tracing::error!(
                request_id = %request_id,
                error_message = %self,
                "API error occurred"
            );
            return (status, format!("{}\n(request id {})\n", self, request_id)).into_response();
        }

        // Client errors carry their full explanation as plain text.
        (status, format!("{}\n", self)).into_response()
    }
}

/// Result type for API operations
pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn test_validation_maps_to_bad_request() {
        let err = ApiError::from(ValidationError::Malformed {
            input: "nope".to_string(),
        });
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_range_order_maps_to_bad_request() {
        let err = ApiError::from(RangeOrderError {
            start: date("2017-08-22"),
            end: date("2017-08-01"),
        });
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_data_maps_to_server_error() {
        let err = ApiError::from(DataError::EmptyDataset);
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}

//! Error taxonomy and its HTTP mapping.
//!
//! The `Display` strings are the exact plain-text response bodies; clients
//! match on them, so they are load-bearing and covered by tests.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

/// Request-level failures for the Fibonacci endpoint.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum FibError {
    /// The request body carried no usable `nth` field.
    #[error("Please provide 'nth' parameter in the request body")]
    MissingNth,
    /// `nth` was present but negative.
    #[error("nth must be greater than or equal to 0")]
    NegativeNth,
    /// The computation task failed unexpectedly.
    #[error("Error calculating Fibonacci: {0}")]
    Calculation(String),
}

impl FibError {
    /// HTTP status for this error. Input errors are the client's fault.
    pub fn status(&self) -> StatusCode {
        match self {
            FibError::MissingNth | FibError::NegativeNth => StatusCode::BAD_REQUEST,
            FibError::Calculation(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for FibError {
    fn into_response(self) -> Response {
        if let FibError::Calculation(msg) = &self {
            tracing::error!(error = %msg, "Fibonacci computation failed");
        }
        (self.status(), self.to_string()).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_error_bodies_are_exact() {
        assert_eq!(
            FibError::MissingNth.to_string(),
            "Please provide 'nth' parameter in the request body"
        );
        assert_eq!(
            FibError::NegativeNth.to_string(),
            "nth must be greater than or equal to 0"
        );
    }

    #[test]
    fn test_calculation_error_includes_message() {
        let err = FibError::Calculation("worker died".into());
        assert_eq!(err.to_string(), "Error calculating Fibonacci: worker died");
    }

    #[test]
    fn test_status_mapping() {
        assert_eq!(FibError::MissingNth.status(), StatusCode::BAD_REQUEST);
        assert_eq!(FibError::NegativeNth.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            FibError::Calculation(String::new()).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_into_response_sets_status() {
        let resp = FibError::NegativeNth.into_response();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }
}

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use tracing::error;

use crate::users::store::StoreError;

/// Terminal error type for every handler and extractor.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Malformed input; one message per violated rule.
    #[error("validation failed")]
    Validation(Vec<String>),
    /// Failed authentication; deliberately non-specific.
    #[error("{0}")]
    Auth(String),
    /// The request cannot be served as sent.
    #[error("{0}")]
    BadRequest(String),
    /// Anything unexpected; details are logged, not exposed.
    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::DuplicateEmail => {
                ApiError::Validation(vec!["Email already exists".to_string()])
            }
            other => ApiError::Internal(other.into()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, errors) = match self {
            ApiError::Validation(messages) => (StatusCode::BAD_REQUEST, messages),
            ApiError::Auth(message) | ApiError::BadRequest(message) => {
                (StatusCode::BAD_REQUEST, vec![message])
            }
            ApiError::Internal(err) => {
                error!(error = %err, "unhandled error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    vec!["Internal server error".to_string()],
                )
            }
        };
        (status, Json(json!({ "errors": errors }))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_client_error_maps_to_400() {
        let cases = [
            ApiError::Validation(vec!["Email is required".into()]),
            ApiError::Auth("Invalid login or password".into()),
            ApiError::BadRequest("Bad request".into()),
        ];
        for case in cases {
            assert_eq!(case.into_response().status(), StatusCode::BAD_REQUEST);
        }
    }

    #[test]
    fn unexpected_failures_map_to_500() {
        let err = ApiError::Internal(anyhow::anyhow!("store exploded"));
        assert_eq!(
            err.into_response().status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn duplicate_email_surfaces_as_a_validation_error() {
        match ApiError::from(StoreError::DuplicateEmail) {
            ApiError::Validation(messages) => assert_eq!(messages, vec!["Email already exists"]),
            other => panic!("expected a validation error, got {other:?}"),
        }
    }
}

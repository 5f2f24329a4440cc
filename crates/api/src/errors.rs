use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use doh_relay_domain::DomainError;
use serde_json::json;

/// Maps domain errors onto the gateway's HTTP contract. Validation failures
/// stay 4xx so callers can tell their own mistakes apart from upstream
/// trouble.
pub struct ApiError(pub DomainError);

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self.0 {
            DomainError::InvalidDomainName(_) | DomainError::InvalidRecordType(_) => {
                StatusCode::BAD_REQUEST
            }

            DomainError::UpstreamHttpStatus { .. } => StatusCode::BAD_GATEWAY,

            DomainError::TransportTimeout { .. }
            | DomainError::TransportConnectionFailed { .. } => StatusCode::SERVICE_UNAVAILABLE,

            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };

        (status, Json(json!({ "detail": self.0.to_string() }))).into_response()
    }
}

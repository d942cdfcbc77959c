use leptos::*;
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const GENERIC_REQUEST_FAILURE: &str = "API request failed";

/// Error type shared by every fallible frontend operation.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
pub enum ApiError {
    /// Credential exchange, signup or profile fetch was rejected.
    #[error("{0}")]
    Auth(String),
    /// A call that needs a bearer token was made without a session.
    #[error("No authentication token found")]
    Unauthenticated,
    /// The backend answered with a non-success status.
    #[error("{message}")]
    RequestFailed { status: u16, message: String },
    #[error("Request failed: {0}")]
    Network(String),
    #[error("Failed to parse response: {0}")]
    Parse(String),
    #[error("Storage unavailable: {0}")]
    Storage(String),
    #[error("{0}")]
    Validation(String),
}

impl ApiError {
    pub fn auth(msg: impl Into<String>) -> Self {
        Self::Auth(msg.into())
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn storage(msg: impl Into<String>) -> Self {
        Self::Storage(msg.into())
    }

    /// Builds a `RequestFailed` from the raw response text, falling back to a
    /// generic message when the body is blank.
    pub fn request_failed(status: u16, body: impl Into<String>) -> Self {
        let body = body.into();
        let message = if body.trim().is_empty() {
            GENERIC_REQUEST_FAILURE.to_string()
        } else {
            body
        };
        Self::RequestFailed { status, message }
    }

    pub fn code(&self) -> &'static str {
        match self {
            ApiError::Auth(_) => "AUTH_ERROR",
            ApiError::Unauthenticated => "UNAUTHENTICATED",
            ApiError::RequestFailed { .. } => "REQUEST_FAILED",
            ApiError::Network(_) => "NETWORK_ERROR",
            ApiError::Parse(_) => "PARSE_ERROR",
            ApiError::Storage(_) => "STORAGE_ERROR",
            ApiError::Validation(_) => "VALIDATION_ERROR",
        }
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::RequestFailed { status, .. } => Some(*status),
            _ => None,
        }
    }
}

impl From<ApiError> for String {
    fn from(error: ApiError) -> Self {
        error.to_string()
    }
}

impl IntoView for ApiError {
    fn into_view(self) -> View {
        self.to_string().into_view()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_failed_keeps_server_text() {
        let err = ApiError::request_failed(409, "Request already approved");
        assert_eq!(err.to_string(), "Request already approved");
        assert_eq!(err.status(), Some(409));
        assert_eq!(err.code(), "REQUEST_FAILED");
    }

    #[test]
    fn request_failed_falls_back_to_generic_message() {
        let err = ApiError::request_failed(500, "   ");
        assert_eq!(err.to_string(), GENERIC_REQUEST_FAILURE);
    }

    #[test]
    fn resource_results_round_trip_through_json() {
        let result: Result<Vec<u32>, ApiError> = Err(ApiError::request_failed(403, "Admins only"));
        let encoded = serde_json::to_string(&result).unwrap();
        let decoded: Result<Vec<u32>, ApiError> = serde_json::from_str(&encoded).unwrap();
        assert_eq!(decoded, result);
    }

    #[test]
    fn unauthenticated_has_user_facing_message() {
        assert_eq!(
            ApiError::Unauthenticated.to_string(),
            "No authentication token found"
        );
        assert_eq!(ApiError::Unauthenticated.status(), None);
    }
}

//! Failure taxonomy for REST calls.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use super::types::ErrorBody;

/// Error returned by every function in [`crate::net::api`].
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// 401/403: the caller must log in (again).
    #[error("authentication required ({0})")]
    Unauthorized(u16),
    /// Any other non-success status.
    #[error("request failed: {0}")]
    Status(u16),
    /// Non-success status with a server-provided explanation.
    #[error("{message}")]
    Rejected { status: u16, message: String },
    /// The request never produced a response.
    #[error("network error: {0}")]
    Network(String),
    /// The response body did not match the expected shape.
    #[error("invalid response: {0}")]
    Decode(String),
    /// Called outside the browser.
    #[error("not available outside the browser")]
    Unavailable,
}

impl ApiError {
    /// Classify a non-success HTTP status.
    pub fn from_status(status: u16) -> Self {
        match status {
            401 | 403 => Self::Unauthorized(status),
            _ => Self::Status(status),
        }
    }

    /// True when the right reaction is a redirect to the login page.
    pub fn requires_login(&self) -> bool {
        matches!(self, Self::Unauthorized(_))
    }

    /// True when the server answered (as opposed to a transport failure).
    pub fn is_http_status(&self) -> bool {
        matches!(self, Self::Unauthorized(_) | Self::Status(_) | Self::Rejected { .. })
    }
}

#[cfg(feature = "csr")]
impl From<gloo_net::Error> for ApiError {
    fn from(err: gloo_net::Error) -> Self {
        match err {
            gloo_net::Error::SerdeError(e) => Self::Decode(e.to_string()),
            other => Self::Network(other.to_string()),
        }
    }
}

/// Classify a failed response from its status and (optional) error body.
pub fn failure_from_response(status: u16, body: Option<ErrorBody>) -> ApiError {
    match ApiError::from_status(status) {
        ApiError::Status(status) => match body.and_then(ErrorBody::into_message) {
            Some(message) => ApiError::Rejected { status, message },
            None => ApiError::Status(status),
        },
        auth => auth,
    }
}

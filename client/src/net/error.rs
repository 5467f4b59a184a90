//! Error type for REST calls against the donation API.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use super::types::ErrorBody;

/// Failure of a single API request.
///
/// `Display` is what pages show to the user, so `Status` prefers the
/// server-supplied message over the bare status code.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    #[error("network error: {0}")]
    Transport(String),
    #[error("{}", status_text(.status, .message))]
    Status { status: u16, message: Option<String> },
    #[error("unexpected response: {0}")]
    Decode(String),
    #[error("not available on server")]
    Unavailable,
}

impl ApiError {
    /// Build a `Status` error from a non-2xx response body.
    ///
    /// Bodies that are not the API's `{ "message": ... }` shape, or carry a
    /// blank message, keep only the status code.
    #[must_use]
    pub fn from_status(status: u16, body: &str) -> Self {
        let message = serde_json::from_str::<ErrorBody>(body)
            .ok()
            .and_then(|b| b.message)
            .map(|m| m.trim().to_owned())
            .filter(|m| !m.is_empty());
        Self::Status { status, message }
    }

    /// True when the API rejected the credential.
    #[must_use]
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Status { status: 401, .. })
    }
}

#[allow(clippy::trivially_copy_pass_by_ref, clippy::ref_option)]
fn status_text(status: &u16, message: &Option<String>) -> String {
    match message {
        Some(message) => message.clone(),
        None => format!("request failed: {status}"),
    }
}

#[cfg(feature = "hydrate")]
impl From<gloo_net::Error> for ApiError {
    fn from(err: gloo_net::Error) -> Self {
        Self::Transport(err.to_string())
    }
}

//! Error type shared by every API call.
//!
//! Errors are never fatal to the UI: pages catch them at the call site and show
//! [`ApiError::user_message`] as a transient notice.

use thiserror::Error;

/// Failure of a request made through [`ApiClient`](super::ApiClient).
///
/// # Error Categories
/// - Session errors (no stored token, token rejected by the backend)
/// - Validation errors (blank required fields, caught before any request is sent)
/// - Transport errors (no response from the server)
/// - HTTP errors (non-success status, with the backend's message when it sent one)
/// - Encoding errors (request body or response body could not be (de)serialized)
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ApiError {
    /// No admin token is stored; the request was not sent.
    #[error("No token found, redirecting to login")]
    NotAuthenticated,
    /// The backend answered 401; the stored token has been discarded.
    #[error("Session expired. Please log in again.")]
    SessionExpired,
    /// A required field was blank; the request was not sent.
    #[error("{0}")]
    Validation(String),
    /// The request never produced a response.
    #[error("Error connecting to the server: {0}")]
    Network(String),
    /// The backend answered with a non-success status.
    #[error("Request failed with status {status}: {message}")]
    Http { status: u16, message: String },
    /// The response body did not match the expected shape.
    #[error("Failed to parse response: {0}")]
    Parse(String),
    /// The request body could not be encoded.
    #[error("Failed to encode request: {0}")]
    Serialization(String),
}

impl ApiError {
    /// Message suitable for a toast.
    ///
    /// HTTP errors show the backend's message alone; transport details are logged, not shown.
    pub fn user_message(&self) -> String {
        match self {
            Self::Http { message, .. } => message.clone(),
            Self::Network(_) => "Error connecting to the server".to_string(),
            err => err.to_string(),
        }
    }

    /// Whether the error ended the admin session
    pub fn is_session_error(&self) -> bool {
        matches!(self, Self::NotAuthenticated | Self::SessionExpired)
    }
}

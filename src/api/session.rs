//! Session-end notifications.
//!
//! The API layer cannot navigate; it reports why an admin session ended and the UI layer
//! redirects to the login page and shows the notice.

/// Why the wrapper refused or aborted an authenticated request
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionEnd {
    /// No token was stored when an admin request was attempted
    MissingToken,
    /// The backend rejected the stored token with 401
    Expired,
}

impl SessionEnd {
    pub fn notice(self) -> &'static str {
        match self {
            Self::MissingToken => "Please log in to continue.",
            Self::Expired => "Session expired. Please log in again.",
        }
    }
}

/// Receives session-end events from [`ApiClient`](super::ApiClient)
pub trait SessionListener {
    fn session_ended(&self, reason: SessionEnd);
}

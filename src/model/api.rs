use serde::{Deserialize, Serialize};

/// The body the backend returns alongside a failed request
///
/// Most endpoints report failures under `message`; a few older handlers use `error`.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct ErrorDto {
    /// The error message
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    /// Legacy error field
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ErrorDto {
    /// The first non-empty message carried by the body, if any
    pub fn into_message(self) -> Option<String> {
        self.message
            .into_iter()
            .chain(self.error)
            .map(|message| message.trim().to_string())
            .find(|message| !message.is_empty())
    }
}

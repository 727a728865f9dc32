//! Build-time API configuration.
//!
//! The backend base URL is baked in from `FAQDESK_API_BASE_URL` when the crate is compiled and
//! falls back to the local development backend. Values are public; do not put secrets here.

/// Backend used when `FAQDESK_API_BASE_URL` is not set at build time
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:3000";

#[derive(Clone, Debug, PartialEq)]
pub struct ApiConfig {
    pub api_base_url: String,
}

impl ApiConfig {
    pub fn new(api_base_url: impl Into<String>) -> Self {
        Self {
            api_base_url: normalize_base_url(&api_base_url.into()),
        }
    }

    /// Loads config from build-time environment variables
    pub fn load() -> Self {
        let base_url = option_env!("FAQDESK_API_BASE_URL")
            .filter(|value| !value.trim().is_empty())
            .unwrap_or(DEFAULT_API_BASE_URL);

        Self::new(base_url)
    }

    /// Joins the base URL and a path with exactly one slash between them
    pub fn url(&self, path: &str) -> String {
        let path = path.trim();

        if self.api_base_url.is_empty() {
            path.to_string()
        } else {
            format!("{}/{}", self.api_base_url, path.trim_start_matches('/'))
        }
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::load()
    }
}

fn normalize_base_url(value: &str) -> String {
    value.trim().trim_end_matches('/').to_string()
}

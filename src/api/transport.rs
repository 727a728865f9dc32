//! The HTTP seam under [`ApiClient`](super::ApiClient).
//!
//! Requests and responses are plain values so the client's header and status handling does not
//! depend on which HTTP library sends them: `reqwasm` in the browser, `reqwest` everywhere else.

use serde::de::DeserializeOwned;

use crate::{api::ApiError, model::api::ErrorDto};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Patch,
    Delete,
}

impl Method {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Patch => "PATCH",
            Self::Delete => "DELETE",
        }
    }
}

/// A fully built request, headers included
#[derive(Clone, Debug, PartialEq)]
pub struct ApiRequest {
    pub method: Method,
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
}

impl ApiRequest {
    /// Value of a header, matched case-insensitively
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }
}

/// Raw response handed back to callers: status plus body text
#[derive(Clone, Debug, PartialEq)]
pub struct ApiResponse {
    pub status: u16,
    pub body: String,
}

impl ApiResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    pub fn json<T: DeserializeOwned>(&self) -> Result<T, ApiError> {
        serde_json::from_str(&self.body)
            .map_err(|e| ApiError::Parse(format!("Failed to decode response: {}", e)))
    }

    /// The backend's error message, or `fallback` when the body carries none
    pub fn error_message(&self, fallback: &str) -> String {
        serde_json::from_str::<ErrorDto>(&self.body)
            .ok()
            .and_then(ErrorDto::into_message)
            .unwrap_or_else(|| fallback.to_string())
    }

    /// Passes success responses through, turns anything else into [`ApiError::Http`]
    pub fn ensure_success(self, fallback: &str) -> Result<Self, ApiError> {
        if self.is_success() {
            Ok(self)
        } else {
            Err(ApiError::Http {
                status: self.status,
                message: self.error_message(fallback),
            })
        }
    }
}

/// Sends a request and reports the status and body, or a transport failure
///
/// Non-success statuses are not errors at this level.
#[allow(async_fn_in_trait)]
pub trait HttpTransport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, ApiError>;
}

#[cfg(target_arch = "wasm32")]
pub type PlatformTransport = ReqwasmTransport;
#[cfg(not(target_arch = "wasm32"))]
pub type PlatformTransport = ReqwestTransport;

#[cfg(target_arch = "wasm32")]
pub use browser::ReqwasmTransport;
#[cfg(not(target_arch = "wasm32"))]
pub use native::ReqwestTransport;

#[cfg(target_arch = "wasm32")]
mod browser {
    use reqwasm::http::{Method as FetchMethod, Request};

    use super::{ApiRequest, ApiResponse, HttpTransport, Method};
    use crate::api::ApiError;

    /// Transport using the browser's `fetch`
    #[derive(Clone, Copy, Debug, Default)]
    pub struct ReqwasmTransport;

    impl HttpTransport for ReqwasmTransport {
        async fn send(&self, request: ApiRequest) -> Result<ApiResponse, ApiError> {
            let method = match request.method {
                Method::Get => FetchMethod::GET,
                Method::Post => FetchMethod::POST,
                Method::Patch => FetchMethod::PATCH,
                Method::Delete => FetchMethod::DELETE,
            };

            let mut builder = Request::new(&request.url).method(method);
            for (name, value) in &request.headers {
                builder = builder.header(name, value);
            }
            if let Some(body) = request.body {
                builder = builder.body(body);
            }

            let response = builder
                .send()
                .await
                .map_err(|e| ApiError::Network(format!("Failed to send request: {}", e)))?;

            let status = response.status();
            let body = response
                .text()
                .await
                .map_err(|e| ApiError::Network(format!("Failed to read response: {}", e)))?;

            Ok(ApiResponse { status, body })
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
mod native {
    use super::{ApiRequest, ApiResponse, HttpTransport, Method};
    use crate::api::ApiError;

    /// Transport for desktop builds and tests
    #[derive(Clone, Debug, Default)]
    pub struct ReqwestTransport {
        client: reqwest::Client,
    }

    impl ReqwestTransport {
        pub fn new(client: reqwest::Client) -> Self {
            Self { client }
        }
    }

    impl HttpTransport for ReqwestTransport {
        async fn send(&self, request: ApiRequest) -> Result<ApiResponse, ApiError> {
            let method = match request.method {
                Method::Get => reqwest::Method::GET,
                Method::Post => reqwest::Method::POST,
                Method::Patch => reqwest::Method::PATCH,
                Method::Delete => reqwest::Method::DELETE,
            };

            let mut builder = self.client.request(method, &request.url);
            for (name, value) in &request.headers {
                builder = builder.header(name.as_str(), value.as_str());
            }
            if let Some(body) = request.body {
                builder = builder.body(body);
            }

            let response = builder
                .send()
                .await
                .map_err(|e| ApiError::Network(format!("Failed to send request: {}", e)))?;

            let status = response.status().as_u16();
            let body = response
                .text()
                .await
                .map_err(|e| ApiError::Network(format!("Failed to read response: {}", e)))?;

            Ok(ApiResponse { status, body })
        }
    }
}

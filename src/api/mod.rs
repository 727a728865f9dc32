//! HTTP access to the FAQ backend.
//!
//! Every request the application makes goes through [`ApiClient`]: public reads and login via
//! [`ApiClient::fetch_public`], admin mutations via [`ApiClient::fetch_with_auth`], which attaches
//! the stored bearer token and ends the session when the backend answers 401. Both return the
//! same [`ApiError`] so pages handle failures one way.

pub mod client;
pub mod config;
pub mod error;
pub mod session;
pub mod token;
pub mod transport;

pub use client::{ApiClient, RequestOptions};
pub use config::ApiConfig;
pub use error::ApiError;
pub use session::{SessionEnd, SessionListener};
pub use token::{platform_token_store, MemoryTokenStore, TokenStore, TOKEN_STORAGE_KEY};
pub use transport::{ApiRequest, ApiResponse, HttpTransport, Method, PlatformTransport};

#[cfg(not(target_arch = "wasm32"))]
pub use transport::ReqwestTransport;
#[cfg(target_arch = "wasm32")]
pub use transport::ReqwasmTransport;

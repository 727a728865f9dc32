use std::rc::Rc;

use dioxus_logger::tracing;
use serde::Serialize;

use crate::{
    api::{
        config::ApiConfig,
        error::ApiError,
        session::{SessionEnd, SessionListener},
        token::TokenStore,
        transport::{ApiRequest, ApiResponse, HttpTransport, Method, PlatformTransport},
    },
    model::{
        auth::{Credentials, LoginResponse},
        faq::{Faq, FaqDraft, FaqId, Language},
    },
};

/// Method, body and extra headers for a single request
#[derive(Clone, Debug, PartialEq)]
pub struct RequestOptions {
    pub method: Method,
    pub body: Option<String>,
    pub headers: Vec<(String, String)>,
}

impl Default for RequestOptions {
    fn default() -> Self {
        Self::new(Method::Get)
    }
}

impl RequestOptions {
    pub fn new(method: Method) -> Self {
        Self {
            method,
            body: None,
            headers: Vec::new(),
        }
    }

    /// Encodes `body` as the JSON request body
    pub fn json<B: Serialize>(mut self, body: &B) -> Result<Self, ApiError> {
        let body = serde_json::to_string(body)
            .map_err(|e| ApiError::Serialization(e.to_string()))?;
        self.body = Some(body);
        Ok(self)
    }

    /// Adds a header; it overrides a default header of the same name
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }
}

/// Client for the FAQ backend
///
/// Cloning is cheap; clones share the token store and session listener.
#[derive(Clone)]
pub struct ApiClient<T = PlatformTransport> {
    config: ApiConfig,
    transport: T,
    tokens: Rc<dyn TokenStore>,
    listener: Option<Rc<dyn SessionListener>>,
}

impl<T: HttpTransport> ApiClient<T> {
    pub fn new(config: ApiConfig, transport: T, tokens: Rc<dyn TokenStore>) -> Self {
        Self {
            config,
            transport,
            tokens,
            listener: None,
        }
    }

    /// Registers the hook told when the wrapper ends an admin session
    pub fn with_session_listener(mut self, listener: Rc<dyn SessionListener>) -> Self {
        self.listener = Some(listener);
        self
    }

    pub fn is_logged_in(&self) -> bool {
        self.tokens.get().is_some()
    }

    /// Sends a request carrying the stored admin token
    ///
    /// Without a stored token nothing is sent: the listener is told [`SessionEnd::MissingToken`]
    /// and [`ApiError::NotAuthenticated`] is returned. A 401 response clears the token, tells the
    /// listener [`SessionEnd::Expired`] and returns [`ApiError::SessionExpired`]. Any other
    /// response is returned as-is for the caller to interpret.
    pub async fn fetch_with_auth(
        &self,
        path: &str,
        options: RequestOptions,
    ) -> Result<ApiResponse, ApiError> {
        let Some(token) = self.tokens.get() else {
            tracing::debug!(path = %path, "No admin token stored, request not sent");
            self.end_session(SessionEnd::MissingToken);
            return Err(ApiError::NotAuthenticated);
        };

        let request = self.build_request(path, options, Some(&token));
        let response = self.transport.send(request).await?;

        if response.status == 401 {
            tracing::warn!(path = %path, "Admin token rejected, clearing session");
            self.tokens.clear();
            self.end_session(SessionEnd::Expired);
            return Err(ApiError::SessionExpired);
        }

        Ok(response)
    }

    /// Sends a request without credentials
    pub async fn fetch_public(
        &self,
        path: &str,
        options: RequestOptions,
    ) -> Result<ApiResponse, ApiError> {
        let request = self.build_request(path, options, None);
        self.transport.send(request).await
    }

    /// Lists FAQs, translated to `language` when one other than English is selected
    pub async fn list_faqs(&self, language: Option<Language>) -> Result<Vec<Faq>, ApiError> {
        let path = format!("/api/faqs/fetchall{}", Language::query(language));

        self.fetch_public(&path, RequestOptions::default())
            .await?
            .ensure_success("Failed to fetch FAQs")?
            .json()
    }

    pub async fn get_faq(&self, id: &FaqId, language: Option<Language>) -> Result<Faq, ApiError> {
        let path = format!(
            "/api/faqs/{}{}",
            id.path_segment(),
            Language::query(language)
        );

        self.fetch_public(&path, RequestOptions::default())
            .await?
            .ensure_success("Failed to fetch FAQ")?
            .json()
    }

    pub async fn create_faq(&self, draft: &FaqDraft) -> Result<(), ApiError> {
        draft.validate()?;

        let options = RequestOptions::new(Method::Post).json(draft)?;
        self.fetch_with_auth("/api/admin/createfaq", options)
            .await?
            .ensure_success("Failed to create FAQ")?;

        Ok(())
    }

    pub async fn update_faq(&self, id: &FaqId, draft: &FaqDraft) -> Result<(), ApiError> {
        draft.validate()?;

        let options = RequestOptions::new(Method::Patch).json(draft)?;
        self.fetch_with_auth(&format!("/api/admin/updatefaq/{}", id.path_segment()), options)
            .await?
            .ensure_success("Failed to update FAQ")?;

        Ok(())
    }

    pub async fn delete_faq(&self, id: &FaqId) -> Result<(), ApiError> {
        self.fetch_with_auth(
            &format!("/api/admin/deletefaq/{}", id.path_segment()),
            RequestOptions::new(Method::Delete),
        )
        .await?
        .ensure_success("Failed to delete FAQ")?;

        Ok(())
    }

    /// Exchanges credentials for an admin token and stores it
    pub async fn login(&self, credentials: &Credentials) -> Result<(), ApiError> {
        if !credentials.is_complete() {
            return Err(ApiError::Validation(
                "Email and password are required".to_string(),
            ));
        }

        let options = RequestOptions::new(Method::Post).json(credentials)?;
        let login: LoginResponse = self
            .fetch_public("/adminlogin", options)
            .await?
            .ensure_success("Login failed")?
            .json()?;

        let token = login
            .access_token
            .filter(|token| !token.is_empty())
            .ok_or_else(|| ApiError::Parse("Login response did not include a token".to_string()))?;

        self.tokens.set(&token);
        tracing::info!("Admin logged in");

        Ok(())
    }

    pub fn logout(&self) {
        self.tokens.clear();
    }

    fn end_session(&self, reason: SessionEnd) {
        if let Some(listener) = &self.listener {
            listener.session_ended(reason);
        }
    }

    fn build_request(&self, path: &str, options: RequestOptions, token: Option<&str>) -> ApiRequest {
        let mut headers = vec![(
            "Content-Type".to_string(),
            "application/json".to_string(),
        )];
        if let Some(token) = token {
            headers.push(("Authorization".to_string(), format!("Bearer {}", token)));
        }

        for (name, value) in options.headers {
            headers.retain(|(existing, _)| !existing.eq_ignore_ascii_case(&name));
            headers.push((name, value));
        }

        tracing::debug!(method = options.method.as_str(), path = %path, "Sending API request");

        ApiRequest {
            method: options.method,
            url: self.config.url(path),
            headers,
            body: options.body,
        }
    }
}

use dioxus_logger::tracing;

use crate::{
    api::{ApiClient, ApiError, HttpTransport},
    model::auth::Credentials,
};

/// Shown for every failed login, whatever the backend reported
pub const LOGIN_FAILED: &str = "Login failed! Please try again.";

pub struct AuthService<'a, T> {
    api: &'a ApiClient<T>,
}

impl<'a, T: HttpTransport> AuthService<'a, T> {
    /// Creates a new instance of [`AuthService`]
    pub fn new(api: &'a ApiClient<T>) -> Self {
        Self { api }
    }

    /// Logs the admin in and stores the issued token
    pub async fn login(&self, email: &str, password: &str) -> Result<(), ApiError> {
        let credentials = Credentials::new(email.trim(), password);

        if let Err(err) = self.api.login(&credentials).await {
            tracing::warn!("Login failed: {}", err);
            return Err(err);
        }

        Ok(())
    }

    pub fn logout(&self) {
        self.api.logout();
        tracing::info!("Admin logged out");
    }

    pub fn is_logged_in(&self) -> bool {
        self.api.is_logged_in()
    }
}

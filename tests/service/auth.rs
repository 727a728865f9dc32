//! Tests for AuthService.

use faqdesk::service::AuthService;

use super::*;

/// Expect a successful login to leave the admin logged in
#[tokio::test]
async fn login_then_logout() -> Result<(), TestError> {
    let mut test = TestBuilder::new().build().await?;
    let endpoint = test
        .with_login_endpoint("admin@example.com", "hunter2", "fresh-token", 1)
        .await;

    let auth = AuthService::new(&test.api);
    auth.login("  admin@example.com ", "hunter2").await?;
    assert!(auth.is_logged_in());

    auth.logout();
    assert!(!auth.is_logged_in());
    assert!(test.token().is_none());
    endpoint.assert_async().await;

    Ok(())
}

/// Expect a failed login to leave the admin logged out
#[tokio::test]
async fn failed_login_keeps_logged_out() -> Result<(), TestError> {
    let mut test = TestBuilder::new().build().await?;
    let endpoint = test
        .with_status_endpoint("POST", "/adminlogin", 400, r#"{"message":"Bad request"}"#, 1)
        .await;

    let auth = AuthService::new(&test.api);
    let result = auth.login("admin@example.com", "nope").await;

    assert!(result.is_err());
    assert!(!auth.is_logged_in());
    endpoint.assert_async().await;

    Ok(())
}

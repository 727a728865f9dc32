//! Tests for the authenticated request wrapper.
//!
//! These verify that admin requests carry the stored bearer token, that nothing is sent without
//! one, and that a 401 ends the session exactly once while other statuses reach the caller.

use faqdesk::api::{ApiError, Method, RequestOptions, SessionEnd};
use mockito::Matcher;

use super::*;

/// Expect NotAuthenticated without a request when no token is stored
#[tokio::test]
async fn no_token_sends_no_request() -> Result<(), TestError> {
    let mut test = TestBuilder::new().build().await?;
    let endpoint = test
        .with_status_endpoint("DELETE", "/api/admin/deletefaq/1", 200, "{}", 0)
        .await;

    let result = test
        .api
        .fetch_with_auth("/api/admin/deletefaq/1", RequestOptions::new(Method::Delete))
        .await;

    assert_eq!(result, Err(ApiError::NotAuthenticated));
    assert_eq!(test.session_events(), vec![SessionEnd::MissingToken]);
    endpoint.assert_async().await;

    Ok(())
}

/// Expect bearer and JSON headers on authenticated requests
#[tokio::test]
async fn attaches_token_and_content_type() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_token("admin-token").build().await?;
    let endpoint = test
        .server
        .mock("POST", "/api/admin/createfaq")
        .match_header("authorization", "Bearer admin-token")
        .match_header("content-type", "application/json")
        .with_status(201)
        .expect(1)
        .create_async()
        .await;

    let response = test
        .api
        .fetch_with_auth("/api/admin/createfaq", RequestOptions::new(Method::Post))
        .await?;

    assert_eq!(response.status, 201);
    assert!(test.session_events().is_empty());
    endpoint.assert_async().await;

    Ok(())
}

/// Expect caller-supplied headers to be sent alongside the defaults
#[tokio::test]
async fn forwards_caller_headers() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_token("admin-token").build().await?;
    let endpoint = test
        .server
        .mock("GET", "/api/admin/stats")
        .match_header("x-request-source", "admin-board")
        .match_header("authorization", Matcher::Regex("^Bearer ".to_string()))
        .with_status(200)
        .expect(1)
        .create_async()
        .await;

    let options = RequestOptions::default().header("X-Request-Source", "admin-board");
    test.api.fetch_with_auth("/api/admin/stats", options).await?;

    endpoint.assert_async().await;

    Ok(())
}

/// Expect the token to be cleared and a single session-expired event on 401
#[tokio::test]
async fn unauthorized_clears_token_and_redirects_once() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_token("expired-token").build().await?;
    let endpoint = test
        .with_status_endpoint(
            "PATCH",
            "/api/admin/updatefaq/7",
            401,
            r#"{"message":"jwt expired"}"#,
            1,
        )
        .await;

    let result = test
        .api
        .fetch_with_auth("/api/admin/updatefaq/7", RequestOptions::new(Method::Patch))
        .await;

    assert_eq!(result, Err(ApiError::SessionExpired));
    assert!(test.token().is_none());
    assert_eq!(test.session_events(), vec![SessionEnd::Expired]);
    endpoint.assert_async().await;

    Ok(())
}

/// Expect a second admin request after a 401 to be refused locally
#[tokio::test]
async fn request_after_expiry_is_not_sent() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_token("expired-token").build().await?;
    let endpoint = test
        .with_status_endpoint("DELETE", "/api/admin/deletefaq/7", 401, "{}", 1)
        .await;

    let first = test
        .api
        .fetch_with_auth("/api/admin/deletefaq/7", RequestOptions::new(Method::Delete))
        .await;
    let second = test
        .api
        .fetch_with_auth("/api/admin/deletefaq/7", RequestOptions::new(Method::Delete))
        .await;

    assert_eq!(first, Err(ApiError::SessionExpired));
    assert_eq!(second, Err(ApiError::NotAuthenticated));
    assert_eq!(
        test.session_events(),
        vec![SessionEnd::Expired, SessionEnd::MissingToken]
    );
    endpoint.assert_async().await;

    Ok(())
}

/// Expect non-401 error statuses to be returned to the caller untouched
#[tokio::test]
async fn other_statuses_reach_the_caller() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_token("admin-token").build().await?;
    let endpoint = test
        .with_status_endpoint(
            "DELETE",
            "/api/admin/deletefaq/7",
            404,
            r#"{"message":"FAQ not found"}"#,
            1,
        )
        .await;

    let response = test
        .api
        .fetch_with_auth("/api/admin/deletefaq/7", RequestOptions::new(Method::Delete))
        .await?;

    assert_eq!(response.status, 404);
    assert_eq!(response.error_message("fallback"), "FAQ not found");
    assert_eq!(test.token().as_deref(), Some("admin-token"));
    assert!(test.session_events().is_empty());
    endpoint.assert_async().await;

    Ok(())
}

/// Expect a Network error when the backend cannot be reached
#[tokio::test]
async fn unreachable_backend_is_a_network_error() -> Result<(), TestError> {
    use std::rc::Rc;

    use faqdesk::api::{ApiClient, ApiConfig, MemoryTokenStore, ReqwestTransport, TokenStore};

    let tokens = MemoryTokenStore::with_token("admin-token");
    // Port 9 (discard) is not expected to accept HTTP connections.
    let api = ApiClient::new(
        ApiConfig::new("http://127.0.0.1:9"),
        ReqwestTransport::default(),
        Rc::new(tokens.clone()),
    );

    let result = api
        .fetch_with_auth("/api/admin/createfaq", RequestOptions::new(Method::Post))
        .await;

    assert!(matches!(result, Err(ApiError::Network(_))));
    assert!(tokens.get().is_some());

    Ok(())
}

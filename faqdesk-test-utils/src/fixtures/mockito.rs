use faqdesk::model::faq::{Faq, FaqDraft, FaqId, Language};
use mockito::{Matcher, Mock, ServerGuard};
use serde_json::json;

fn lang_matcher(language: Option<Language>) -> Matcher {
    match language {
        None | Some(Language::English) => Matcher::Any,
        Some(language) => Matcher::UrlEncoded("lang".to_string(), language.code().to_string()),
    }
}

fn bearer() -> Matcher {
    Matcher::Regex("^Bearer .+$".to_string())
}

/// Create a mock FAQ list endpoint
pub async fn mock_list_endpoint(
    server: &mut ServerGuard,
    language: Option<Language>,
    faqs: &[Faq],
    expected_requests: usize,
) -> Mock {
    server
        .mock("GET", "/api/faqs/fetchall")
        .match_query(lang_matcher(language))
        .match_header("authorization", Matcher::Missing)
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(json!(faqs).to_string())
        .expect(expected_requests)
        .create_async()
        .await
}

/// Create a mock single-FAQ endpoint
pub async fn mock_detail_endpoint(
    server: &mut ServerGuard,
    language: Option<Language>,
    faq: &Faq,
    expected_requests: usize,
) -> Mock {
    server
        .mock("GET", format!("/api/faqs/{}", faq.id.path_segment()).as_str())
        .match_query(lang_matcher(language))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(json!(faq).to_string())
        .expect(expected_requests)
        .create_async()
        .await
}

/// Create a mock FAQ creation endpoint expecting `draft` as the body
pub async fn mock_create_endpoint(
    server: &mut ServerGuard,
    draft: &FaqDraft,
    status: usize,
    expected_requests: usize,
) -> Mock {
    server
        .mock("POST", "/api/admin/createfaq")
        .match_header("authorization", bearer())
        .match_header("content-type", "application/json")
        .match_body(Matcher::Json(json!(draft)))
        .with_status(status)
        .with_header("content-type", "application/json")
        .with_body(json!({ "message": "FAQ created" }).to_string())
        .expect(expected_requests)
        .create_async()
        .await
}

/// Create a mock FAQ update endpoint for `id` expecting `draft` as the body
pub async fn mock_update_endpoint(
    server: &mut ServerGuard,
    id: &FaqId,
    draft: &FaqDraft,
    status: usize,
    expected_requests: usize,
) -> Mock {
    server
        .mock("PATCH", format!("/api/admin/updatefaq/{}", id.path_segment()).as_str())
        .match_header("authorization", bearer())
        .match_body(Matcher::Json(json!(draft)))
        .with_status(status)
        .with_header("content-type", "application/json")
        .with_body(json!({ "message": "FAQ updated" }).to_string())
        .expect(expected_requests)
        .create_async()
        .await
}

/// Create a mock FAQ deletion endpoint for `id`
pub async fn mock_delete_endpoint(
    server: &mut ServerGuard,
    id: &FaqId,
    status: usize,
    expected_requests: usize,
) -> Mock {
    server
        .mock("DELETE", format!("/api/admin/deletefaq/{}", id.path_segment()).as_str())
        .match_header("authorization", bearer())
        .with_status(status)
        .with_header("content-type", "application/json")
        .with_body(json!({ "message": "FAQ deleted" }).to_string())
        .expect(expected_requests)
        .create_async()
        .await
}

/// Create a mock admin login endpoint answering with `access_token`
pub async fn mock_login_endpoint(
    server: &mut ServerGuard,
    email: &str,
    password: &str,
    access_token: &str,
    expected_requests: usize,
) -> Mock {
    server
        .mock("POST", "/adminlogin")
        .match_header("authorization", Matcher::Missing)
        .match_body(Matcher::Json(json!({ "email": email, "password": password })))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(json!({ "accessToken": access_token }).to_string())
        .expect(expected_requests)
        .create_async()
        .await
}

/// Create a mock endpoint answering every `method` request to `path` with `status` and `body`
pub async fn mock_status_endpoint(
    server: &mut ServerGuard,
    method: &str,
    path: &str,
    status: usize,
    body: &str,
    expected_requests: usize,
) -> Mock {
    server
        .mock(method, path)
        .match_query(Matcher::Any)
        .with_status(status)
        .with_header("content-type", "application/json")
        .with_body(body)
        .expect(expected_requests)
        .create_async()
        .await
}

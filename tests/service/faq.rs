//! Tests for FaqService submit and delete flows.
//!
//! Each mutation is followed by a list refresh; the mock list endpoint stands in for the
//! backend's state after the mutation.

use faqdesk::{
    api::{ApiError, SessionEnd},
    model::{
        faq::{FaqDraft, FaqId},
        form::FaqForm,
    },
    service::FaqService,
};

use super::*;

fn form(question: &str, answer: &str) -> FaqForm {
    FaqForm {
        question: question.to_string(),
        answer: answer.to_string(),
        editing: None,
    }
}

/// Expect a created FAQ to appear in the refreshed list
#[tokio::test]
async fn create_then_list_includes_entry() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_token("admin-token").build().await?;
    let draft = FaqDraft::new("Q1", "<p>A1</p>");
    let created = factory::faq("1", "Q1", "<p>A1</p>");
    let create_endpoint = test.with_create_endpoint(&draft, 201, 1).await;
    let list_endpoint = test.with_list_endpoint(None, &[created.clone()], 1).await;

    let update = FaqService::new(&test.api)
        .submit(&form("Q1", "<p>A1</p>"))
        .await?;

    assert_eq!(update.message, "FAQ created successfully");
    assert_eq!(update.faqs, Ok(vec![created]));
    create_endpoint.assert_async().await;
    list_endpoint.assert_async().await;

    Ok(())
}

/// Expect editing to update the same id and never create
#[tokio::test]
async fn edit_updates_same_id() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_token("admin-token").build().await?;
    let existing = factory::faq("42", "Old question", "<p>Old</p>");
    let mut form = FaqForm::edit(&existing);
    form.question = "New question".to_string();

    let draft = FaqDraft::new("New question", "<p>Old</p>");
    let update_endpoint = test.with_update_endpoint(&existing.id, &draft, 200, 1).await;
    let create_endpoint = test
        .with_status_endpoint("POST", "/api/admin/createfaq", 201, "{}", 0)
        .await;
    let updated = factory::faq("42", "New question", "<p>Old</p>");
    let list_endpoint = test.with_list_endpoint(None, &[updated.clone()], 1).await;

    let update = FaqService::new(&test.api).submit(&form).await?;

    assert_eq!(update.message, "FAQ updated successfully");
    assert_eq!(update.faqs, Ok(vec![updated]));
    update_endpoint.assert_async().await;
    create_endpoint.assert_async().await;
    list_endpoint.assert_async().await;

    Ok(())
}

/// Expect a deleted FAQ to be missing from the refreshed list
#[tokio::test]
async fn delete_removes_from_list() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_token("admin-token").build().await?;
    let kept = factory::faq("1", "Kept", "<p>Stays</p>");
    let removed = FaqId::new("2");
    let delete_endpoint = test.with_delete_endpoint(&removed, 200, 1).await;
    let list_endpoint = test.with_list_endpoint(None, &[kept.clone()], 1).await;

    let update = FaqService::new(&test.api).delete(&removed).await?;

    assert_eq!(update.message, "FAQ deleted successfully");
    let faqs = update.faqs?;
    assert!(faqs.iter().all(|faq| faq.id != removed));
    assert_eq!(faqs, vec![kept]);
    delete_endpoint.assert_async().await;
    list_endpoint.assert_async().await;

    Ok(())
}

/// Expect a created FAQ to count as created even when the list refresh fails
#[tokio::test]
async fn create_succeeds_when_refresh_fails() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_token("admin-token").build().await?;
    let draft = FaqDraft::new("Q1", "<p>A1</p>");
    let create_endpoint = test.with_create_endpoint(&draft, 201, 1).await;
    let list_endpoint = test
        .with_status_endpoint("GET", "/api/faqs/fetchall", 500, "{}", 1)
        .await;

    let update = FaqService::new(&test.api)
        .submit(&form("Q1", "<p>A1</p>"))
        .await?;

    assert_eq!(update.message, "FAQ created successfully");
    assert_eq!(
        update.faqs,
        Err(ApiError::Http {
            status: 500,
            message: "Failed to fetch FAQs".to_string()
        })
    );
    create_endpoint.assert_async().await;
    list_endpoint.assert_async().await;

    Ok(())
}

/// Expect a deleted FAQ to count as deleted even when the list refresh fails
#[tokio::test]
async fn delete_succeeds_when_refresh_fails() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_token("admin-token").build().await?;
    let id = FaqId::new("2");
    let delete_endpoint = test.with_delete_endpoint(&id, 200, 1).await;
    let list_endpoint = test
        .with_status_endpoint("GET", "/api/faqs/fetchall", 503, r#"{"error":"Database offline"}"#, 1)
        .await;

    let update = FaqService::new(&test.api).delete(&id).await?;

    assert_eq!(update.message, "FAQ deleted successfully");
    assert!(matches!(update.faqs, Err(ApiError::Http { status: 503, .. })));
    delete_endpoint.assert_async().await;
    list_endpoint.assert_async().await;

    Ok(())
}

/// Expect an empty question or answer to trigger no request at all
#[tokio::test]
async fn empty_form_sends_nothing() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_token("admin-token").build().await?;
    let create_endpoint = test
        .with_status_endpoint("POST", "/api/admin/createfaq", 201, "{}", 0)
        .await;
    let list_endpoint = test
        .with_status_endpoint("GET", "/api/faqs/fetchall", 200, "[]", 0)
        .await;

    let service = FaqService::new(&test.api);
    let no_question = service.submit(&form("", "<p>A1</p>")).await;
    let no_answer = service.submit(&form("Q1", "   ")).await;

    assert!(matches!(no_question, Err(ApiError::Validation(_))));
    assert!(matches!(no_answer, Err(ApiError::Validation(_))));
    create_endpoint.assert_async().await;
    list_endpoint.assert_async().await;

    Ok(())
}

/// Expect an expired session to stop the flow before the list refresh
#[tokio::test]
async fn expired_session_skips_refresh() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_token("expired-token").build().await?;
    let create_endpoint = test
        .with_status_endpoint("POST", "/api/admin/createfaq", 401, "{}", 1)
        .await;
    let list_endpoint = test
        .with_status_endpoint("GET", "/api/faqs/fetchall", 200, "[]", 0)
        .await;

    let result = FaqService::new(&test.api)
        .submit(&form("Q1", "<p>A1</p>"))
        .await;

    assert_eq!(result, Err(ApiError::SessionExpired));
    assert!(test.token().is_none());
    assert_eq!(test.session_events(), vec![SessionEnd::Expired]);
    create_endpoint.assert_async().await;
    list_endpoint.assert_async().await;

    Ok(())
}

/// Expect submit without a stored token to redirect without any request
#[tokio::test]
async fn submit_without_token_redirects() -> Result<(), TestError> {
    let mut test = TestBuilder::new().build().await?;
    let create_endpoint = test
        .with_status_endpoint("POST", "/api/admin/createfaq", 201, "{}", 0)
        .await;

    let result = FaqService::new(&test.api)
        .submit(&form("Q1", "<p>A1</p>"))
        .await;

    assert_eq!(result, Err(ApiError::NotAuthenticated));
    assert_eq!(test.session_events(), vec![SessionEnd::MissingToken]);
    create_endpoint.assert_async().await;

    Ok(())
}

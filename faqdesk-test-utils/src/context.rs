use std::rc::Rc;

use faqdesk::{
    api::{ApiClient, MemoryTokenStore, ReqwestTransport, SessionEnd, TokenStore},
    model::faq::{Faq, FaqDraft, FaqId, Language},
};
use mockito::{Mock, ServerGuard};

use crate::{fixtures::mockito as endpoints, RecordingListener};

/// A client wired to a mock backend
pub struct TestContext {
    pub server: ServerGuard,
    pub api: ApiClient<ReqwestTransport>,
    pub tokens: MemoryTokenStore,
    pub listener: Rc<RecordingListener>,
}

impl TestContext {
    pub fn token(&self) -> Option<String> {
        self.tokens.get()
    }

    pub fn session_events(&self) -> Vec<SessionEnd> {
        self.listener.events()
    }

    pub async fn with_list_endpoint(
        &mut self,
        language: Option<Language>,
        faqs: &[Faq],
        expected_requests: usize,
    ) -> Mock {
        endpoints::mock_list_endpoint(&mut self.server, language, faqs, expected_requests).await
    }

    pub async fn with_detail_endpoint(
        &mut self,
        language: Option<Language>,
        faq: &Faq,
        expected_requests: usize,
    ) -> Mock {
        endpoints::mock_detail_endpoint(&mut self.server, language, faq, expected_requests).await
    }

    pub async fn with_create_endpoint(
        &mut self,
        draft: &FaqDraft,
        status: usize,
        expected_requests: usize,
    ) -> Mock {
        endpoints::mock_create_endpoint(&mut self.server, draft, status, expected_requests).await
    }

    pub async fn with_update_endpoint(
        &mut self,
        id: &FaqId,
        draft: &FaqDraft,
        status: usize,
        expected_requests: usize,
    ) -> Mock {
        endpoints::mock_update_endpoint(&mut self.server, id, draft, status, expected_requests)
            .await
    }

    pub async fn with_delete_endpoint(
        &mut self,
        id: &FaqId,
        status: usize,
        expected_requests: usize,
    ) -> Mock {
        endpoints::mock_delete_endpoint(&mut self.server, id, status, expected_requests).await
    }

    pub async fn with_login_endpoint(
        &mut self,
        email: &str,
        password: &str,
        access_token: &str,
        expected_requests: usize,
    ) -> Mock {
        endpoints::mock_login_endpoint(
            &mut self.server,
            email,
            password,
            access_token,
            expected_requests,
        )
        .await
    }

    pub async fn with_status_endpoint(
        &mut self,
        method: &str,
        path: &str,
        status: usize,
        body: &str,
        expected_requests: usize,
    ) -> Mock {
        endpoints::mock_status_endpoint(
            &mut self.server,
            method,
            path,
            status,
            body,
            expected_requests,
        )
        .await
    }
}

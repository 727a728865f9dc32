use dioxus_logger::tracing;

use crate::{
    api::{ApiClient, ApiError, HttpTransport},
    model::{
        faq::{Faq, FaqId, Language},
        form::{FaqForm, Submission},
    },
};

/// Result of a successful mutation: the message to show and the list refresh that followed
///
/// The mutation has already been applied when this is returned, even if `faqs` is an error.
#[derive(Clone, Debug, PartialEq)]
pub struct FaqUpdate {
    pub faqs: Result<Vec<Faq>, ApiError>,
    pub message: &'static str,
}

pub struct FaqService<'a, T> {
    api: &'a ApiClient<T>,
}

impl<'a, T: HttpTransport> FaqService<'a, T> {
    /// Creates a new instance of [`FaqService`]
    pub fn new(api: &'a ApiClient<T>) -> Self {
        Self { api }
    }

    pub async fn list(&self, language: Option<Language>) -> Result<Vec<Faq>, ApiError> {
        self.api.list_faqs(language).await
    }

    pub async fn detail(&self, id: &FaqId, language: Option<Language>) -> Result<Faq, ApiError> {
        self.api.get_faq(id, language).await
    }

    /// Creates or updates depending on whether the form is editing, then refreshes the list
    ///
    /// Fails only when the mutation itself fails; a failed refresh is reported in the update.
    /// A blank question or answer fails before any request is made.
    pub async fn submit(&self, form: &FaqForm) -> Result<FaqUpdate, ApiError> {
        let message = match form.submission()? {
            Submission::Create(draft) => {
                self.api.create_faq(&draft).await?;
                "FAQ created successfully"
            }
            Submission::Update { id, draft } => {
                self.api.update_faq(&id, &draft).await?;
                "FAQ updated successfully"
            }
        };

        tracing::debug!("{}", message);

        Ok(FaqUpdate {
            faqs: self.refresh().await,
            message,
        })
    }

    /// Deletes an FAQ, then refreshes the list
    pub async fn delete(&self, id: &FaqId) -> Result<FaqUpdate, ApiError> {
        self.api.delete_faq(id).await?;

        tracing::debug!(faq_id = %id, "FAQ deleted");

        Ok(FaqUpdate {
            faqs: self.refresh().await,
            message: "FAQ deleted successfully",
        })
    }

    async fn refresh(&self) -> Result<Vec<Faq>, ApiError> {
        let faqs = self.api.list_faqs(None).await;

        if let Err(err) = &faqs {
            tracing::warn!("Failed to refresh FAQs after update: {}", err);
        }

        faqs
    }
}

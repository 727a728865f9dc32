use crate::{
    api::ApiError,
    model::faq::{Faq, FaqDraft, FaqId},
};

/// Admin board form state
///
/// `editing` holds the FAQ being edited; when empty, submitting creates a new entry.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FaqForm {
    pub question: String,
    pub answer: String,
    pub editing: Option<Faq>,
}

/// What submitting the form will do
#[derive(Clone, Debug, PartialEq)]
pub enum Submission {
    Create(FaqDraft),
    Update { id: FaqId, draft: FaqDraft },
}

impl FaqForm {
    /// Loads an existing FAQ into the form for editing
    pub fn edit(faq: &Faq) -> Self {
        Self {
            question: faq.question.clone(),
            answer: faq.response.clone(),
            editing: Some(faq.clone()),
        }
    }

    pub fn is_editing(&self) -> bool {
        self.editing.is_some()
    }

    pub fn draft(&self) -> FaqDraft {
        FaqDraft::new(self.question.clone(), self.answer.clone())
    }

    /// Validates the form and decides between create and update
    pub fn submission(&self) -> Result<Submission, ApiError> {
        let draft = self.draft();
        draft.validate()?;

        Ok(match &self.editing {
            Some(faq) => Submission::Update {
                id: faq.id.clone(),
                draft,
            },
            None => Submission::Create(draft),
        })
    }
}

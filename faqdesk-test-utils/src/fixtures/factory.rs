use faqdesk::model::faq::{Faq, FaqId, DEFAULT_LANGUAGE};

/// Create a mock FAQ in the default language
pub fn faq(id: &str, question: &str, response: &str) -> Faq {
    Faq {
        id: FaqId::new(id),
        question: question.to_string(),
        response: response.to_string(),
        language: DEFAULT_LANGUAGE.to_string(),
    }
}

/// Create a mock FAQ tagged with `language`
pub fn translated_faq(id: &str, question: &str, response: &str, language: &str) -> Faq {
    Faq {
        language: language.to_string(),
        ..faq(id, question, response)
    }
}

use std::{borrow::Cow, fmt};

use serde::{Deserialize, Deserializer, Serialize};

use crate::api::ApiError;

/// Default language tag for FAQs that don't carry one
pub const DEFAULT_LANGUAGE: &str = "en";

/// Opaque FAQ identifier
///
/// The backend may hand out document ids (`"65b2..."`) or numeric keys, both are kept as text.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct FaqId(String);

impl FaqId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The id percent-encoded for use as a single URL path segment
    pub fn path_segment(&self) -> Cow<'_, str> {
        urlencoding::encode(&self.0)
    }
}

impl fmt::Display for FaqId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for FaqId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum RawId {
            Text(String),
            Number(i64),
        }

        Ok(match RawId::deserialize(deserializer)? {
            RawId::Text(id) => FaqId(id),
            RawId::Number(id) => FaqId(id.to_string()),
        })
    }
}

/// A question/answer record as returned by the FAQ endpoints
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Faq {
    #[serde(alias = "_id")]
    pub id: FaqId,
    pub question: String,
    /// Answer body as HTML, rendered as supplied by the backend
    pub response: String,
    #[serde(default = "default_language")]
    pub language: String,
}

fn default_language() -> String {
    DEFAULT_LANGUAGE.to_string()
}

/// Body of create and update requests
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct FaqDraft {
    pub question: String,
    pub response: String,
}

impl FaqDraft {
    pub fn new(question: impl Into<String>, response: impl Into<String>) -> Self {
        Self {
            question: question.into(),
            response: response.into(),
        }
    }

    /// Rejects drafts with a blank question or answer
    pub fn validate(&self) -> Result<(), ApiError> {
        if self.question.trim().is_empty() || self.response.trim().is_empty() {
            return Err(ApiError::Validation(
                "Question and answer are required".to_string(),
            ));
        }

        Ok(())
    }
}

/// Languages offered by the viewer
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Language {
    English,
    Spanish,
    French,
}

impl Language {
    pub const ALL: [Language; 3] = [Language::English, Language::Spanish, Language::French];

    pub fn code(self) -> &'static str {
        match self {
            Self::English => "en",
            Self::Spanish => "es",
            Self::French => "fr",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::English => "English",
            Self::Spanish => "Spanish",
            Self::French => "French",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|language| language.code().eq_ignore_ascii_case(code.trim()))
    }

    /// Query string for FAQ reads
    ///
    /// English is the backend default, so it is sent the same way as no selection.
    pub fn query(language: Option<Self>) -> String {
        match language {
            None | Some(Self::English) => String::new(),
            Some(language) => format!("?lang={}", language.code()),
        }
    }
}

/// The viewer's language choice and the FAQ opened under it
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FaqSelection {
    pub language: Option<Language>,
    pub faq: Option<Faq>,
}

impl FaqSelection {
    /// Switches language and closes the open FAQ
    pub fn change_language(&mut self, language: Option<Language>) {
        self.language = language;
        self.faq = None;
    }

    /// Shows a fetched FAQ if it was requested under the current language
    ///
    /// Returns `false` and leaves the selection alone for a stale response.
    pub fn resolve(&mut self, requested: Option<Language>, faq: Option<Faq>) -> bool {
        if requested != self.language {
            return false;
        }

        self.faq = faq;
        true
    }
}

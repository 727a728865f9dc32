use faqdesk::api::ApiError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum TestError {
    #[error(transparent)]
    ApiError(#[from] ApiError),
    #[error(transparent)]
    SerdeJson(#[from] serde_json::Error),
}

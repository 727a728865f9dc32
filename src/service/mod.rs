//! Operations behind the admin board and login page.
//!
//! Services combine API calls the way the pages need them (mutate, then refresh the list) and
//! produce the message the page shows on success.

pub mod auth;
pub mod faq;

pub use auth::{AuthService, LOGIN_FAILED};
pub use faq::{FaqService, FaqUpdate};

pub mod api;
pub mod auth;
pub mod faq;
pub mod form;

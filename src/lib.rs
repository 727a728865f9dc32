//! # faqdesk
//!
//! FAQ viewer and admin board for a multilingual FAQ backend.
//!
//! The library holds everything below the UI: the data model, the [`api::ApiClient`] every
//! request goes through, and the services the admin pages call. The Dioxus front-end lives in
//! the binary target.

pub mod api;
pub mod model;
pub mod service;

mod auth;
mod faq;

use faqdesk_test_utils::prelude::*;

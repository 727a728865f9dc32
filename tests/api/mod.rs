mod fetch_with_auth;

use faqdesk_test_utils::prelude::*;

use std::rc::Rc;

use dioxus::prelude::*;
use faqdesk::api::{platform_token_store, ApiClient, ApiConfig, PlatformTransport, TokenStore};

use crate::client::{router::Route, store::session::SessionState};

const MAIN_CSS: Asset = asset!("/assets/main.css");

#[component]
pub fn App() -> Element {
    let tokens = use_hook(platform_token_store);
    let logged_in = tokens.get().is_some();

    let session = use_context_provider(|| SessionState::new(logged_in));
    use_context_provider(|| {
        ApiClient::new(ApiConfig::load(), PlatformTransport::default(), tokens.clone())
            .with_session_listener(Rc::new(session))
    });

    rsx! {
        document::Stylesheet { href: MAIN_CSS }
        Router::<Route> {}
    }
}

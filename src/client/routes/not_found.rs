use dioxus::document::Title;
use dioxus::prelude::*;

use crate::client::{components::Page, router::Route};

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let path = segments.join("/");

    rsx!(
        Title { "Not Found | FAQ Board" }
        Page { class: "center",
            div { class: "card narrow",
                h1 { class: "card-title", "Page not found" }
                p { class: "muted", "Nothing lives at /{path}." }
                Link { to: Route::Home {}, class: "btn btn-primary", "Back to FAQs" }
            }
        }
    )
}

use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::FaBookOpen;
use dioxus_free_icons::Icon;

use crate::client::router::Route;

#[component]
pub fn BrandLink() -> Element {
    rsx!(
        Link {
            to: Route::Home {},
            class: "btn btn-soft",
            Icon {
                width: 16,
                height: 16,
                icon: FaBookOpen
            }
            span { "FAQ Board" }
        }
    )
}

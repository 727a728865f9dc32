use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::FaSpinner;
use dioxus_free_icons::Icon;

#[component]
pub fn Spinner(size: Option<u32>) -> Element {
    let size = size.unwrap_or(32);

    rsx!(
        span { class: "spinner",
            Icon {
                width: size,
                height: size,
                icon: FaSpinner
            }
        }
    )
}

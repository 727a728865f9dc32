use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::FaXmark;
use dioxus_free_icons::Icon;

use crate::client::store::session::{NoticeKind, SessionState};

#[component]
pub fn Toast() -> Element {
    let session = use_context::<SessionState>();
    let notices = session.notices.read().clone();

    if notices.is_empty() {
        return rsx!();
    }

    rsx!(
        div { class: "toast-stack",
            for (index, notice) in notices.into_iter().enumerate() {
                div {
                    key: "{index}-{notice.message}",
                    class: match notice.kind {
                        NoticeKind::Success => "toast toast-success",
                        NoticeKind::Error => "toast toast-error",
                    },
                    role: "status",
                    span { "{notice.message}" }
                    button {
                        class: "toast-close",
                        onclick: move |_| session.dismiss(index),
                        Icon {
                            width: 16,
                            height: 16,
                            icon: FaXmark
                        }
                    }
                }
            }
        }
    )
}

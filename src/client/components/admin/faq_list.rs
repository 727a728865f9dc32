use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::{FaPenToSquare, FaTrash};
use dioxus_free_icons::Icon;
use faqdesk::model::faq::{Faq, FaqId};

use crate::client::components::Spinner;

#[component]
pub fn FaqListCard(
    faqs: Signal<Vec<Faq>>,
    loading: Signal<bool>,
    on_edit: EventHandler<Faq>,
    on_delete: EventHandler<FaqId>,
) -> Element {
    // Deletion asks for a second click on the same entry.
    let mut confirming = use_signal(|| None::<FaqId>);
    let busy = loading();

    let body = if busy && faqs.read().is_empty() {
        rsx!(
            div { class: "center",
                Spinner {}
            }
        )
    } else if faqs.read().is_empty() {
        rsx!(
            p { class: "muted center", "No FAQs available." }
        )
    } else {
        rsx!(
            ul { class: "stack",
                {faqs.read().iter().map(|faq| {
                    let edit_faq = faq.clone();
                    let delete_id = faq.id.clone();
                    let confirm_id = faq.id.clone();
                    let is_confirming = confirming.read().as_ref() == Some(&faq.id);

                    rsx!(
                        li {
                            key: "{faq.id}",
                            class: "faq-entry",
                            div { class: "faq-entry-actions",
                                if is_confirming {
                                    span { class: "muted", "Delete this FAQ?" }
                                    button {
                                        class: "btn btn-danger btn-sm",
                                        disabled: busy,
                                        onclick: move |_| {
                                            confirming.set(None);
                                            on_delete.call(delete_id.clone());
                                        },
                                        "Delete"
                                    }
                                    button {
                                        class: "btn btn-outline btn-sm",
                                        disabled: busy,
                                        onclick: move |_| confirming.set(None),
                                        "Cancel"
                                    }
                                } else {
                                    button {
                                        class: "icon-btn",
                                        title: "Edit",
                                        disabled: busy,
                                        onclick: move |_| on_edit.call(edit_faq.clone()),
                                        Icon {
                                            width: 18,
                                            height: 18,
                                            icon: FaPenToSquare
                                        }
                                    }
                                    button {
                                        class: "icon-btn icon-btn-danger",
                                        title: "Delete",
                                        disabled: busy,
                                        onclick: move |_| confirming.set(Some(confirm_id.clone())),
                                        Icon {
                                            width: 18,
                                            height: 18,
                                            icon: FaTrash
                                        }
                                    }
                                }
                            }
                            h3 { class: "faq-entry-question", "{faq.question}" }
                            div {
                                class: "prose",
                                dangerous_inner_html: "{faq.response}",
                            }
                        }
                    )
                })}
            }
        )
    };

    rsx!(
        div {
            class: "card",
            h2 {
                class: "card-title",
                "Existing FAQs"
            }
            {body}
        }
    )
}

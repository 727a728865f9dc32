use dioxus::prelude::*;
use faqdesk::model::form::FaqForm;

use crate::client::components::{HtmlEditor, Spinner};

#[component]
pub fn FaqFormCard(
    mut form: Signal<FaqForm>,
    loading: Signal<bool>,
    on_submit: EventHandler<()>,
) -> Element {
    let editing = form.read().is_editing();
    let question = form.read().question.clone();
    let answer = form.read().answer.clone();
    let busy = loading();

    rsx!(
        div {
            class: "card",
            h2 {
                class: "card-title",
                if editing { "Edit FAQ" } else { "Create New FAQ" }
            }
            div { class: "stack",
                label { class: "field",
                    span { class: "label", "Question" }
                    input {
                        class: "input",
                        r#type: "text",
                        placeholder: "Enter your question",
                        disabled: busy,
                        value: "{question}",
                        oninput: move |evt| form.write().question = evt.value(),
                    }
                }
                div { class: "field",
                    span { class: "label", "Answer" }
                    HtmlEditor {
                        value: answer,
                        disabled: busy,
                        oninput: move |value| form.write().answer = value,
                    }
                }
                div { class: "row",
                    button {
                        class: "btn btn-primary grow",
                        disabled: busy,
                        onclick: move |_| on_submit.call(()),
                        if busy {
                            Spinner { size: 16 }
                            span { "Processing..." }
                        } else if editing {
                            span { "Update FAQ" }
                        } else {
                            span { "Add FAQ" }
                        }
                    }
                    if editing {
                        button {
                            class: "btn btn-outline grow",
                            disabled: busy,
                            onclick: move |_| form.set(FaqForm::default()),
                            "Cancel Edit"
                        }
                    }
                }
            }
        }
    )
}

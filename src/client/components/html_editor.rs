use dioxus::prelude::*;

/// Answer editor: raw HTML on the left, rendered preview on the right
#[component]
pub fn HtmlEditor(
    value: String,
    disabled: bool,
    oninput: EventHandler<String>,
    placeholder: Option<&'static str>,
) -> Element {
    rsx!(
        div { class: "html-editor",
            textarea {
                class: "input html-editor-source",
                rows: "8",
                disabled: disabled,
                placeholder: placeholder.unwrap_or("<p>Write the answer as HTML</p>"),
                value: "{value}",
                oninput: move |evt| oninput.call(evt.value()),
            }
            div {
                class: "prose html-editor-preview",
                dangerous_inner_html: "{value}",
            }
        }
    )
}

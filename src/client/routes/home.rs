use dioxus::document::{Meta, Title};
use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::FaGlobe;
use dioxus_free_icons::Icon;
use dioxus_logger::tracing;
use faqdesk::{
    api::ApiClient,
    model::faq::{Faq, FaqId, FaqSelection, Language},
    service::FaqService,
};

use crate::client::components::{Page, Spinner};

#[component]
pub fn Home() -> Element {
    let api = use_context::<ApiClient>();
    let mut selection = use_signal(FaqSelection::default);
    let language = use_memo(move || selection.read().language);

    let list_api = api.clone();
    let faqs = use_resource(move || {
        let api = list_api.clone();
        let language = language();

        async move {
            let result = FaqService::new(&api).list(language).await;
            if let Err(err) = &result {
                tracing::error!("Failed to fetch FAQs: {}", err);
            }

            result
        }
    });

    let open_faq = use_callback(move |id: FaqId| {
        let api = api.clone();
        let requested = selection.peek().language;

        spawn(async move {
            let faq = match FaqService::new(&api).detail(&id, requested).await {
                Ok(faq) => Some(faq),
                Err(err) => {
                    tracing::error!(faq_id = %id, "Failed to fetch FAQ: {}", err);
                    None
                }
            };

            if !selection.write().resolve(requested, faq) {
                tracing::debug!(faq_id = %id, "Discarding FAQ fetched for a previous language");
            }
        });
    });

    rsx!(
        Title { "FAQ Board" }
        Meta {
            name: "description",
            content: "Frequently asked questions, available in English, Spanish and French."
        }
        Page {
            div { class: "card wide",
                div { class: "row header",
                    Icon {
                        width: 40,
                        height: 40,
                        icon: FaGlobe
                    }
                    h1 { class: "title", "FAQ Management System" }
                }
                div {
                    select {
                        class: "input select",
                        onchange: move |evt| {
                            selection.write().change_language(Language::from_code(&evt.value()));
                        },
                        option { value: "", "Select Language" }
                        for lang in Language::ALL {
                            option { value: lang.code(), {lang.label()} }
                        }
                    }
                }
                div { class: "grid-2",
                    div {
                        h2 { class: "card-title", "Available FAQs" }
                        FaqQuestions { faqs, open_faq }
                    }
                    div {
                        h2 { class: "card-title", "FAQ Content" }
                        div { class: "faq-content",
                            if let Some(faq) = selection.read().faq.as_ref() {
                                h3 { class: "faq-entry-question", "{faq.question}" }
                                div {
                                    class: "prose",
                                    dangerous_inner_html: "{faq.response}",
                                }
                            } else {
                                p { class: "muted center",
                                    "Select an FAQ from the list to view its content"
                                }
                            }
                        }
                    }
                }
            }
        }
    )
}

#[component]
fn FaqQuestions(
    faqs: Resource<Result<Vec<Faq>, faqdesk::api::ApiError>>,
    open_faq: Callback<FaqId>,
) -> Element {
    let empty = rsx!(
        div { class: "empty",
            p { class: "muted", "No FAQs available for the selected language" }
        }
    );

    match &*faqs.read_unchecked() {
        None => rsx!(
            div { class: "center tall",
                Spinner { size: 48 }
            }
        ),
        Some(Ok(list)) if list.is_empty() => empty,
        Some(Ok(list)) => rsx!(
            ul { class: "stack",
                {list.iter().map(|faq| {
                    let id = faq.id.clone();

                    rsx!(
                        li {
                            key: "{faq.id}",
                            class: "faq-question",
                            onclick: move |_| open_faq.call(id.clone()),
                            p { "{faq.question}" }
                        }
                    )
                })}
            }
        ),
        Some(Err(_)) => empty,
    }
}

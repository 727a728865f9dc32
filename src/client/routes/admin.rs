use dioxus::document::{Meta, Title};
use dioxus::prelude::*;
use dioxus_logger::tracing;
use faqdesk::{
    api::{ApiClient, ApiError, SessionEnd, SessionListener},
    model::{
        faq::{Faq, FaqId},
        form::FaqForm,
    },
    service::FaqService,
};

use crate::client::{
    components::{
        admin::{FaqFormCard, FaqListCard},
        Page,
    },
    store::session::SessionState,
};

#[component]
pub fn Admin() -> Element {
    let api = use_context::<ApiClient>();
    let session = use_context::<SessionState>();

    let form = use_signal(FaqForm::default);
    let mut faqs = use_signal(Vec::<Faq>::new);
    let mut loading = use_signal(|| false);

    // The board is only reachable with a stored token; the navbar performs the redirect.
    let guard_api = api.clone();
    use_effect(move || {
        if !guard_api.is_logged_in() {
            session.session_ended(SessionEnd::MissingToken);
        }
    });

    let load_api = api.clone();
    use_future(move || {
        let api = load_api.clone();

        async move {
            loading.set(true);
            match FaqService::new(&api).list(None).await {
                Ok(list) => faqs.set(list),
                Err(err) => {
                    tracing::error!("Failed to fetch FAQs: {}", err);
                    session.notify_error(err.user_message());
                }
            }
            loading.set(false);
        }
    });

    let submit_api = api.clone();
    let on_submit = move |_: ()| {
        if loading() {
            return;
        }

        let snapshot = form();
        let api = submit_api.clone();
        let mut form = form;

        loading.set(true);
        spawn(async move {
            let result = FaqService::new(&api).submit(&snapshot).await;
            loading.set(false);

            match result {
                Ok(update) => {
                    form.set(FaqForm::default());
                    session.notify_success(update.message);
                    show_refresh(update.faqs, faqs, session);
                }
                // Redirect and notice come from the session listener.
                Err(err) if err.is_session_error() => {}
                Err(err) => session.notify_error(err.user_message()),
            }
        });
    };

    let on_edit = move |faq: Faq| {
        let mut form = form;
        form.set(FaqForm::edit(&faq));
        let _ = document::eval("window.scrollTo({ top: 0, behavior: 'smooth' })");
    };

    let on_delete = move |id: FaqId| {
        if loading() {
            return;
        }

        let api = api.clone();
        let mut form = form;

        loading.set(true);
        spawn(async move {
            let result = FaqService::new(&api).delete(&id).await;
            loading.set(false);

            match result {
                Ok(update) => {
                    if form.read().editing.as_ref().map(|faq| &faq.id) == Some(&id) {
                        form.set(FaqForm::default());
                    }
                    session.notify_success(update.message);
                    show_refresh(update.faqs, faqs, session);
                }
                Err(err) if err.is_session_error() => {}
                Err(err) => session.notify_error(err.user_message()),
            }
        });
    };

    rsx!(
        Title { "Admin FAQ Board" }
        Meta {
            name: "description",
            content: "Create, edit and delete FAQs."
        }
        Page {
            div { class: "column",
                h1 { class: "title", "Admin FAQ Board" }
                FaqFormCard { form, loading, on_submit }
                FaqListCard { faqs, loading, on_edit, on_delete }
            }
        }
    )
}

/// Shows the list refreshed after a mutation, or its error next to the success notice
fn show_refresh(
    refreshed: Result<Vec<Faq>, ApiError>,
    mut faqs: Signal<Vec<Faq>>,
    session: SessionState,
) {
    match refreshed {
        Ok(list) => faqs.set(list),
        Err(err) if err.is_session_error() => {}
        Err(err) => session.notify_error(err.user_message()),
    }
}

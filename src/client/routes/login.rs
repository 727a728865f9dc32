use dioxus::document::{Meta, Title};
use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::{FaCircleUser, FaEnvelope, FaEye, FaEyeSlash, FaLock};
use dioxus_free_icons::Icon;
use faqdesk::{
    api::ApiClient,
    service::{AuthService, LOGIN_FAILED},
};

use crate::client::{
    components::{Page, Spinner},
    router::Route,
    store::session::SessionState,
};

#[component]
pub fn Login() -> Element {
    let api = use_context::<ApiClient>();
    let session = use_context::<SessionState>();
    let nav = navigator();

    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut show_password = use_signal(|| false);
    let mut loading = use_signal(|| false);

    let onsubmit = move |evt: FormEvent| {
        evt.prevent_default();
        if loading() {
            return;
        }
        loading.set(true);

        let api = api.clone();
        let mut session = session;
        spawn(async move {
            let result = AuthService::new(&api).login(&email(), &password()).await;
            loading.set(false);

            match result {
                Ok(()) => {
                    session.logged_in.set(true);
                    session.clear_notices();
                    nav.push(Route::Admin {});
                }
                Err(_) => session.notify_error(LOGIN_FAILED),
            }
        });
    };

    let password_type = if show_password() { "text" } else { "password" };

    rsx!(
        Title { "Admin Login | FAQ Board" }
        Meta {
            name: "description",
            content: "Sign in to manage FAQs."
        }
        Page { class: "center",
            div { class: "card narrow",
                div { class: "login-header",
                    Icon {
                        width: 48,
                        height: 48,
                        icon: FaCircleUser
                    }
                    h1 { class: "title", "Admin Login" }
                    p { class: "muted", "Sign in to manage FAQs" }
                }
                form { class: "stack", onsubmit,
                    label { class: "field",
                        span { class: "label", "Email" }
                        div { class: "input-icon",
                            Icon {
                                width: 18,
                                height: 18,
                                icon: FaEnvelope
                            }
                            input {
                                class: "input",
                                id: "email",
                                r#type: "text",
                                required: true,
                                placeholder: "Enter your email",
                                value: "{email}",
                                oninput: move |evt| email.set(evt.value()),
                            }
                        }
                    }
                    label { class: "field",
                        span { class: "label", "Password" }
                        div { class: "input-icon",
                            Icon {
                                width: 18,
                                height: 18,
                                icon: FaLock
                            }
                            input {
                                class: "input",
                                id: "password",
                                r#type: password_type,
                                required: true,
                                placeholder: "Enter your password",
                                value: "{password}",
                                oninput: move |evt| password.set(evt.value()),
                            }
                            button {
                                class: "icon-btn",
                                r#type: "button",
                                onclick: move |_| show_password.toggle(),
                                if show_password() {
                                    Icon {
                                        width: 18,
                                        height: 18,
                                        icon: FaEyeSlash
                                    }
                                } else {
                                    Icon {
                                        width: 18,
                                        height: 18,
                                        icon: FaEye
                                    }
                                }
                            }
                        }
                    }
                    button {
                        class: "btn btn-primary full",
                        r#type: "submit",
                        disabled: loading(),
                        if loading() {
                            Spinner { size: 18 }
                        } else {
                            "Sign In"
                        }
                    }
                }
            }
        }
    )
}

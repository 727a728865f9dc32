use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::{FaCircleUser, FaRightFromBracket};
use dioxus_free_icons::Icon;
use dioxus_logger::tracing;
use faqdesk::{api::ApiClient, service::AuthService};

use crate::client::{
    components::{BrandLink, Toast},
    router::Route,
    store::session::SessionState,
};

#[component]
pub fn Navbar() -> Element {
    let api = use_context::<ApiClient>();
    let mut session = use_context::<SessionState>();
    let nav = navigator();

    // The API client reports ended sessions here; redirect once and consume the event.
    use_effect(move || {
        if let Some(reason) = session.take_ended() {
            tracing::debug!(?reason, "Admin session ended, redirecting to login");
            nav.replace(Route::Login {});
        }
    });

    let logout = move |_: MouseEvent| {
        AuthService::new(&api).logout();
        session.logged_in.set(false);
        session.notify_success("Logged out");
        nav.push(Route::Home {});
    };

    rsx! {
        nav {
            class: "navbar",
            div {
                class: "navbar-start",
                BrandLink {}
            }
            div {
                class: "navbar-end",
                if (session.logged_in)() {
                    Link {
                        to: Route::Admin {},
                        class: "btn btn-success",
                        Icon {
                            width: 16,
                            height: 16,
                            icon: FaCircleUser
                        }
                        span { "Dashboard" }
                    }
                    button {
                        class: "btn btn-outline",
                        onclick: logout,
                        Icon {
                            width: 16,
                            height: 16,
                            icon: FaRightFromBracket
                        }
                        span { "Logout" }
                    }
                } else {
                    Link {
                        to: Route::Login {},
                        class: "btn btn-primary",
                        Icon {
                            width: 16,
                            height: 16,
                            icon: FaCircleUser
                        }
                        span { "Admin Login" }
                    }
                }
            }
        }

        Outlet::<Route> {}

        Toast {}
    }
}

use crate::auth::use_auth;
use crate::portal::use_portal;
use crate::routes::{redirect_to, Route};
use dioxus::prelude::*;
use shared_ui::{Button, ButtonVariant, Card, CardContent, CardDescription, CardHeader, CardTitle};

/// Public landing page. Also where users whose role has no dashboards end up.
#[component]
pub fn About() -> Element {
    let auth = use_auth();
    let portal = use_portal();
    let session = auth.session();

    let landing = session
        .as_ref()
        .map(|s| portal.resolver().default_route_for(s.role()).to_string());
    let has_dashboards = landing
        .as_deref()
        .is_some_and(|path| path != portal.resolver().fallback_path());

    rsx! {
        div { class: "about-page",
            Card {
                CardHeader {
                    CardTitle { "ABDAP Automotive Analytics Platform" }
                    CardDescription {
                        "Sales statistics, forecasts and model rankings built on automotive market data."
                    }
                }
                CardContent {
                    ul { class: "about-features",
                        li { "Sales managers: sales overview, purchase heat map, time series and forecasts." }
                        li { "Customers: top models, model comparison, purchase recommendations and fuel economy." }
                    }

                    {match session {
                        Some(session) if has_dashboards => rsx! {
                            Button {
                                onclick: move |_| {
                                    if let Some(path) = &landing {
                                        redirect_to(path);
                                    }
                                },
                                "Open dashboards"
                            }
                            p { class: "about-session", "Signed in as {session.username()}" }
                        },
                        Some(session) => rsx! {
                            p { class: "about-no-access",
                                "Signed in as {session.username()} ({session.role().display_name()}). "
                                "No dashboards are assigned to this role yet."
                            }
                        },
                        None => rsx! {
                            Link { to: Route::Login {},
                                Button { variant: ButtonVariant::Outline, "Sign in" }
                            }
                        },
                    }}
                }
            }
        }
    }
}

use crate::auth::use_auth;
use crate::portal::use_portal;
use crate::routes::{redirect_to, Route};
use dioxus::prelude::*;
use shared_types::AppError;
use shared_ui::{
    Button, Card, CardContent, CardDescription, CardFooter, CardHeader, CardTitle, Input,
};
use std::collections::HashMap;

/// Sign-in page. On success the session is persisted and the user lands on
/// their role's default route.
#[component]
pub fn Login() -> Element {
    let mut auth = use_auth();
    let portal = use_portal();
    let mut username = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error_msg = use_signal(|| Option::<String>::None);
    let mut field_errors = use_signal(HashMap::<String, String>::new);
    let mut loading = use_signal(|| false);

    let handle_login = move |evt: FormEvent| {
        let portal = portal.clone();
        async move {
            evt.prevent_default();
            if loading() {
                return;
            }
            loading.set(true);
            error_msg.set(None);
            field_errors.set(HashMap::new());

            match server::api::login(username(), password()).await {
                Ok(record) => match auth.sign_in(record) {
                    Ok(session) => {
                        password.set(String::new());
                        redirect_to(portal.resolver().default_route_for(session.role()));
                    }
                    Err(e) => error_msg.set(Some(e.to_string())),
                },
                Err(e) => {
                    let err_str = e.to_string();
                    let fe = AppError::parse_field_errors(&err_str);
                    if fe.is_empty() {
                        error_msg.set(Some(AppError::friendly_message(&err_str)));
                    } else {
                        field_errors.set(fe);
                    }
                }
            }
            loading.set(false);
        }
    };

    let field_error = move |field: &str| field_errors().get(field).cloned().unwrap_or_default();

    rsx! {
        div { class: "auth-page",
            Card {
                class: "auth-card",

                CardHeader {
                    CardTitle { "Sign In" }
                    CardDescription { "ABDAP Automotive Analytics Platform" }
                }

                CardContent {
                    if let Some(err) = error_msg() {
                        div { class: "auth-error", role: "alert", "{err}" }
                    }

                    form { onsubmit: handle_login,
                        div { class: "auth-field",
                            Input {
                                label: "Username",
                                id: "username",
                                placeholder: "Enter your username",
                                value: username(),
                                error: field_error("username"),
                                on_input: move |e: FormEvent| username.set(e.value()),
                            }
                        }
                        div { class: "auth-field",
                            Input {
                                label: "Password",
                                input_type: "password",
                                id: "password",
                                placeholder: "Enter your password",
                                value: password(),
                                error: field_error("password"),
                                on_input: move |e: FormEvent| password.set(e.value()),
                            }
                        }
                        Button {
                            button_type: "submit",
                            class: "auth-submit",
                            disabled: loading(),
                            if loading() { "Signing in..." } else { "Sign In" }
                        }
                    }
                }

                CardFooter {
                    p { class: "auth-hint",
                        "Demo accounts: "
                        code { "DB / 123" }
                        " (sales manager), "
                        code { "LJJ / 1234" }
                        " (customer)"
                    }
                    p { class: "auth-link",
                        Link { to: Route::About {}, "About the platform" }
                    }
                }
            }
        }
    }
}

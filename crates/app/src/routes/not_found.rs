use access::PermissionResolver;
use dioxus::prelude::*;
use shared_types::Role;
use shared_ui::{Card, CardDescription, CardFooter, CardHeader, CardTitle};

use crate::auth::use_auth;
use crate::portal::use_portal;
use crate::routes::Route;

/// Where to send someone who hit an unknown path, and the link label.
fn way_back(resolver: &PermissionResolver, role: Option<&Role>) -> (String, String) {
    let target = match role {
        Some(role) => resolver.default_route_for(role),
        None => resolver.login_path(),
    };
    let label = resolver
        .route(target)
        .and_then(|r| r.title.clone())
        .map(|title| format!("Continue to {title}"))
        .unwrap_or_else(|| "Continue".to_string());
    (target.to_string(), label)
}

/// Catch-all for paths outside the route table.
#[component]
pub fn NotFound(route: Vec<String>) -> Element {
    let auth = use_auth();
    let portal = use_portal();
    let missing = format!("/{}", route.join("/"));

    let (target, label) = way_back(portal.resolver(), auth.role().as_ref());
    let target: Route = target.parse().unwrap_or(Route::Login {});
    let title = portal.document_title("Page not found");

    rsx! {
        document::Title { "{title}" }

        div { class: "not-found-page",
            Card { class: "not-found-card",
                CardHeader {
                    div { class: "not-found-code", "404" }
                    CardTitle { "Nothing lives at {missing}" }
                    CardDescription { "The dashboard may have been renamed or retired." }
                }
                CardFooter {
                    Link { to: target, class: "not-found-link", "{label}" }
                }
            }
        }
    }
}

use dioxus::prelude::*;
use shared_types::PortalConfig;

mod auth;
mod permission_gate;
mod portal;
mod routes;
mod storage;
use auth::{use_auth, AuthState};
use portal::{PortalContext, StartupError};
use routes::Route;

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    #[cfg(feature = "server")]
    dioxus::serve(|| async move {
        let config = server::config::load_portal_config();
        if let Err(e) = access::catalog::resolver(config) {
            tracing::error!(error = %e, "Route configuration is invalid; pages will show the startup error");
        }

        let router = dioxus::server::router(App)
            .layer(tower_http::trace::TraceLayer::new_for_http());
        Ok(router)
    });

    #[cfg(not(feature = "server"))]
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    // Fetch portal config once (defaults on error)
    let config_resource =
        use_server_future(move || async move { server::api::get_portal_config().await })?;

    let config = config_resource
        .read()
        .as_ref()
        .cloned()
        .unwrap_or(Ok(PortalConfig::default()))
        .unwrap_or_default();

    let portal = use_hook(move || {
        PortalContext::from_config(&config).map_err(|e| {
            tracing::error!(error = %e, "Route configuration rejected");
            e.to_string()
        })
    });

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        {match portal {
            Ok(portal) => rsx! { Portal { portal } },
            Err(message) => rsx! { StartupError { message } },
        }}
    }
}

/// Provides the portal and auth contexts and mounts the router.
#[component]
fn Portal(portal: PortalContext) -> Element {
    use_context_provider(|| portal);
    use_context_provider(AuthState::new);

    // localStorage is only readable on the client, so the session is restored
    // after hydration; the guard shows a loading state until then.
    let mut auth = use_auth();
    use_effect(move || auth.restore());

    rsx! {
        SuspenseBoundary {
            fallback: |_| rsx! {
                div { class: "auth-guard-loading",
                    p { "Loading..." }
                }
            },
            Router::<Route> {}
        }
    }
}

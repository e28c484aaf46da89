pub mod about;
pub mod dashboards;
pub mod login;
pub mod not_found;

use crate::auth::{use_auth, use_visible_menu};
use crate::portal::use_portal;
use access::{guard, PermissionResolver};
use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{LdLogOut, LdMenu};
use dioxus_free_icons::Icon;
use shared_types::GuardDecision;
use shared_ui::{
    Button, ButtonVariant, NavMenu, Sidebar, SidebarContent, SidebarFooter, SidebarHeader,
    SidebarInset, SidebarProvider, SidebarTrigger,
};

use about::About;
use dashboards::{
    CarPurchasesHeatMap, FuelConsList, ModelSalesForcast, Recommendation, RegionSalesForcast,
    SaleTotal, SalesForecast, TimeSeries, TopCarModelList, VehicleModelCompAnalysis,
};
use login::Login;
use not_found::NotFound;

/// Application routes.
///
/// Paths mirror `access::catalog`; every navigation passes through
/// [`NavigationGuard`].
#[derive(Clone, Routable, Debug, PartialEq)]
pub enum Route {
    #[layout(NavigationGuard)]
    #[route("/Auth")]
    Login {},
    #[route("/about")]
    About {},
    #[layout(AppLayout)]
    #[route("/app")]
    AppHome {},
    // ── SalesManager ──
    #[route("/app/SaleTotal")]
    SaleTotal {},
    #[route("/app/CarPurchasesHeatMap")]
    CarPurchasesHeatMap {},
    #[route("/app/TimeSeries")]
    TimeSeries {},
    #[route("/app/SalesForecast")]
    SalesForecast {},
    #[route("/app/ModelSalesForcast")]
    ModelSalesForcast {},
    #[route("/app/RegionSalesForcast")]
    RegionSalesForcast {},
    // ── Customer ──
    #[route("/app/TopCarModelList")]
    TopCarModelList {},
    #[route("/app/VehicleModelCompAnalysis")]
    VehicleModelCompAnalysis {},
    #[route("/app/Recommendation")]
    Recommendation {},
    #[route("/app/FuelConsList")]
    FuelConsList {},
    #[end_layout]
    // Legacy short paths
    #[redirect("/", || Route::Login {})]
    #[redirect("/SaleTotal", || Route::SaleTotal {})]
    #[redirect("/TopCarModelList", || Route::TopCarModelList {})]
    #[redirect("/CarPurchasesHeatMap", || Route::CarPurchasesHeatMap {})]
    #[route("/:..route")]
    NotFound { route: Vec<String> },
}

/// Replace the current history entry with `path`.
pub fn redirect_to(path: &str) {
    match path.parse::<Route>() {
        Ok(route) => {
            navigator().replace(route);
        }
        Err(e) => tracing::error!(path, error = %e, "Redirect target is not a route"),
    }
}

/// Evaluates every navigation against the session and applies the outcome:
/// renders the page and sets the document title, or redirects.
#[component]
fn NavigationGuard() -> Element {
    let auth = use_auth();
    let portal = use_portal();
    let route: Route = use_route();

    if !auth.is_restored() {
        return rsx! {
            div { class: "auth-guard-loading",
                p { "Loading..." }
            }
        };
    }

    let path = route.to_string();
    let session = auth.session();
    let resolver = portal.resolver();

    let decision = guard::evaluate(session.as_ref(), &path, resolver);
    if let Some(target) = redirect_target(&decision, resolver) {
        redirect_to(target);
        return rsx! {
            div { class: "auth-guard-loading",
                p { "Redirecting..." }
            }
        };
    }

    let document_title = match decision {
        GuardDecision::Allow { title: Some(title) } => Some(portal.document_title(&title)),
        _ => None,
    };
    rsx! {
        if let Some(document_title) = document_title {
            document::Title { "{document_title}" }
        }
        Outlet::<Route> {}
    }
}

/// The path a decision sends the user to, or `None` when the page renders.
fn redirect_target<'a>(
    decision: &'a GuardDecision,
    resolver: &'a PermissionResolver,
) -> Option<&'a str> {
    match decision {
        GuardDecision::Allow { .. } => None,
        GuardDecision::RedirectLogin => Some(resolver.login_path()),
        GuardDecision::RedirectDefault { to } => Some(to),
    }
}

/// Dashboard shell: role-filtered sidebar menu, user footer and page header.
#[component]
fn AppLayout() -> Element {
    let route: Route = use_route();
    let mut auth = use_auth();
    let portal = use_portal();
    let menu = use_visible_menu();

    let path = route.to_string();
    let page_title = portal
        .resolver()
        .route(&path)
        .and_then(|r| r.title.clone())
        .unwrap_or_default();
    let session = auth.session();

    rsx! {
        SidebarProvider { default_open: true,
            Sidebar {
                SidebarHeader {
                    div { class: "sidebar-brand",
                        span { class: "sidebar-brand-name", "ABDAP" }
                        span { class: "sidebar-brand-tagline", "Automotive Analytics" }
                    }
                }

                SidebarContent {
                    NavMenu {
                        entries: menu(),
                        active_path: path.clone(),
                        on_select: move |target: String| redirect_to(&target),
                    }
                }

                SidebarFooter {
                    if let Some(session) = session {
                        div { class: "sidebar-user",
                            span { class: "sidebar-user-name", "{session.username()}" }
                            span { class: "sidebar-user-role", "{session.role().display_name()}" }
                        }
                    }
                    Button {
                        variant: ButtonVariant::Ghost,
                        class: "sidebar-logout",
                        onclick: move |_| {
                            auth.sign_out();
                            navigator().replace(Route::Login {});
                        },
                        Icon::<LdLogOut> { icon: LdLogOut, width: 16, height: 16 }
                        "Sign out"
                    }
                }
            }

            SidebarInset {
                header { class: "app-header",
                    SidebarTrigger {
                        Icon::<LdMenu> { icon: LdMenu, width: 18, height: 18 }
                    }
                    h1 { class: "app-header-title", "{page_title}" }
                }
                div { class: "app-content",
                    Outlet::<Route> {}
                }
            }
        }
    }
}

/// `/app` itself has no page; send the user to their landing route.
#[component]
fn AppHome() -> Element {
    let auth = use_auth();
    let portal = use_portal();
    let resolver = portal.resolver();

    let target = match auth.role() {
        Some(role) => resolver.default_route_for(&role).to_string(),
        None => resolver.login_path().to_string(),
    };
    redirect_to(&target);

    rsx! {
        div { class: "auth-guard-loading",
            p { "Redirecting..." }
        }
    }
}

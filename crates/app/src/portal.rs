use std::rc::Rc;

use access::PermissionResolver;
use dioxus::prelude::*;
use shared_types::{PortalConfig, RouteTableError};
use shared_ui::{Card, CardContent, CardDescription, CardHeader, CardTitle, CardTone};

/// Validated route data plus presentation settings, shared through context.
#[derive(Clone)]
pub struct PortalContext {
    resolver: Rc<PermissionResolver>,
    title_suffix: Rc<str>,
}

impl PortalContext {
    /// Validate the route catalog against `config`. Fails on any route table
    /// inconsistency; the caller renders [`StartupError`] instead of the app.
    pub fn from_config(config: &PortalConfig) -> Result<Self, RouteTableError> {
        let resolver = access::catalog::resolver(config)?;
        Ok(Self {
            resolver: Rc::new(resolver),
            title_suffix: Rc::from(config.portal.title_suffix.as_str()),
        })
    }

    pub fn resolver(&self) -> &PermissionResolver {
        &self.resolver
    }

    /// Document title for a page: `"{title} - {suffix}"`.
    pub fn document_title(&self, title: &str) -> String {
        format!("{title} - {}", self.title_suffix)
    }
}

impl PartialEq for PortalContext {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.resolver, &other.resolver)
    }
}

pub fn use_portal() -> PortalContext {
    use_context::<PortalContext>()
}

/// Shown instead of the router when the route data fails validation.
#[component]
pub fn StartupError(message: String) -> Element {
    rsx! {
        div { class: "startup-error-page",
            Card { tone: CardTone::Danger,
                CardHeader {
                    CardTitle { "Configuration error" }
                    CardDescription { "The portal could not start because its route configuration is invalid." }
                }
                CardContent {
                    code { class: "startup-error-detail", "{message}" }
                }
            }
        }
    }
}

use serde::{Deserialize, Serialize};

use crate::models::Role;

/// A node in the static navigation tree.
///
/// `path` is a segment relative to the parent's full path unless it starts
/// with `/`. A `layout` node groups children and has no page of its own.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RouteDescriptor {
    pub path: String,
    pub name: String,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub icon: Option<String>,
    #[serde(default)]
    pub requires_auth: bool,
    #[serde(default)]
    pub roles: Vec<Role>,
    #[serde(default)]
    pub hidden: bool,
    #[serde(default)]
    pub layout: bool,
    #[serde(default)]
    pub children: Vec<RouteDescriptor>,
}

impl RouteDescriptor {
    /// A page reachable without logging in.
    pub fn public(path: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            name: name.into(),
            title: None,
            icon: None,
            requires_auth: false,
            roles: Vec::new(),
            hidden: false,
            layout: false,
            children: Vec::new(),
        }
    }

    /// A page that requires a session.
    pub fn protected(path: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            requires_auth: true,
            ..Self::public(path, name)
        }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    pub fn roles(mut self, roles: impl IntoIterator<Item = Role>) -> Self {
        self.roles = roles.into_iter().collect();
        self
    }

    pub fn hidden(mut self) -> Self {
        self.hidden = true;
        self
    }

    /// Mark as a grouping node and attach its children.
    pub fn layout(mut self, children: Vec<RouteDescriptor>) -> Self {
        self.layout = true;
        self.children = children;
        self
    }
}

/// A route projected for display in the navigation menu.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MenuEntry {
    /// Full path, ready to navigate to.
    pub path: String,
    pub name: String,
    pub title: String,
    pub icon: Option<String>,
    pub children: Vec<MenuEntry>,
}

/// Outcome of evaluating one navigation attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuardDecision {
    /// Proceed to the target; `title` is the label to show, if the route has one.
    Allow { title: Option<String> },
    /// Send the visitor to the login route.
    RedirectLogin,
    /// Send the user to their role's landing route.
    RedirectDefault { to: String },
}

impl GuardDecision {
    pub fn is_allowed(&self) -> bool {
        matches!(self, GuardDecision::Allow { .. })
    }
}

use std::collections::BTreeMap;

use shared_types::{MenuEntry, Role, RouteSettings, RouteTableError};

use crate::table::{ResolvedRoute, RouteTable, TableNode};

/// Answers "what may this role see and where does it land".
///
/// Immutable once built; every query is a pure function of its inputs.
#[derive(Debug, Clone)]
pub struct PermissionResolver {
    table: RouteTable,
    login_path: String,
    fallback_path: String,
    defaults: BTreeMap<Role, String>,
}

impl PermissionResolver {
    /// Bind a route table to its landing routes.
    ///
    /// Fails if the login or fallback route is missing, if the fallback is
    /// restricted to some roles or is the login route itself, or if a role's
    /// default route would not admit that role. Neither the fallback nor a
    /// default may be a layout node.
    pub fn new(
        table: RouteTable,
        login_path: impl Into<String>,
        fallback_path: impl Into<String>,
        defaults: BTreeMap<Role, String>,
    ) -> Result<Self, RouteTableError> {
        let login_path = login_path.into();
        let fallback_path = fallback_path.into();

        let login = known(&table, "login", &login_path)?;
        let login_path = login.path.clone();

        let fallback = landing(&table, "fallback", &fallback_path)?;
        if !fallback.roles.is_empty() || fallback.path == login_path {
            return Err(RouteTableError::FallbackRestricted(fallback_path));
        }
        let fallback_path = fallback.path.clone();

        let mut resolved = BTreeMap::new();
        for (role, path) in defaults {
            let route = landing(&table, "default", &path)?;
            if !route.permits(&role) || route.path == login_path {
                return Err(RouteTableError::UnreachableDefault {
                    role: role.to_string(),
                    path,
                });
            }
            resolved.insert(role, route.path.clone());
        }

        Ok(Self {
            table,
            login_path,
            fallback_path,
            defaults: resolved,
        })
    }

    /// Menu for `role`, in declaration order.
    ///
    /// An entry is kept when its roles admit `role`. A node with children
    /// survives if any descendant survives, or if it is itself a page the
    /// role may open. Layout nodes left without children are dropped, as are
    /// hidden nodes and everything under them.
    pub fn visible_menu(&self, role: &Role) -> Vec<MenuEntry> {
        filter_nodes(self.table.tree(), role)
    }

    /// Exact-path check. Unknown paths are never authorized.
    pub fn is_authorized(&self, role: &Role, path: &str) -> bool {
        self.table.get(path).is_some_and(|r| r.permits(role))
    }

    /// Landing route for `role`; unknown roles get the fallback.
    pub fn default_route_for(&self, role: &Role) -> &str {
        self.defaults
            .get(role)
            .map(String::as_str)
            .unwrap_or(&self.fallback_path)
    }

    pub fn route(&self, path: &str) -> Option<&ResolvedRoute> {
        self.table.get(path)
    }

    pub fn login_path(&self) -> &str {
        &self.login_path
    }

    pub fn fallback_path(&self) -> &str {
        &self.fallback_path
    }

    pub fn is_login_path(&self, path: &str) -> bool {
        self.table
            .get(path)
            .is_some_and(|r| r.path == self.login_path)
    }

    pub fn table(&self) -> &RouteTable {
        &self.table
    }
}

fn known<'a>(
    table: &'a RouteTable,
    purpose: &str,
    path: &str,
) -> Result<&'a ResolvedRoute, RouteTableError> {
    table.get(path).ok_or_else(|| RouteTableError::UnknownRoute {
        purpose: purpose.to_string(),
        path: path.to_string(),
    })
}

/// A route users are sent to: it must exist and render a page of its own.
fn landing<'a>(
    table: &'a RouteTable,
    purpose: &str,
    path: &str,
) -> Result<&'a ResolvedRoute, RouteTableError> {
    let route = known(table, purpose, path)?;
    if route.layout {
        return Err(RouteTableError::LayoutLanding {
            purpose: purpose.to_string(),
            path: route.path.clone(),
        });
    }
    Ok(route)
}

fn filter_nodes(nodes: &[TableNode], role: &Role) -> Vec<MenuEntry> {
    nodes
        .iter()
        .filter(|node| !node.hidden)
        .filter_map(|node| {
            let children = filter_nodes(&node.children, role);
            let qualifies = node.route.permits(role);
            let standalone = !node.route.layout;
            if !children.is_empty() || (qualifies && standalone) {
                Some(MenuEntry {
                    path: node.route.path.clone(),
                    name: node.route.name.clone(),
                    title: node
                        .route
                        .title
                        .clone()
                        .unwrap_or_else(|| node.route.name.clone()),
                    icon: node.icon.clone(),
                    children,
                })
            } else {
                None
            }
        })
        .collect()
}

/// Build a resolver from the route settings in `config.toml`.
pub fn from_settings(
    table: RouteTable,
    settings: &RouteSettings,
) -> Result<PermissionResolver, RouteTableError> {
    PermissionResolver::new(
        table,
        settings.login.clone(),
        settings.fallback.clone(),
        settings.role_defaults(),
    )
}

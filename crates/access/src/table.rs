use std::collections::{BTreeMap, BTreeSet};

use shared_types::{Role, RouteDescriptor, RouteTableError};

/// A route with its inherited constraints folded in.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedRoute {
    /// Full path from the root.
    pub path: String,
    pub name: String,
    pub title: Option<String>,
    /// Own flag OR any ancestor's.
    pub requires_auth: bool,
    /// Own roles, or the nearest ancestor's when empty.
    pub roles: Vec<Role>,
    pub layout: bool,
}

impl ResolvedRoute {
    pub fn permits(&self, role: &Role) -> bool {
        self.roles.is_empty() || self.roles.contains(role)
    }
}

#[derive(Debug, Clone)]
pub(crate) struct TableNode {
    pub(crate) route: ResolvedRoute,
    pub(crate) icon: Option<String>,
    pub(crate) hidden: bool,
    pub(crate) children: Vec<TableNode>,
}

/// The validated, immutable route tree plus a by-path index.
#[derive(Debug, Clone)]
pub struct RouteTable {
    tree: Vec<TableNode>,
    index: BTreeMap<String, ResolvedRoute>,
}

impl RouteTable {
    /// Validate a declarative tree. Rejects empty segments, duplicate paths
    /// or names, and public routes that carry a roles constraint.
    pub fn new(routes: Vec<RouteDescriptor>) -> Result<Self, RouteTableError> {
        let mut index = BTreeMap::new();
        let mut names = BTreeSet::new();
        let tree = routes
            .into_iter()
            .map(|d| resolve(d, None, &mut index, &mut names))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { tree, index })
    }

    /// Exact lookup by full path. A trailing slash is ignored.
    pub fn get(&self, path: &str) -> Option<&ResolvedRoute> {
        self.index.get(normalize(path))
    }

    pub fn routes(&self) -> impl Iterator<Item = &ResolvedRoute> {
        self.index.values()
    }

    pub(crate) fn tree(&self) -> &[TableNode] {
        &self.tree
    }
}

fn normalize(path: &str) -> &str {
    if path.len() > 1 {
        path.trim_end_matches('/')
    } else {
        path
    }
}

/// `"/"` alone is the root. Otherwise one leading and one trailing slash are
/// allowed and every segment between them must be non-empty.
fn has_empty_segment(path: &str) -> bool {
    if path == "/" {
        return false;
    }
    let inner = path.strip_prefix('/').unwrap_or(path);
    let inner = inner.strip_suffix('/').unwrap_or(inner);
    inner.split('/').any(str::is_empty)
}

fn join(parent: Option<&str>, segment: &str) -> String {
    if segment.starts_with('/') {
        return normalize(segment).to_string();
    }
    let base = parent.map(normalize).unwrap_or("");
    format!("{}/{}", base.trim_end_matches('/'), normalize(segment))
}

fn resolve(
    descriptor: RouteDescriptor,
    parent: Option<&ResolvedRoute>,
    index: &mut BTreeMap<String, ResolvedRoute>,
    names: &mut BTreeSet<String>,
) -> Result<TableNode, RouteTableError> {
    if has_empty_segment(&descriptor.path) {
        return Err(RouteTableError::EmptySegment {
            parent: parent.map(|p| p.path.clone()).unwrap_or_else(|| "/".into()),
            path: descriptor.path,
        });
    }

    let path = join(parent.map(|p| p.path.as_str()), &descriptor.path);
    let requires_auth = descriptor.requires_auth || parent.is_some_and(|p| p.requires_auth);
    if !requires_auth && !descriptor.roles.is_empty() {
        return Err(RouteTableError::RolesWithoutAuth(path));
    }
    let roles = if descriptor.roles.is_empty() {
        parent.map(|p| p.roles.clone()).unwrap_or_default()
    } else {
        descriptor.roles
    };

    if !names.insert(descriptor.name.clone()) {
        return Err(RouteTableError::DuplicateName(descriptor.name));
    }
    if index.contains_key(&path) {
        return Err(RouteTableError::DuplicatePath(path));
    }

    let route = ResolvedRoute {
        path: path.clone(),
        name: descriptor.name,
        title: descriptor.title,
        requires_auth,
        roles,
        layout: descriptor.layout,
    };
    index.insert(path, route.clone());

    let children = descriptor
        .children
        .into_iter()
        .map(|child| resolve(child, Some(&route), index, names))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(TableNode {
        route,
        icon: descriptor.icon,
        hidden: descriptor.hidden,
        children,
    })
}

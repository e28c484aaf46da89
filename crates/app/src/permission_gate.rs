use crate::auth::use_auth;
use dioxus::prelude::*;

/// Check if the current session holds a permission string.
pub fn use_permission(permission: &str) -> bool {
    use_auth().has_permission(permission)
}

/// Conditionally render children based on a session permission.
/// Shows `fallback` if the permission is missing.
#[component]
pub fn PermissionGate(permission: String, fallback: Element, children: Element) -> Element {
    if use_permission(&permission) {
        rsx! { {children} }
    } else {
        rsx! { {fallback} }
    }
}

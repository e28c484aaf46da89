use shared_types::{GuardDecision, Session};
use tracing::debug;

use crate::resolver::PermissionResolver;

/// Decide what happens to a navigation towards `path`.
///
/// Rules, first match wins:
/// 1. the route requires auth and there is no session: go to login;
/// 2. there is a session and the target is the login route: go to the
///    role's landing route;
/// 3. the route is restricted to roles that exclude the session's role: go
///    to the role's landing route;
/// 4. otherwise allow, carrying the route title.
///
/// Paths missing from the table carry no constraint and are allowed, so the
/// router can render its not-found page.
pub fn evaluate(
    session: Option<&Session>,
    path: &str,
    resolver: &PermissionResolver,
) -> GuardDecision {
    let route = resolver.route(path);
    let requires_auth = route.is_some_and(|r| r.requires_auth);
    let restricted = route.is_some_and(|r| !r.roles.is_empty());

    let decision = match session {
        None if requires_auth => GuardDecision::RedirectLogin,
        Some(s) if resolver.is_login_path(path) => GuardDecision::RedirectDefault {
            to: resolver.default_route_for(s.role()).to_string(),
        },
        Some(s) if restricted && !resolver.is_authorized(s.role(), path) => {
            GuardDecision::RedirectDefault {
                to: resolver.default_route_for(s.role()).to_string(),
            }
        }
        _ => GuardDecision::Allow {
            title: route.and_then(|r| r.title.clone()),
        },
    };

    debug!(
        path,
        logged_in = session.is_some(),
        role = session.map(|s| s.role().as_str()).unwrap_or("-"),
        requires_auth,
        ?decision,
        "Navigation guard"
    );
    decision
}

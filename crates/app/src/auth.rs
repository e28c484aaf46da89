use access::SessionStore;
use dioxus::prelude::*;
use shared_types::{AuthError, MenuEntry, Role, Session, UserRecord};

use crate::portal::use_portal;
use crate::storage::{platform_storage, PlatformStorage};

/// Global authentication state.
///
/// Wraps the session store in a signal so every component reading the
/// session re-renders on login and logout. `restored` flips once the
/// persisted mirror has been read on the client.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AuthState {
    pub store: Signal<SessionStore<PlatformStorage>>,
    pub restored: Signal<bool>,
}

impl AuthState {
    pub fn new() -> Self {
        Self {
            store: Signal::new(SessionStore::new(platform_storage())),
            restored: Signal::new(false),
        }
    }

    /// Pick up the persisted session. Runs once, after hydration.
    pub fn restore(&mut self) {
        self.store.write().restore();
        self.restored.set(true);
    }

    pub fn is_restored(&self) -> bool {
        *self.restored.read()
    }

    pub fn session(&self) -> Option<Session> {
        self.store.read().session().cloned()
    }

    pub fn role(&self) -> Option<Role> {
        self.store.read().role().cloned()
    }


    pub fn has_permission(&self, permission: &str) -> bool {
        self.store.read().has_permission(permission)
    }

    pub fn sign_in(&mut self, record: UserRecord) -> Result<Session, AuthError> {
        self.store.write().login_with_record(record)
    }

    pub fn sign_out(&mut self) {
        self.store.write().logout();
    }
}

/// Hook to access auth state.
pub fn use_auth() -> AuthState {
    use_context::<AuthState>()
}

/// The menu for the current role, recomputed only when the role changes.
pub fn use_visible_menu() -> Memo<Vec<MenuEntry>> {
    let auth = use_auth();
    let portal = use_portal();
    let role = use_memo(move || auth.role());
    use_memo(move || {
        role()
            .map(|r| portal.resolver().visible_menu(&r))
            .unwrap_or_default()
    })
}

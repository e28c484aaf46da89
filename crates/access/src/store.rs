use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use shared_types::{AuthError, LoginRequest, MalformedSessionError, Role, Session, UserRecord};

use crate::directory::Authenticator;
use crate::storage::KeyValueStore;

/// Storage key holding the serialized session mirror.
pub const USER_INFO_KEY: &str = "userInfo";
/// Storage key holding `"true"` while a session is persisted.
pub const LOGGED_IN_KEY: &str = "isLoggedIn";

/// On-disk shape of the mirror. `id` and `roles` are accepted for older
/// payloads written before the single-role schema.
#[derive(Debug, Serialize, Deserialize)]
struct PersistedSession {
    #[serde(alias = "id")]
    user_id: i64,
    username: String,
    #[serde(default)]
    role: Option<Role>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    roles: Vec<Role>,
    #[serde(default)]
    permissions: Vec<String>,
    #[serde(default)]
    token: String,
}

impl From<&Session> for PersistedSession {
    fn from(session: &Session) -> Self {
        Self {
            user_id: session.user_id(),
            username: session.username().to_string(),
            role: Some(session.role().clone()),
            roles: Vec::new(),
            permissions: session.permissions().iter().cloned().collect(),
            token: session.token().to_string(),
        }
    }
}

impl PersistedSession {
    fn into_session(self) -> Result<Session, MalformedSessionError> {
        let record = UserRecord {
            id: self.user_id,
            username: self.username,
            role: self.role,
            roles: self.roles,
            permissions: self.permissions,
        };
        Session::new(record, self.token).map_err(|e| MalformedSessionError::new(e.to_string()))
    }
}

/// Synthetic session token handed out by the mock login.
fn mint_token(username: &str) -> String {
    format!("mock-token-{}-{}", username, Utc::now().timestamp_millis())
}

/// Owns the current session and its persisted mirror.
#[derive(Debug)]
pub struct SessionStore<S> {
    storage: S,
    session: Option<Session>,
}

impl<S: KeyValueStore> SessionStore<S> {
    /// An empty store. Call [`SessionStore::restore`] once to pick up a
    /// persisted session.
    pub fn new(storage: S) -> Self {
        Self {
            storage,
            session: None,
        }
    }

    /// Authenticate against `directory` and start a session for the result.
    pub fn login<A: Authenticator>(
        &mut self,
        credentials: &LoginRequest,
        directory: &A,
    ) -> Result<Session, AuthError> {
        let record = directory.authenticate(credentials).map_err(|e| {
            info!(username = %credentials.username, error = %e, "Login rejected");
            e
        })?;
        self.login_with_record(record)
    }

    /// Start a session for an already validated user record.
    ///
    /// Replaces any current session wholesale and persists the mirror. A
    /// failed mirror write is logged; the in-memory session still stands.
    pub fn login_with_record(&mut self, record: UserRecord) -> Result<Session, AuthError> {
        let token = mint_token(&record.username);
        let session = Session::new(record, token)?;
        self.persist(&session);
        info!(
            user_id = session.user_id(),
            username = session.username(),
            role = %session.role(),
            "Session started"
        );
        self.session = Some(session.clone());
        Ok(session)
    }

    /// Clear the session and its mirror. Calling it again is a no-op.
    pub fn logout(&mut self) {
        if let Some(session) = self.session.take() {
            info!(username = session.username(), "Session cleared");
        }
        self.storage.remove(USER_INFO_KEY);
        self.storage.remove(LOGGED_IN_KEY);
    }

    /// Rehydrate from the mirror. Absent or malformed data leaves the store
    /// logged out; nothing is written back.
    pub fn restore(&mut self) -> Option<&Session> {
        self.session = match self.read_mirror() {
            Ok(Some(session)) => {
                info!(username = session.username(), role = %session.role(), "Session restored");
                Some(session)
            }
            Ok(None) => {
                debug!("No persisted session");
                None
            }
            Err(e) => {
                warn!(error = %e, "Ignoring persisted session");
                None
            }
        };
        self.session.as_ref()
    }

    fn read_mirror(&self) -> Result<Option<Session>, MalformedSessionError> {
        if self.storage.get(LOGGED_IN_KEY).as_deref() != Some("true") {
            return Ok(None);
        }
        let raw = self
            .storage
            .get(USER_INFO_KEY)
            .ok_or_else(|| MalformedSessionError::new("logged-in flag set without user info"))?;
        let persisted: PersistedSession =
            serde_json::from_str(&raw).map_err(|e| MalformedSessionError::new(e.to_string()))?;
        persisted.into_session().map(Some)
    }

    fn persist(&mut self, session: &Session) {
        let payload = match serde_json::to_string(&PersistedSession::from(session)) {
            Ok(json) => json,
            Err(e) => {
                warn!(error = %e, "Failed to serialize session mirror");
                return;
            }
        };
        let written = self
            .storage
            .set(USER_INFO_KEY, &payload)
            .and_then(|_| self.storage.set(LOGGED_IN_KEY, "true"));
        if let Err(e) = written {
            warn!(error = %e, "Session will not survive a reload");
        }
    }

    pub fn session(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    pub fn role(&self) -> Option<&Role> {
        self.session.as_ref().map(Session::role)
    }

    pub fn is_logged_in(&self) -> bool {
        self.session.is_some()
    }

    pub fn has_role(&self, role: &Role) -> bool {
        self.session.as_ref().is_some_and(|s| s.has_role(role))
    }

    pub fn has_permission(&self, permission: &str) -> bool {
        self.session
            .as_ref()
            .is_some_and(|s| s.has_permission(permission))
    }
}

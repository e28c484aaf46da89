use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

use crate::error::AuthError;

/// Portal role controlling which dashboards a user may open.
///
/// - `SalesManager`: sales overview, heat map, time series and forecasts.
/// - `Customer`: rankings, model comparison, recommendations, fuel economy.
/// - `ProductManager`: recognized by the backend, no dashboards assigned yet.
/// - `Other`: any other label, kept verbatim so it round-trips unchanged.
///
/// Serialized as the plain role string (`"SalesManager"`, `"Customer"`, ...).
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Role {
    SalesManager,
    Customer,
    ProductManager,
    Other(String),
}

impl Role {
    /// Parse a role label. Matching is exact; unknown labels become `Other`.
    pub fn parse(s: &str) -> Self {
        match s {
            "SalesManager" => Role::SalesManager,
            "Customer" => Role::Customer,
            "ProductManager" => Role::ProductManager,
            other => Role::Other(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Role::SalesManager => "SalesManager",
            Role::Customer => "Customer",
            Role::ProductManager => "ProductManager",
            Role::Other(label) => label,
        }
    }

    /// Human-readable name for the sidebar footer.
    pub fn display_name(&self) -> &str {
        match self {
            Role::SalesManager => "Sales Manager",
            Role::Customer => "Customer",
            Role::ProductManager => "Product Manager",
            Role::Other(label) => label,
        }
    }
}

impl From<String> for Role {
    fn from(s: String) -> Self {
        Role::parse(&s)
    }
}

impl From<Role> for String {
    fn from(role: Role) -> Self {
        match role {
            Role::Other(label) => label,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// User record returned by the login collaborator.
///
/// Accepts both the backend shape (`user_id`, single `role`) and the older
/// front-end shape (`id`, `roles` array).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UserRecord {
    #[serde(alias = "user_id")]
    pub id: i64,
    pub username: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<Role>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub roles: Vec<Role>,
    #[serde(default)]
    pub permissions: Vec<String>,
}

impl UserRecord {
    /// The single role a session is built around: `role`, else the first of `roles`.
    pub fn primary_role(&self) -> Option<&Role> {
        self.role.as_ref().or_else(|| self.roles.first())
    }
}

/// Login request.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "validation", derive(validator::Validate))]
pub struct LoginRequest {
    #[cfg_attr(
        feature = "validation",
        validate(length(min = 1, message = "Username is required"))
    )]
    pub username: String,
    #[cfg_attr(
        feature = "validation",
        validate(length(min = 1, message = "Password is required"))
    )]
    pub password: String,
}

/// An authenticated session.
///
/// Only constructible through [`Session::new`], which refuses a record
/// without a role or an empty token. Holding a `Session` therefore means
/// "logged in".
#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    user_id: i64,
    username: String,
    role: Role,
    permissions: BTreeSet<String>,
    token: String,
}

impl Session {
    pub fn new(record: UserRecord, token: impl Into<String>) -> Result<Self, AuthError> {
        let token = token.into();
        if token.is_empty() {
            return Err(AuthError::InvalidRequest("session token is empty".into()));
        }
        let role = record
            .primary_role()
            .cloned()
            .ok_or_else(|| AuthError::MissingRole {
                username: record.username.clone(),
            })?;
        Ok(Self {
            user_id: record.id,
            username: record.username,
            role,
            permissions: record.permissions.into_iter().collect(),
            token,
        })
    }

    pub fn user_id(&self) -> i64 {
        self.user_id
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn role(&self) -> &Role {
        &self.role
    }

    pub fn permissions(&self) -> &BTreeSet<String> {
        &self.permissions
    }

    pub fn token(&self) -> &str {
        &self.token
    }

    /// Exact match against the session's single role.
    pub fn has_role(&self, role: &Role) -> bool {
        &self.role == role
    }

    pub fn has_permission(&self, permission: &str) -> bool {
        self.permissions.contains(permission)
    }
}

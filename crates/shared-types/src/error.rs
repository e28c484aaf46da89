use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Categorization of errors crossing the server function boundary.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum AppErrorKind {
    BadRequest,
    ValidationError,
    Unauthorized,
}

impl fmt::Display for AppErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppErrorKind::BadRequest => write!(f, "BadRequest"),
            AppErrorKind::ValidationError => write!(f, "ValidationError"),
            AppErrorKind::Unauthorized => write!(f, "Unauthorized"),
        }
    }
}

/// Structured error serialized into `ServerFnError` payloads.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AppError {
    pub kind: AppErrorKind,
    pub message: String,
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub field_errors: HashMap<String, String>,
}

impl AppError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            kind: AppErrorKind::BadRequest,
            message: message.into(),
            field_errors: HashMap::new(),
        }
    }

    pub fn validation(message: impl Into<String>, field_errors: HashMap<String, String>) -> Self {
        Self {
            kind: AppErrorKind::ValidationError,
            message: message.into(),
            field_errors,
        }
    }

    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self {
            kind: AppErrorKind::Unauthorized,
            message: message.into(),
            field_errors: HashMap::new(),
        }
    }

    /// Parse an AppError out of a `ServerFnError` message string (client-side).
    ///
    /// `ServerFnError::to_string()` wraps the payload like:
    ///   `error running server function: {"kind":"Unauthorized",...} (details: None)`
    pub fn from_server_error(error_message: &str) -> Option<Self> {
        if let Ok(err) = serde_json::from_str::<Self>(error_message) {
            return Some(err);
        }
        let start = error_message.find('{')?;
        let end = error_message.rfind('}')?;
        if end > start {
            serde_json::from_str(&error_message[start..=end]).ok()
        } else {
            None
        }
    }

    /// Per-field validation errors embedded in a server error string.
    pub fn parse_field_errors(error_string: &str) -> HashMap<String, String> {
        Self::from_server_error(error_string)
            .map(|e| e.field_errors)
            .unwrap_or_default()
    }

    /// Message to show the user, with a generic fallback for unparseable errors.
    pub fn friendly_message(error_string: &str) -> String {
        if let Some(app_error) = Self::from_server_error(error_string) {
            app_error.message
        } else {
            "Something went wrong. Please try again.".to_string()
        }
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind, self.message)
    }
}

impl std::error::Error for AppError {}

#[cfg(feature = "validation")]
impl From<validator::ValidationErrors> for AppError {
    fn from(errors: validator::ValidationErrors) -> Self {
        let mut field_errors = HashMap::new();
        for (field, errs) in errors.field_errors() {
            if let Some(first) = errs.first() {
                let msg = first
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| format!("Invalid value for {}", field));
                field_errors.insert(field.to_string(), msg);
            }
        }
        AppError::validation("Validation failed", field_errors)
    }
}

/// Login failures. Shown to the user; never retried automatically.
#[derive(Debug, Clone, PartialEq)]
pub enum AuthError {
    InvalidCredentials,
    /// The collaborator returned a record with no role to build a session on.
    MissingRole { username: String },
    InvalidRequest(String),
}

impl fmt::Display for AuthError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AuthError::InvalidCredentials => write!(f, "Invalid username or password"),
            AuthError::MissingRole { username } => {
                write!(f, "Account {username} has no role assigned")
            }
            AuthError::InvalidRequest(reason) => write!(f, "Invalid login request: {reason}"),
        }
    }
}

impl std::error::Error for AuthError {}

impl From<AuthError> for AppError {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::InvalidRequest(_) => AppError::bad_request(err.to_string()),
            _ => AppError::unauthorized(err.to_string()),
        }
    }
}

/// The persisted session mirror could not be read back.
#[derive(Debug, Clone, PartialEq)]
pub struct MalformedSessionError {
    pub reason: String,
}

impl MalformedSessionError {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

impl fmt::Display for MalformedSessionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "malformed persisted session: {}", self.reason)
    }
}

impl std::error::Error for MalformedSessionError {}

/// Writing to the key-value store failed (quota, private mode, ...).
#[derive(Debug, Clone, PartialEq)]
pub struct StorageError {
    pub key: String,
    pub message: String,
}

impl fmt::Display for StorageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "storage write for '{}' failed: {}", self.key, self.message)
    }
}

impl std::error::Error for StorageError {}

/// Static route data rejected at startup.
#[derive(Debug, Clone, PartialEq)]
pub enum RouteTableError {
    EmptySegment { parent: String, path: String },
    DuplicatePath(String),
    DuplicateName(String),
    /// A public route carries a roles constraint it could never enforce.
    RolesWithoutAuth(String),
    UnknownRoute { purpose: String, path: String },
    /// A role's landing route would bounce the role straight back.
    UnreachableDefault { role: String, path: String },
    FallbackRestricted(String),
    /// A landing route that only groups children and renders no page.
    LayoutLanding { purpose: String, path: String },
}

impl fmt::Display for RouteTableError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RouteTableError::EmptySegment { parent, path } => {
                write!(f, "route '{path}' under '{parent}' has an empty path segment")
            }
            RouteTableError::DuplicatePath(path) => write!(f, "duplicate route path '{path}'"),
            RouteTableError::DuplicateName(name) => write!(f, "duplicate route name '{name}'"),
            RouteTableError::RolesWithoutAuth(path) => {
                write!(f, "route '{path}' declares roles but does not require auth")
            }
            RouteTableError::UnknownRoute { purpose, path } => {
                write!(f, "{purpose} route '{path}' is not in the route table")
            }
            RouteTableError::UnreachableDefault { role, path } => {
                write!(f, "default route '{path}' is not authorized for role {role}")
            }
            RouteTableError::FallbackRestricted(path) => write!(
                f,
                "fallback route '{path}' must be open to every role and not be the login route"
            ),
            RouteTableError::LayoutLanding { purpose, path } => {
                write!(f, "{purpose} route '{path}' is a layout and has no page to land on")
            }
        }
    }
}

impl std::error::Error for RouteTableError {}

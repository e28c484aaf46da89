use dioxus::prelude::*;
use shared_types::{PortalConfig, UserRecord};

#[cfg(feature = "server")]
use crate::error_convert::AppErrorExt;

/// Portal settings from `config.toml`. No auth required.
#[server]
pub async fn get_portal_config() -> Result<PortalConfig, ServerFnError> {
    Ok(crate::config::portal_config().clone())
}

/// Check credentials against the mock directory after the configured delay.
///
/// Returns the account's user record; the client turns it into a session.
#[cfg_attr(feature = "server", tracing::instrument(skip(password)))]
#[server]
pub async fn login(username: String, password: String) -> Result<UserRecord, ServerFnError> {
    use access::MockDirectory;
    use shared_types::LoginRequest;
    use std::time::Duration;

    let req = LoginRequest { username, password };
    let latency = Duration::from_millis(crate::config::portal_config().portal.login_latency_ms);

    let record = crate::login::delayed_login(&req, &MockDirectory::demo(), latency)
        .await
        .map_err(|e| e.into_server_fn_error())?;
    tracing::info!(user_id = record.id, "Login accepted");
    Ok(record)
}

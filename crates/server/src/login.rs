use std::time::Duration;

use access::{Authenticator, MockDirectory};
use shared_types::{AppError, LoginRequest, UserRecord};

use crate::error_convert::ValidateRequest;

/// Validate the request and look the account up in the mock allow-list.
pub fn verify_login(req: &LoginRequest, directory: &MockDirectory) -> Result<UserRecord, AppError> {
    req.validate_request()?;
    directory.authenticate(req).map_err(|e| {
        tracing::info!(username = %req.username, error = %e, "Login rejected");
        AppError::from(e)
    })
}

/// [`verify_login`] after the configured artificial delay.
pub async fn delayed_login(
    req: &LoginRequest,
    directory: &MockDirectory,
    latency: Duration,
) -> Result<UserRecord, AppError> {
    if !latency.is_zero() {
        tokio::time::sleep(latency).await;
    }
    verify_login(req, directory)
}

use reqwest::Method;
use serde::Deserialize;
use types::{AuthError, LoginCredentials, LoginResponse};

use crate::{ApiClient, ReqwestExt};

pub const LOGIN_PATH: &str = "/api/v1/auth/login";

#[derive(Deserialize)]
struct Rejection {
    #[serde(default)]
    detail: Option<serde_json::Value>,
}

impl ApiClient {
    /// Exchange credentials for a bearer token. Never retried.
    pub async fn login(&self, credentials: &LoginCredentials) -> Result<LoginResponse, AuthError> {
        let (status, body) = self
            .request(Method::POST, LOGIN_PATH)
            .map_err(|e| AuthError::new(e.to_string()))?
            .json(credentials)
            .fetch_body()
            .await
            .map_err(|error| {
                tracing::warn!(%error, "login request failed");
                AuthError::new(error.to_string())
            })?;

        if !status.is_success() {
            tracing::warn!(%status, email = %credentials.email, "login rejected");
            return Err(rejection_error(&body));
        }

        serde_json::from_slice(&body).map_err(|error| {
            tracing::warn!(%error, "unexpected login response");
            AuthError::new(error.to_string())
        })
    }
}

/// Uses the backend's `detail` when it is a non-empty string.
fn rejection_error(body: &[u8]) -> AuthError {
    serde_json::from_slice::<Rejection>(body)
        .ok()
        .and_then(|r| r.detail)
        .and_then(|d| d.as_str().map(str::to_string))
        .filter(|d| !d.is_empty())
        .map(AuthError::new)
        .unwrap_or_default()
}

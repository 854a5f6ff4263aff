use reqwest::Method;
use secrecy::{ExposeSecret, SecretString};
use types::{DashboardModel, FetchError};

use crate::{ApiClient, ReqwestExt};

pub const DASHBOARD_PATH: &str = "/api/v1/analytics/dashboard";

impl ApiClient {
    /// Fetch the analytics snapshot. Any non-success status maps to the same
    /// generic error; the response body is not inspected.
    pub async fn fetch_dashboard(&self, token: &SecretString) -> Result<DashboardModel, FetchError> {
        let (status, body) = self
            .request(Method::GET, DASHBOARD_PATH)
            .map_err(|e| FetchError::new(e.to_string()))?
            .bearer_auth(token.expose_secret())
            .fetch_body()
            .await
            .map_err(|error| {
                tracing::warn!(%error, "dashboard request failed");
                FetchError::new(error.to_string())
            })?;

        if !status.is_success() {
            tracing::warn!(%status, "dashboard request rejected");
            return Err(FetchError::default());
        }

        serde_json::from_slice(&body).map_err(|error| {
            tracing::warn!(%error, "unexpected dashboard payload");
            FetchError::new(error.to_string())
        })
    }
}

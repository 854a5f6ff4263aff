//! HTTP clients for the BeFit backend.
//!
//! Both clients share one [`ApiClient`], built from the configured base URL.
//! Failures are flattened into a single user-facing message.

use reqwest::{Client, Method, RequestBuilder, StatusCode, Url};

mod analytics;
mod auth;

pub use analytics::DASHBOARD_PATH;
pub use auth::LOGIN_PATH;

trait ReqwestExt {
    async fn fetch_body(self) -> Result<(StatusCode, Vec<u8>), reqwest::Error>;
}

impl ReqwestExt for RequestBuilder {
    async fn fetch_body(self) -> Result<(StatusCode, Vec<u8>), reqwest::Error> {
        let response = self.send().await?;
        let status = response.status();
        let body = response.bytes().await?;

        Ok((status, body.to_vec()))
    }
}

#[derive(Clone, Debug)]
pub struct ApiClient {
    client: Client,
    base_url: Url,
}

impl ApiClient {
    pub fn new(base_url: Url) -> Self {
        Self {
            client: Client::new(),
            base_url,
        }
    }

    fn request(&self, method: Method, path: &str) -> Result<RequestBuilder, url::ParseError> {
        let url = self.base_url.join(path)?;
        tracing::debug!(%method, %url, "backend request");

        Ok(self.client.request(method, url))
    }
}

impl PartialEq for ApiClient {
    fn eq(&self, other: &Self) -> bool {
        self.base_url == other.base_url
    }
}

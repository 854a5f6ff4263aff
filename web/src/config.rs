use anyhow::{Context, Result, bail};
use url::Url;

pub const DEFAULT_API_URL: &str = "http://localhost:8000";

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Origin of the backend serving `/api/v1/...`.
    pub api_base_url: Url,
}

impl Config {
    /// Reads `BEFIT_API_URL` as it was set when the bundle was built.
    pub fn from_env() -> Result<Self> {
        Self::parse(option_env!("BEFIT_API_URL"))
    }

    fn parse(raw: Option<&str>) -> Result<Self> {
        let raw = raw
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .unwrap_or(DEFAULT_API_URL);

        let api_base_url =
            Url::parse(raw).with_context(|| format!("invalid BEFIT_API_URL: {raw}"))?;
        if !matches!(api_base_url.scheme(), "http" | "https") {
            bail!("BEFIT_API_URL must be an http(s) URL, got {raw}");
        }

        Ok(Self { api_base_url })
    }
}

use crate::transport::JobTransport;
use crate::{Error, Result};
use async_trait::async_trait;
use std::env;
use std::time::Duration;

/// Identifies this client to the API, mirroring the other SharpAPI SDKs.
const USER_AGENT: &str = "sharpapi-rust-hospitality-categories/1.0.1";

/// Default reqwest-backed transport. Applies bearer auth and JSON content
/// negotiation; surfaces remote errors unmodified.
pub struct HttpTransport {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl HttpTransport {
    pub fn new(api_key: &str, base_url: &str, timeout_secs: u64) -> Result<Self> {
        // Env override wins over the builder-configured timeout.
        let timeout_secs = env::var("SHARP_API_HTTP_TIMEOUT_SECS")
            .ok()
            .and_then(|s| s.parse::<u64>().ok())
            .unwrap_or(timeout_secs);

        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| Error::Transport(TransportError::Other(e.to_string())))?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
        })
    }
}

#[async_trait]
impl JobTransport for HttpTransport {
    async fn post_json(&self, path: &str, body: &serde_json::Value) -> Result<serde_json::Value> {
        let url = format!("{}{}", self.base_url, path);
        tracing::debug!(%url, "dispatching SharpAPI job");

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .header("accept", "application/json")
            .json(body)
            .send()
            .await
            .map_err(|e| Error::Transport(TransportError::Http(e)))?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| Error::Transport(TransportError::Http(e)))?;

        if !status.is_success() {
            tracing::warn!(status = status.as_u16(), "SharpAPI dispatch rejected");
            return Err(Error::Api {
                status: status.as_u16(),
                message: text,
            });
        }

        let json = serde_json::from_str(&text)?;
        Ok(json)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Transport error: {0}")]
    Other(String),
}

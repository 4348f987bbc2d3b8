//! HTTP access to the ledger REST API.

use reqwest::StatusCode;
use serde::{Serialize, de::DeserializeOwned};
use tracing::debug;

use crate::config::LedgerConfig;
use crate::error::Result;

/// Raw reply to a submission: status plus undecoded body.
#[derive(Debug)]
pub struct Reply {
    pub status: StatusCode,
    pub body: String,
}

/// Ledger API Client
///
/// This client is a wrapper around [`reqwest::Client`] with a known API base URL.
pub struct LedgerClient {
    config: LedgerConfig,
    client: reqwest::Client,
}

impl LedgerClient {
    /// Builds a new [`LedgerClient`] from `config`.
    pub fn new(config: &LedgerConfig) -> Result<Self> {
        Ok(Self {
            client: reqwest::Client::builder().timeout(config.timeout).build()?,
            config: config.clone(),
        })
    }

    /// POSTs `body` as JSON to `resource`. Any HTTP status is returned as-is.
    pub async fn post_json<T>(&self, resource: &str, body: &T) -> Result<Reply>
    where
        T: Serialize,
    {
        let url = self.config.resource_url(resource);
        debug!("POST {}", url);
        let response = self.client.post(&url).json(body).send().await?;
        let status = response.status();
        let body = response.text().await?;
        debug!("POST {} -> {}", url, status);
        Ok(Reply { status, body })
    }

    /// GETs `resource` and decodes the body as JSON, whatever the status.
    pub async fn get_json<R>(&self, resource: &str) -> Result<R>
    where
        R: DeserializeOwned,
    {
        let url = self.config.resource_url(resource);
        debug!("GET {}", url);
        let response = self.client.get(&url).send().await?;
        let status = response.status();
        let body = response.text().await?;
        debug!("GET {} -> {} ({} bytes)", url, status, body.len());
        Ok(serde_json::from_str(&body)?)
    }
}

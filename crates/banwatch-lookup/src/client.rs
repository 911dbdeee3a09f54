//! Anti-cheat ban API client.
//!
//! One HTTP GET per lookup, no retries. The service wraps records in a
//! status envelope; an envelope without data is a confirmed empty answer,
//! which callers treat differently from a failed call.

use async_trait::async_trait;
use banwatch_core::{
    config::LookupConfig, error::BanwatchError, record::BanStatusRecord, traits::BanLookup,
};
use serde::Deserialize;
use std::time::Duration;
use tracing::debug;

/// Client for the ban status HTTP API.
pub struct BanApiClient {
    client: reqwest::Client,
    base_url: String,
}

impl BanApiClient {
    /// Create from config values.
    pub fn from_config(config: &LookupConfig) -> Result<Self, BanwatchError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| BanwatchError::Lookup(format!("failed to build http client: {e}")))?;
        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    fn endpoint(&self, account_id: &str) -> String {
        format!("{}/check/{}", self.base_url, account_id)
    }
}

// --- Serde types ---

#[derive(Debug, Deserialize)]
struct LookupResponse {
    #[serde(default)]
    status: Option<String>,
    #[serde(default)]
    data: Option<BanStatusRecord>,
    #[serde(default)]
    message: Option<String>,
}

#[async_trait]
impl BanLookup for BanApiClient {
    fn name(&self) -> &str {
        "ban-api"
    }

    async fn lookup(&self, account_id: &str) -> Result<Option<BanStatusRecord>, BanwatchError> {
        let url = self.endpoint(account_id);
        debug!("lookup: GET {url}");

        let resp = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| BanwatchError::Lookup(format!("ban api request failed: {e}")))?;

        // The service answers 404 for accounts it has never seen.
        if resp.status() == reqwest::StatusCode::NOT_FOUND {
            return Ok(None);
        }
        if !resp.status().is_success() {
            let status = resp.status();
            let text = resp.text().await.unwrap_or_default();
            return Err(BanwatchError::Lookup(format!(
                "ban api returned {status}: {text}"
            )));
        }

        let parsed: LookupResponse = resp.json().await.map_err(|e| {
            BanwatchError::Lookup(format!("ban api: failed to parse response: {e}"))
        })?;

        if let Some(status) = parsed.status.as_deref() {
            if status != "success" {
                let cause = parsed.message.unwrap_or_else(|| status.to_string());
                return Err(BanwatchError::Lookup(format!("ban api error: {cause}")));
            }
        }

        Ok(parsed.data)
    }
}

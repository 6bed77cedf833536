use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;
use tokio::time::timeout;

use crate::config::ApiConfig;
use crate::fact::error::FactError;
use crate::fact::source::FactSource;

/// Longest upstream error body echoed back in [`FactError::Upstream`].
const MAX_ERROR_BODY: usize = 200;

#[derive(Debug, Deserialize)]
struct FactResponse {
    fact: String,
}

/// HTTP client for the catfact.ninja `/fact` endpoint.
pub struct CatFactClient {
    client: Client,
    url: String,
    request_timeout: Duration,
}

impl CatFactClient {
    pub fn new(config: &ApiConfig) -> Result<Self, FactError> {
        let client = Client::builder()
            .connect_timeout(config.connect_timeout())
            .build()
            .map_err(|e| FactError::Client(e.to_string()))?;

        Ok(Self {
            client,
            url: fact_url(&config.base_url, config.max_length),
            request_timeout: config.request_timeout(),
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    async fn do_fetch(&self) -> Result<String, FactError> {
        let response = self
            .client
            .get(&self.url)
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .await
            .map_err(|e| FactError::Connection {
                url: self.url.clone(),
                source: e,
            })?;

        let status = response.status();
        let body = response.bytes().await.map_err(|e| FactError::Connection {
            url: self.url.clone(),
            source: e,
        })?;

        if !status.is_success() {
            let message: String = String::from_utf8_lossy(&body)
                .chars()
                .take(MAX_ERROR_BODY)
                .collect();
            return Err(FactError::Upstream {
                status: status.as_u16(),
                message,
            });
        }

        let parsed: FactResponse = serde_json::from_slice(&body).map_err(|e| FactError::Decode {
            message: e.to_string(),
        })?;

        let fact = parsed.fact.trim();
        if fact.is_empty() {
            return Err(FactError::Decode {
                message: "empty fact".to_string(),
            });
        }
        Ok(fact.to_string())
    }
}

#[async_trait]
impl FactSource for CatFactClient {
    fn name(&self) -> &'static str {
        "catfact.ninja"
    }

    async fn fetch_fact(&self) -> Result<String, FactError> {
        tracing::debug!(url = %self.url, "fetching fact");
        match timeout(self.request_timeout, self.do_fetch()).await {
            Ok(result) => result,
            Err(_) => Err(FactError::Timeout {
                duration: self.request_timeout.as_secs(),
            }),
        }
    }
}

fn fact_url(base_url: &str, max_length: u32) -> String {
    format!(
        "{}/fact?max_length={}",
        base_url.trim().trim_end_matches('/'),
        max_length
    )
}

// crates/gateway/src/client.rs
//! HTTP client wrapper for the catalog service

use crate::error::{GatewayError, GatewayResult};
use reqwest::{Client as ReqwestClient, RequestBuilder};
use serde::de::DeserializeOwned;
use std::time::Duration;

/// HTTP client configuration
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL of the catalog service
    pub base_url: String,
    /// Connect and read timeout
    pub timeout: Duration,
    /// User agent string
    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8089".to_string(),
            timeout: Duration::from_secs(30),
            user_agent: format!("Readstack/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

/// HTTP client bound to a catalog service host
#[derive(Debug, Clone)]
pub struct Client {
    inner: ReqwestClient,
    base_url: String,
}

impl Client {
    /// Creates a client for the given base URL with default settings
    pub fn new(base_url: impl Into<String>) -> GatewayResult<Self> {
        Self::with_config(ClientConfig {
            base_url: base_url.into(),
            ..ClientConfig::default()
        })
    }

    /// Creates a client with custom configuration
    pub fn with_config(config: ClientConfig) -> GatewayResult<Self> {
        let inner = ReqwestClient::builder()
            .connect_timeout(config.timeout)
            .timeout(config.timeout)
            .user_agent(&config.user_agent)
            .build()
            .map_err(GatewayError::Http)?;

        Ok(Self {
            inner,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Starts a GET request for a path relative to the base URL
    pub(crate) fn get(&self, path: &str) -> RequestBuilder {
        self.inner.get(self.url(path))
    }

    /// Starts a POST request for a path relative to the base URL
    pub(crate) fn post(&self, path: &str) -> RequestBuilder {
        self.inner.post(self.url(path))
    }

    /// Sends a request and decodes a JSON body
    ///
    /// Returns `Ok(None)` for a success response with an empty body (the
    /// server leaves bodies out for some lookups). Non-success statuses
    /// become [`GatewayError::Status`] with the error body text kept.
    pub(crate) async fn send<T: DeserializeOwned>(
        &self,
        request: RequestBuilder,
    ) -> GatewayResult<Option<T>> {
        let response = request.send().await?;
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.ok().filter(|b| !b.is_empty());
            log::debug!("gateway request rejected: HTTP {} body {:?}", status, body);
            return Err(GatewayError::Status {
                code: status.as_u16(),
                body,
            });
        }

        let text = response.text().await?;
        if text.trim().is_empty() {
            return Ok(None);
        }

        serde_json::from_str(&text)
            .map(Some)
            .map_err(|e| GatewayError::Decode(e.to_string()))
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }
}

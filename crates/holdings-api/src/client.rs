//! HTTP transport for holdings requests.

use std::time::Duration;

use async_trait::async_trait;
use log::{debug, warn};
use reqwest::Client;
use serde::de::DeserializeOwned;

use crate::endpoint::Endpoint;
use crate::errors::ApiError;

/// Request timeout used when none is configured.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Sends a request described by an [`Endpoint`] and decodes the JSON body.
///
/// Implementations issue exactly one request per call.
#[async_trait]
pub trait NetworkClient: Send + Sync {
    async fn send<T>(&self, endpoint: &dyn Endpoint) -> Result<T, ApiError>
    where
        T: DeserializeOwned + Send;
}

/// [`NetworkClient`] backed by `reqwest`.
#[derive(Clone)]
pub struct HttpNetworkClient {
    client: Client,
}

impl HttpNetworkClient {
    pub fn new(timeout: Duration) -> Self {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .unwrap_or_else(|_| Client::new());

        Self { client }
    }
}

impl Default for HttpNetworkClient {
    fn default() -> Self {
        Self::new(DEFAULT_TIMEOUT)
    }
}

#[async_trait]
impl NetworkClient for HttpNetworkClient {
    async fn send<T>(&self, endpoint: &dyn Endpoint) -> Result<T, ApiError>
    where
        T: DeserializeOwned + Send,
    {
        let url = endpoint.url()?;
        let method = endpoint.method();
        debug!("{} {}", method.as_str(), url);

        let response = self.client.request(method.into(), url).send().await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.ok().filter(|b| !b.is_empty());
            warn!("Holdings request failed with HTTP {}", status);
            return Err(ApiError::Server {
                status: status.as_u16(),
                body,
            });
        }

        let bytes = response.bytes().await?;
        serde_json::from_slice(&bytes).map_err(|e| {
            warn!("Failed to decode {} byte response: {}", bytes.len(), e);
            ApiError::from(e)
        })
    }
}

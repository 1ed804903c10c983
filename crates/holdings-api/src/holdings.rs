use async_trait::async_trait;
use log::debug;

use crate::client::{HttpNetworkClient, NetworkClient};
use crate::endpoint::{Endpoint, HttpMethod};
use crate::errors::ApiError;
use crate::models::HoldingsResponse;

/// Fixed endpoint serving the user's holdings.
pub const DEFAULT_HOLDINGS_URL: &str = "https://35dee773a9ec441e9f38d5fc249406ce.api.mockbin.io/";

#[derive(Debug, Clone)]
pub struct HoldingsEndpoint {
    base_url: String,
}

impl HoldingsEndpoint {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }
}

impl Default for HoldingsEndpoint {
    fn default() -> Self {
        Self::new(DEFAULT_HOLDINGS_URL)
    }
}

impl Endpoint for HoldingsEndpoint {
    fn base_url(&self) -> &str {
        &self.base_url
    }

    fn path(&self) -> &str {
        ""
    }

    fn method(&self) -> HttpMethod {
        HttpMethod::Get
    }
}

/// Source of the user's holdings.
#[async_trait]
pub trait HoldingsApi: Send + Sync {
    async fn fetch_holdings_response(&self) -> Result<HoldingsResponse, ApiError>;
}

/// [`HoldingsApi`] that calls the holdings endpoint through a [`NetworkClient`].
pub struct UserHoldingsApi<C: NetworkClient = HttpNetworkClient> {
    client: C,
    endpoint: HoldingsEndpoint,
}

impl UserHoldingsApi<HttpNetworkClient> {
    /// Client for the default endpoint with the default timeout.
    pub fn new() -> Self {
        Self::with_client(HttpNetworkClient::default(), HoldingsEndpoint::default())
    }
}

impl Default for UserHoldingsApi<HttpNetworkClient> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: NetworkClient> UserHoldingsApi<C> {
    pub fn with_client(client: C, endpoint: HoldingsEndpoint) -> Self {
        Self { client, endpoint }
    }
}

#[async_trait]
impl<C: NetworkClient> HoldingsApi for UserHoldingsApi<C> {
    async fn fetch_holdings_response(&self) -> Result<HoldingsResponse, ApiError> {
        let response: HoldingsResponse = self.client.send(&self.endpoint).await?;
        debug!("Fetched {} holdings", response.len());
        Ok(response)
    }
}

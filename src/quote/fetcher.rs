//! Quote retrieval over HTTP.

use async_trait::async_trait;
use reqwest::Client;

use crate::quote::error::FetchError;
use crate::quote::model::Quote;

/// Endpoint serving one random quote per request.
pub const RANDOM_QUOTE_URL: &str = "https://api.quotable.io/random";

/// Capability for fetching one random quote.
///
/// The engine only talks to this trait, so tests can substitute
/// deterministic implementations; production wires in [`QuotableClient`].
#[async_trait]
pub trait RandomQuoteFetcher: Send + Sync {
    /// Fetch one random quote.
    ///
    /// Exactly one outbound call per invocation. There are no retries or
    /// caching, and no timeouts beyond the transport defaults.
    async fn fetch_random_quote(&self) -> Result<Quote, FetchError>;
}

/// Production fetcher backed by the quotable.io API.
pub struct QuotableClient {
    client: Client,
}

impl QuotableClient {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
        }
    }
}

impl Default for QuotableClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl RandomQuoteFetcher for QuotableClient {
    async fn fetch_random_quote(&self) -> Result<Quote, FetchError> {
        tracing::debug!(url = RANDOM_QUOTE_URL, "requesting random quote");

        let response = self.client.get(RANDOM_QUOTE_URL).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::UpstreamStatus {
                status: status.as_u16(),
            });
        }

        let quote = response.json::<Quote>().await?;
        Ok(quote)
    }
}

use crate::config::DEFAULT_UPSTREAM_BASE_URL;
use crate::error::TvlError;
use async_trait::async_trait;
use serde_json::Value;

/// A source of raw protocol data.
///
/// The merge handler only depends on this trait, so any backend able to
/// return the upstream JSON body for a protocol slug can be plugged in.
#[async_trait]
pub trait ProtocolSource: Send + Sync {
    /// Fetches the raw JSON body describing `slug`.
    ///
    /// # Errors
    /// * `TvlError::UpstreamError` if the source answered with a non-success status
    /// * `TvlError::FetchFailed` for transport failures or an unparseable body
    async fn fetch_protocol(&self, slug: &str) -> Result<Value, TvlError>;
}

/// Client for the DefiLlama protocol endpoint.
///
/// Issues exactly one `GET {base_url}/protocol/{slug}` per call. The slug is
/// inserted into the URL as given, with no further encoding.
pub struct LlamaClient {
    base_url: String,
    client: reqwest::Client,
}

impl LlamaClient {
    /// Creates a client for the given API base URL (no trailing slash).
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            client: reqwest::Client::new(),
        }
    }

    pub fn protocol_url(&self, slug: &str) -> String {
        format!("{}/protocol/{}", self.base_url, slug)
    }
}

impl Default for LlamaClient {
    fn default() -> Self {
        Self::new(DEFAULT_UPSTREAM_BASE_URL)
    }
}

#[async_trait]
impl ProtocolSource for LlamaClient {
    async fn fetch_protocol(&self, slug: &str) -> Result<Value, TvlError> {
        let url = self.protocol_url(slug);
        tracing::debug!(%url, "fetching protocol data");

        let response = self.client.get(&url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(TvlError::UpstreamError {
                status: status.as_u16(),
            });
        }

        let body = response.bytes().await?;
        Ok(serde_json::from_slice(&body)?)
    }
}

use std::time::Duration;

use async_trait::async_trait;
use console_logging::console_warn;
use serde::de::DeserializeOwned;

use crate::types::{
    BreakdownEntry, CalculateRequest, ErrorEnvelope, PackSizesPayload, RemoteError,
};

const FETCH_FALLBACK: &str = "Failed to load pack sizes.";
const REPLACE_FALLBACK: &str = "Failed to save pack sizes.";
const CALCULATE_FALLBACK: &str = "Failed to calculate breakdown.";

#[derive(Debug, Clone)]
pub struct ClientSettings {
    pub base_url: String,
    pub connect_timeout: Duration,
    pub request_timeout: Duration,
}

impl ClientSettings {
    /// Settings with the fixed timeouts; only the base URL is configurable.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            connect_timeout: Duration::from_secs(10),
            request_timeout: Duration::from_secs(10),
        }
    }
}

/// The three remote operations of the pack optimizer.
///
/// No retries at this level; a failed call surfaces once and the caller
/// decides whether the user retries.
#[async_trait]
pub trait OptimizerApi: Send + Sync {
    /// Read the currently configured pack sizes.
    async fn fetch_pack_sizes(&self) -> Result<Vec<u64>, RemoteError>;
    /// Atomically replace the server-side configuration. The echoed response
    /// is the canonical post-write state and must be adopted by the caller.
    async fn replace_pack_sizes(&self, pack_sizes: &[u64]) -> Result<Vec<u64>, RemoteError>;
    /// Stateless breakdown query for one order amount.
    async fn compute_breakdown(&self, amount: u64) -> Result<Vec<BreakdownEntry>, RemoteError>;
}

#[derive(Debug, Clone)]
pub struct HttpOptimizerClient {
    client: reqwest::Client,
    base_url: String,
}

impl HttpOptimizerClient {
    pub fn new(settings: ClientSettings) -> Result<Self, RemoteError> {
        let client = reqwest::Client::builder()
            .connect_timeout(settings.connect_timeout)
            .timeout(settings.request_timeout)
            .build()
            .map_err(|err| {
                console_warn!("could not construct http client: {err}");
                RemoteError::new("Failed to initialize the optimizer client.")
            })?;
        Ok(Self {
            client,
            base_url: settings.base_url.trim_end_matches('/').to_string(),
        })
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    /// Decodes a 2xx body, or extracts the server's `error.message` from a
    /// non-2xx one; anything unusable becomes the per-operation fallback.
    async fn decode<T: DeserializeOwned>(
        response: reqwest::Response,
        fallback: &str,
    ) -> Result<T, RemoteError> {
        let status = response.status();
        if status.is_success() {
            return response.json::<T>().await.map_err(|err| {
                console_warn!("malformed optimizer response: {err}");
                RemoteError::new(fallback)
            });
        }

        let message = response
            .json::<ErrorEnvelope>()
            .await
            .ok()
            .and_then(|envelope| envelope.error)
            .and_then(|body| body.message)
            .filter(|message| !message.trim().is_empty())
            .unwrap_or_else(|| fallback.to_string());
        console_warn!("optimizer returned {status}: {message}");
        Err(RemoteError::new(message))
    }
}

#[async_trait]
impl OptimizerApi for HttpOptimizerClient {
    async fn fetch_pack_sizes(&self) -> Result<Vec<u64>, RemoteError> {
        let response = self
            .client
            .get(self.endpoint("/pack-sizes"))
            .send()
            .await
            .map_err(|err| transport_error(err, FETCH_FALLBACK))?;
        let payload: PackSizesPayload = Self::decode(response, FETCH_FALLBACK).await?;
        Ok(payload.pack_sizes)
    }

    async fn replace_pack_sizes(&self, pack_sizes: &[u64]) -> Result<Vec<u64>, RemoteError> {
        let response = self
            .client
            .put(self.endpoint("/pack-sizes"))
            .json(&PackSizesPayload {
                pack_sizes: pack_sizes.to_vec(),
            })
            .send()
            .await
            .map_err(|err| transport_error(err, REPLACE_FALLBACK))?;
        let payload: PackSizesPayload = Self::decode(response, REPLACE_FALLBACK).await?;
        Ok(payload.pack_sizes)
    }

    async fn compute_breakdown(&self, amount: u64) -> Result<Vec<BreakdownEntry>, RemoteError> {
        let response = self
            .client
            .post(self.endpoint("/calculate"))
            .json(&CalculateRequest { amount })
            .send()
            .await
            .map_err(|err| transport_error(err, CALCULATE_FALLBACK))?;
        Self::decode(response, CALCULATE_FALLBACK).await
    }
}

/// Transport detail goes to the log; the user sees the fixed fallback text.
fn transport_error(err: reqwest::Error, fallback: &str) -> RemoteError {
    console_warn!("optimizer request failed: {err}");
    RemoteError::new(fallback)
}

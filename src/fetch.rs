//! HTTP fetching with bounded retries.
//!
//! Everything goes through [`Transport`] so the retry loop and the load
//! pipelines can be driven by an in-memory transport in tests.

use std::time::Duration;

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RawResponse {
    pub status: u16,
    pub body: Vec<u8>,
}

impl RawResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    pub fn is_client_error(&self) -> bool {
        (400..500).contains(&self.status)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("request to {url} failed: {message}")]
pub struct TransportError {
    pub url: String,
    pub message: String,
}

impl TransportError {
    pub fn new(url: &str, message: impl ToString) -> Self {
        Self {
            url: url.to_string(),
            message: message.to_string(),
        }
    }
}

#[async_trait]
pub trait Transport: Send + Sync {
    async fn get(&self, url: &str) -> Result<RawResponse, TransportError>;
}

#[derive(Clone, Debug, Default)]
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    pub fn new(client: reqwest::Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn get(&self, url: &str) -> Result<RawResponse, TransportError> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|err| TransportError::new(url, err))?;
        let status = response.status().as_u16();
        let body = response
            .bytes()
            .await
            .map_err(|err| TransportError::new(url, err))?;
        Ok(RawResponse {
            status,
            body: body.to_vec(),
        })
    }
}

#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error(transparent)]
    Transport(#[from] TransportError),
    #[error("Failed to fetch {url} after {attempts} attempts.")]
    Exhausted { url: String, attempts: u32 },
    #[error("{url} responded with status {status}")]
    Status { url: String, status: u16 },
    #[error("failed to decode {url}: {source}")]
    Decode {
        url: String,
        #[source]
        source: serde_json::Error,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RetryPolicy {
    pub retries: u32,
    pub base_delay: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            retries: 3,
            base_delay: Duration::from_millis(1000),
        }
    }
}

impl RetryPolicy {
    /// Linear backoff: the wait after attempt `n` (1-based) is `n * base_delay`.
    pub fn delay_after(&self, attempt: u32) -> Duration {
        self.base_delay * attempt
    }
}

#[derive(Clone, Debug)]
pub struct RetryClient<T> {
    transport: T,
    policy: RetryPolicy,
}

impl<T: Transport> RetryClient<T> {
    pub fn new(transport: T, policy: RetryPolicy) -> Self {
        Self { transport, policy }
    }

    pub fn policy(&self) -> RetryPolicy {
        self.policy
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Fetches `url`, retrying server errors and transport failures.
    ///
    /// 2xx and 4xx responses are returned as-is on the first attempt.
    /// `silent` suppresses the per-attempt warnings.
    pub async fn fetch(&self, url: &str, silent: bool) -> Result<RawResponse, FetchError> {
        let retries = self.policy.retries;
        for attempt in 1..=retries {
            match self.transport.get(url).await {
                Ok(response) if response.is_success() || response.is_client_error() => {
                    return Ok(response);
                }
                Ok(response) => {
                    if !silent {
                        warn!(
                            url,
                            attempt,
                            status = response.status,
                            "Attempt {attempt} for {url} failed with status {}. Retrying...",
                            response.status
                        );
                    }
                }
                Err(err) => {
                    if !silent {
                        warn!(url, attempt, error = %err, "Attempt {attempt} for {url} failed");
                    }
                    if attempt == retries {
                        return Err(err.into());
                    }
                }
            }
            if attempt < retries {
                tokio::time::sleep(self.policy.delay_after(attempt)).await;
            }
        }
        debug!(url, attempts = retries, "fetch exhausted");
        Err(FetchError::Exhausted {
            url: url.to_string(),
            attempts: retries,
        })
    }

    /// Fetches and decodes a JSON document. Non-2xx responses become [`FetchError::Status`].
    pub async fn fetch_json<D: DeserializeOwned>(
        &self,
        url: &str,
        silent: bool,
    ) -> Result<D, FetchError> {
        let response = self.fetch(url, silent).await?;
        if !response.is_success() {
            return Err(FetchError::Status {
                url: url.to_string(),
                status: response.status,
            });
        }
        serde_json::from_slice(&response.body).map_err(|source| FetchError::Decode {
            url: url.to_string(),
            source,
        })
    }
}

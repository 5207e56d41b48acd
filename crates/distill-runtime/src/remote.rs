//! Remote Compression Service
//!
//! Implementation of `Compressor` over `POST /compress_prompt`.

use std::time::Duration;

use async_trait::async_trait;
use distill_core::{
    Aggressiveness, CompressError, CompressionOutcome, CompressionRequest, CompressionResponse,
    Compressor, DemoConfig, Result,
};

/// HTTP client for the compression service
pub struct RemoteCompressor {
    client: reqwest::Client,
    endpoint: String,
    health_url: String,
    timeout: Duration,
}

impl RemoteCompressor {
    /// Create a client for `base_url` with the default timeout
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        Self::from_config(&DemoConfig {
            base_url: base_url.into(),
            ..Default::default()
        })
    }

    /// Create from configuration
    pub fn from_config(config: &DemoConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| CompressError::Config(e.to_string()))?;

        Ok(Self {
            client,
            endpoint: config.endpoint(),
            health_url: config.health_url(),
            timeout: config.timeout,
        })
    }

    /// Create from environment variables
    pub fn from_env() -> Result<Self> {
        Self::from_config(&DemoConfig::from_env())
    }

    /// Create with default localhost settings
    pub fn localhost() -> Result<Self> {
        Self::from_config(&DemoConfig::default())
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    fn transport_error(&self, err: &reqwest::Error) -> CompressError {
        if err.is_timeout() {
            CompressError::Timeout(self.timeout)
        } else {
            CompressError::Connection(err.to_string())
        }
    }
}

#[async_trait]
impl Compressor for RemoteCompressor {
    async fn compress(
        &self,
        text: &str,
        aggressiveness: Aggressiveness,
    ) -> Result<CompressionOutcome> {
        let request = CompressionRequest::new(text, aggressiveness);

        let response = self
            .client
            .post(&self.endpoint)
            .json(&request)
            .send()
            .await
            .map_err(|e| self.transport_error(&e))?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!("Compression API at {} responded with {}", self.endpoint, status);
            return Err(CompressError::Status(status.as_u16()));
        }

        let body = match response.json::<CompressionResponse>().await {
            Ok(body) => body,
            Err(e) if e.is_timeout() => return Err(self.transport_error(&e)),
            Err(e) => {
                tracing::warn!("Unreadable compression response, estimating locally: {}", e);
                CompressionResponse::default()
            }
        };

        Ok(body.reconcile(text))
    }

    async fn health_check(&self) -> bool {
        match self.client.get(&self.health_url).send().await {
            Ok(response) => response.status().is_success(),
            Err(e) => {
                tracing::warn!("Compression API health check failed: {}", e);
                false
            }
        }
    }

    fn name(&self) -> &str {
        "RemoteCompressor"
    }
}

use std::time::Duration;

use anyhow::Result;
use tokio::time::timeout;

use crate::types::SearchResponse;

/// Public zipcloud search endpoint.
pub const DEFAULT_API_URL: &str = "https://zipcloud.ibsnet.co.jp/api/search";

/// Deadline for one lookup, covering connect, send and body decode.
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(1);

/// Errors a lookup can fail with before the body is interpreted.
///
/// Service-reported failures are not errors at this layer; they arrive as a
/// decoded [`SearchResponse`] and are interpreted by the caller.
#[derive(Debug, thiserror::Error)]
pub enum LookupError {
    /// The configured deadline elapsed; the in-flight request was dropped.
    #[error("lookup timed out")]
    Timeout,
    /// Connect, send or decode failed below the service protocol.
    #[error("transport failure: {0}")]
    Transport(#[from] reqwest::Error),
}

/// Configuration for [`ZipcloudClient`].
#[derive(Debug, Clone)]
pub struct ZipcloudConfig {
    /// Search endpoint URL.
    pub base_url: String,
    /// Per-request deadline.
    pub timeout: Duration,
}

impl Default for ZipcloudConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

/// HTTP client for the zipcloud postal-code resolution service.
pub struct ZipcloudClient {
    http: reqwest::Client,
    config: ZipcloudConfig,
}

impl ZipcloudClient {
    pub fn new() -> Result<Self> {
        Self::with_config(ZipcloudConfig::default())
    }

    pub fn with_config(config: ZipcloudConfig) -> Result<Self> {
        let http = reqwest::Client::builder().build()?;
        Ok(Self { http, config })
    }

    /// Issue one lookup for a normalized 7-digit code.
    ///
    /// The code is passed as a percent-encoded `zipcode` query parameter.
    /// Exactly one request is made; there is no retry.
    pub async fn search(&self, code: &str) -> Result<SearchResponse, LookupError> {
        let request = async {
            let response = self
                .http
                .get(&self.config.base_url)
                .query(&[("zipcode", code)])
                .send()
                .await?
                .error_for_status()?;
            Ok::<_, LookupError>(response.json::<SearchResponse>().await?)
        };

        match timeout(self.config.timeout, request).await {
            Ok(result) => result,
            Err(_) => {
                tracing::warn!(code, "lookup exceeded {:?} deadline", self.config.timeout);
                Err(LookupError::Timeout)
            }
        }
    }
}

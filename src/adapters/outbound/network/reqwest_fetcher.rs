use crate::ports::outbound::{HttpFetcher, HttpResponse};
use crate::shared::security::MAX_DOWNLOAD_SIZE;
use crate::shared::Result;
use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use std::time::Duration;

/// Default per-request timeout
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// ReqwestHttpFetcher adapter for plain GET requests
///
/// One shared async client with a fixed timeout and the default redirect
/// policy. Bodies are buffered up to a size cap; larger bodies are aborted
/// mid-stream instead of being read to the end.
#[derive(Clone)]
pub struct ReqwestHttpFetcher {
    client: reqwest::Client,
    max_body_bytes: usize,
}

impl ReqwestHttpFetcher {
    /// Creates a fetcher with the default timeout
    pub fn new() -> Result<Self> {
        Self::with_timeout(Duration::from_secs(DEFAULT_TIMEOUT_SECS))
    }

    pub fn with_timeout(timeout: Duration) -> Result<Self> {
        let version = env!("CARGO_PKG_VERSION");
        let user_agent = format!("logo-resolver/{}", version);
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(user_agent)
            .build()?;

        Ok(Self {
            client,
            max_body_bytes: MAX_DOWNLOAD_SIZE,
        })
    }

    /// Validates that a URL is absolute http(s) before it is requested
    fn validate_url(url: &str) -> Result<()> {
        let parsed = url::Url::parse(url)
            .map_err(|e| anyhow::anyhow!("Invalid URL '{}': {}", url, e))?;
        if !matches!(parsed.scheme(), "http" | "https") {
            anyhow::bail!("Security: refusing to fetch non-HTTP URL '{}'", url);
        }
        Ok(())
    }
}

#[async_trait]
impl HttpFetcher for ReqwestHttpFetcher {
    async fn get(&self, url: &str) -> Result<HttpResponse> {
        Self::validate_url(url)?;

        let mut response = self.client.get(url).send().await?;

        if let Some(length) = response.content_length() {
            if length > self.max_body_bytes as u64 {
                anyhow::bail!(
                    "Response from {} is too large ({} bytes, maximum {})",
                    url,
                    length,
                    self.max_body_bytes
                );
            }
        }

        let status = response.status().as_u16();
        let final_url = response.url().to_string();
        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(String::from);

        let mut body = Vec::new();
        while let Some(chunk) = response.chunk().await? {
            if body.len() + chunk.len() > self.max_body_bytes {
                anyhow::bail!(
                    "Response from {} exceeded {} bytes",
                    url,
                    self.max_body_bytes
                );
            }
            body.extend_from_slice(&chunk);
        }

        let mut result = HttpResponse::new(status, body, final_url);
        if let Some(content_type) = content_type {
            result = result.with_content_type(content_type);
        }
        Ok(result)
    }
}

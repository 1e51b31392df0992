use crate::shared::Result;
use async_trait::async_trait;

/// Response of a single GET request, fully buffered
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    /// Declared content type; informational only, never trusted for format detection
    pub content_type: Option<String>,
    pub body: Vec<u8>,
    /// URL after redirects
    pub final_url: String,
}

impl HttpResponse {
    pub fn new(status: u16, body: Vec<u8>, final_url: impl Into<String>) -> Self {
        Self {
            status,
            content_type: None,
            body,
            final_url: final_url.into(),
        }
    }

    pub fn with_content_type(mut self, content_type: impl Into<String>) -> Self {
        self.content_type = Some(content_type.into());
        self
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Body decoded as UTF-8, replacing invalid sequences
    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }
}

/// HttpFetcher port for retrieving remote resources
///
/// # Async Support
/// Implementations must be `Send + Sync` so several brand pipelines can share
/// one fetcher.
#[async_trait]
pub trait HttpFetcher: Send + Sync {
    /// Performs a GET request
    ///
    /// Non-2xx responses are returned as `Ok`; the caller decides what to do
    /// with the status.
    ///
    /// # Errors
    /// Returns an error if:
    /// - The connection fails or times out
    /// - The body exceeds the adapter's size limit
    async fn get(&self, url: &str) -> Result<HttpResponse>;
}

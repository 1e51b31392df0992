use crate::logo_resolution::domain::{CandidateKind, LogoAsset, SourceCandidate};
use crate::logo_resolution::policies::{Rejection, ValidationPolicy};
use crate::logo_resolution::services::LogoPageExtractor;
use crate::ports::outbound::HttpFetcher;
use crate::shared::Result;
use tracing::debug;

/// AcquireLogoUseCase - Walks a candidate list until one payload validates
///
/// Candidates are tried one at a time in list order; the first payload that
/// passes the [`ValidationPolicy`] wins and nothing after it is requested.
/// A website candidate costs one request for the page, then one per logo
/// URL found on it.
///
/// # Type Parameters
/// * `F` - HttpFetcher implementation
pub struct AcquireLogoUseCase<F: HttpFetcher> {
    fetcher: F,
    extractor: LogoPageExtractor,
}

impl<F: HttpFetcher> AcquireLogoUseCase<F> {
    pub fn new(fetcher: F) -> Result<Self> {
        Ok(Self {
            fetcher,
            extractor: LogoPageExtractor::new()?,
        })
    }

    pub fn fetcher(&self) -> &F {
        &self.fetcher
    }

    /// Returns the first valid asset, or `None` once every candidate failed
    pub async fn acquire(
        &self,
        candidates: &[SourceCandidate],
        policy: &ValidationPolicy,
    ) -> Option<LogoAsset> {
        for candidate in candidates {
            match candidate.kind() {
                CandidateKind::Direct { url } => {
                    if let Some(asset) = self.try_url(candidate, url, policy).await {
                        return Some(asset);
                    }
                }
                CandidateKind::WebsiteScrape { page_url } => {
                    for url in self.scrape_logo_urls(page_url).await {
                        if let Some(asset) = self.try_url(candidate, &url, policy).await {
                            return Some(asset);
                        }
                    }
                }
            }
        }
        None
    }

    async fn try_url(
        &self,
        candidate: &SourceCandidate,
        url: &str,
        policy: &ValidationPolicy,
    ) -> Option<LogoAsset> {
        match self.fetch_and_validate(candidate, url, policy).await {
            Ok(asset) => {
                debug!(
                    provider = candidate.provider(),
                    url,
                    format = asset.format().label(),
                    bytes = asset.len(),
                    "candidate accepted"
                );
                Some(asset)
            }
            Err(rejection) => {
                debug!(
                    provider = candidate.provider(),
                    tier = candidate.tier().label(),
                    url,
                    %rejection,
                    "candidate rejected"
                );
                None
            }
        }
    }

    async fn fetch_and_validate(
        &self,
        candidate: &SourceCandidate,
        url: &str,
        policy: &ValidationPolicy,
    ) -> std::result::Result<LogoAsset, Rejection> {
        let response = self
            .fetcher
            .get(url)
            .await
            .map_err(|e| Rejection::Network(e.to_string()))?;

        if !response.is_success() {
            return Err(Rejection::HttpStatus(response.status));
        }

        let payload = policy.validate(&response.body, candidate.min_bytes())?;
        Ok(
            LogoAsset::new(response.body, payload.format, candidate.provider(), url)
                .with_dimensions(payload.dimensions),
        )
    }

    async fn scrape_logo_urls(&self, page_url: &str) -> Vec<String> {
        match self.fetcher.get(page_url).await {
            Ok(response) if response.is_success() => {
                let base = if response.final_url.is_empty() {
                    page_url
                } else {
                    response.final_url.as_str()
                };
                let urls = self.extractor.extract(&response.text(), base);
                debug!(page_url, found = urls.len(), "scraped website for logos");
                urls
            }
            Ok(response) => {
                debug!(page_url, status = response.status, "website returned an error");
                Vec::new()
            }
            Err(e) => {
                debug!(page_url, error = %e, "website unreachable");
                Vec::new()
            }
        }
    }
}

use crate::logo_resolution::domain::normalize_host;
use crate::ports::outbound::{DomainSearch, HttpFetcher};
use crate::shared::Result;
use anyhow::anyhow;
use async_trait::async_trait;
use scraper::{Html, Selector};
use url::Url;

const SEARCH_ENDPOINT: &str = "https://html.duckduckgo.com/html/";

/// Hosts that are never a brand's own website
const SKIPPED_HOSTS: &[&str] = &[
    "amazon.com",
    "duckduckgo.com",
    "ebay.com",
    "facebook.com",
    "instagram.com",
    "linkedin.com",
    "pinterest.com",
    "reddit.com",
    "tiktok.com",
    "twitter.com",
    "wikipedia.org",
    "x.com",
    "youtube.com",
];

/// DuckDuckGoSearch adapter resolving brand domains via the HTML endpoint
///
/// Sends `"{brand} official website"` once and takes the first organic
/// result that is not a social, marketplace or encyclopedia page.
pub struct DuckDuckGoSearch<F: HttpFetcher> {
    fetcher: F,
    result_selector: Selector,
}

impl<F: HttpFetcher> DuckDuckGoSearch<F> {
    pub fn new(fetcher: F) -> Result<Self> {
        let result_selector = Selector::parse("a.result__a")
            .map_err(|e| anyhow!("Invalid result selector: {}", e))?;
        Ok(Self {
            fetcher,
            result_selector,
        })
    }

    fn search_url(brand_name: &str) -> String {
        let query = format!("{} official website", brand_name);
        format!("{}?q={}", SEARCH_ENDPOINT, urlencoding::encode(&query))
    }

    /// Extracts the first acceptable result host from a results page
    fn first_result_host(&self, html: &str) -> Option<String> {
        let document = Html::parse_document(html);
        document
            .select(&self.result_selector)
            .filter_map(|a| a.value().attr("href"))
            .filter_map(Self::decode_result_link)
            .filter_map(|target| normalize_host(&target))
            .find(|host| !Self::is_skipped(host))
    }

    /// Unwraps DuckDuckGo redirect links (`//duckduckgo.com/l/?uddg=...`)
    fn decode_result_link(href: &str) -> Option<String> {
        let absolute = if href.starts_with("//") {
            format!("https:{}", href)
        } else {
            href.to_string()
        };
        let url = Url::parse(&absolute).ok()?;

        let is_redirect = url
            .host_str()
            .map(|h| h.ends_with("duckduckgo.com"))
            .unwrap_or(false)
            && url.path().starts_with("/l/");
        if is_redirect {
            return url
                .query_pairs()
                .find(|(key, _)| key == "uddg")
                .map(|(_, value)| value.into_owned());
        }
        Some(absolute)
    }

    fn is_skipped(host: &str) -> bool {
        SKIPPED_HOSTS
            .iter()
            .any(|skipped| host == *skipped || host.ends_with(&format!(".{}", skipped)))
    }
}

#[async_trait]
impl<F: HttpFetcher> DomainSearch for DuckDuckGoSearch<F> {
    async fn search_domain(&self, brand_name: &str) -> Result<Option<String>> {
        let response = self.fetcher.get(&Self::search_url(brand_name)).await?;
        if !response.is_success() {
            anyhow::bail!("Search returned status code {}", response.status);
        }
        Ok(self.first_result_host(&response.text()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::outbound::HttpResponse;
    use std::sync::Mutex;

    struct PageFetcher {
        status: u16,
        page: String,
        requested: Mutex<Vec<String>>,
    }

    impl PageFetcher {
        fn new(status: u16, page: &str) -> Self {
            Self {
                status,
                page: page.to_string(),
                requested: Mutex::new(Vec::new()),
            }
        }
    }

    #[async_trait]
    impl HttpFetcher for PageFetcher {
        async fn get(&self, url: &str) -> Result<HttpResponse> {
            self.requested.lock().unwrap().push(url.to_string());
            Ok(HttpResponse::new(
                self.status,
                self.page.clone().into_bytes(),
                url,
            ))
        }
    }

    const RESULTS: &str = r#"
        <div class="results">
          <a class="result__a" href="//duckduckgo.com/l/?uddg=https%3A%2F%2Fen.wikipedia.org%2Fwiki%2FDinan&amp;rut=abc">Dinan - Wikipedia</a>
          <a class="result__a" href="//duckduckgo.com/l/?uddg=https%3A%2F%2Fwww.instagram.com%2Fdinancorp&amp;rut=def">Instagram</a>
          <a class="result__a" href="//duckduckgo.com/l/?uddg=https%3A%2F%2Fwww.dinan.com%2F&amp;rut=ghi">Dinan | Official</a>
        </div>
    "#;

    #[tokio::test]
    async fn test_skips_social_and_encyclopedia_results() {
        let search = DuckDuckGoSearch::new(PageFetcher::new(200, RESULTS)).unwrap();
        let domain = search.search_domain("Dinan").await.unwrap();
        assert_eq!(domain.as_deref(), Some("dinan.com"));
    }

    #[tokio::test]
    async fn test_query_is_encoded() {
        let search = DuckDuckGoSearch::new(PageFetcher::new(200, "")).unwrap();
        search.search_domain("H&R").await.unwrap();
        let requested = search.fetcher.requested.lock().unwrap();
        assert_eq!(
            requested[0],
            "https://html.duckduckgo.com/html/?q=H%26R%20official%20website"
        );
    }

    #[tokio::test]
    async fn test_no_results() {
        let search = DuckDuckGoSearch::new(PageFetcher::new(200, "<html></html>")).unwrap();
        assert_eq!(search.search_domain("Nonexistent Tuning Co").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_error_status_is_error() {
        let search = DuckDuckGoSearch::new(PageFetcher::new(503, "")).unwrap();
        assert!(search.search_domain("Dinan").await.is_err());
    }

    #[test]
    fn test_decode_direct_link() {
        assert_eq!(
            DuckDuckGoSearch::<PageFetcher>::decode_result_link("https://www.brembo.com/en"),
            Some("https://www.brembo.com/en".to_string())
        );
    }
}

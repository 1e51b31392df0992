//! Finds logo images on a brand's home page.

use crate::shared::Result;
use anyhow::anyhow;
use scraper::{Html, Selector};
use url::Url;

/// Upper bound on image URLs taken from one page
pub const DEFAULT_MAX_LOGO_URLS: usize = 5;

/// Probes in preference order: explicit logo markers first, then images in
/// header/nav containers, then declared icons.
const LOGO_SELECTORS: &[&str] = &[
    r#"img[alt*="logo"]"#,
    r#"img[alt*="Logo"]"#,
    r#"img[alt*="LOGO"]"#,
    r#"img[class*="logo"]"#,
    r#"img[id*="logo"]"#,
    r#"img[src*="logo"]"#,
    r#"[class*="logo"] img"#,
    r#"[id*="logo"] img"#,
    "header img",
    "nav img",
    r#"link[rel="apple-touch-icon"]"#,
    r#"link[rel="icon"]"#,
    r#"link[rel="shortcut icon"]"#,
];

const URL_ATTRIBUTES: &[&str] = &["src", "data-src", "href"];

/// Extracts candidate logo URLs from a page's HTML
pub struct LogoPageExtractor {
    selectors: Vec<Selector>,
    max_urls: usize,
}

impl LogoPageExtractor {
    pub fn new() -> Result<Self> {
        Self::with_max_urls(DEFAULT_MAX_LOGO_URLS)
    }

    pub fn with_max_urls(max_urls: usize) -> Result<Self> {
        let selectors = LOGO_SELECTORS
            .iter()
            .map(|s| Selector::parse(s).map_err(|e| anyhow!("Invalid logo selector {}: {}", s, e)))
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            selectors,
            max_urls,
        })
    }

    /// Returns absolute http(s) URLs, de-duplicated, `.svg` first, at most `max_urls`
    ///
    /// # Arguments
    /// * `html` - Page markup
    /// * `base_url` - URL the page was served from, used to resolve relative links
    pub fn extract(&self, html: &str, base_url: &str) -> Vec<String> {
        let Ok(base) = Url::parse(base_url) else {
            return Vec::new();
        };
        let document = Html::parse_document(html);

        let mut found: Vec<String> = Vec::new();
        for selector in &self.selectors {
            for element in document.select(selector) {
                let Some(raw) = URL_ATTRIBUTES
                    .iter()
                    .find_map(|attr| element.value().attr(attr))
                    .map(str::trim)
                    .filter(|raw| !raw.is_empty())
                else {
                    continue;
                };

                if let Some(resolved) = Self::resolve(&base, raw) {
                    if !found.contains(&resolved) {
                        found.push(resolved);
                    }
                }
            }
        }

        // Stable: keeps selector order within each group.
        found.sort_by_key(|u| !Self::is_svg(u));
        found.truncate(self.max_urls);
        found
    }

    fn resolve(base: &Url, raw: &str) -> Option<String> {
        if raw.starts_with("data:") {
            return None;
        }
        let url = base.join(raw).ok()?;
        matches!(url.scheme(), "http" | "https").then(|| url.to_string())
    }

    fn is_svg(url: &str) -> bool {
        Url::parse(url)
            .map(|u| u.path().to_ascii_lowercase().ends_with(".svg"))
            .unwrap_or(false)
    }
}

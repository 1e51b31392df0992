use crate::logo_resolution::domain::{ExpectedFormat, Slug, SourceCandidate, SourceTier};

/// Minimum size accepted from favicon-grade sources
const FAVICON_MIN_BYTES: usize = 100;

/// Builds the ordered source list for one brand
///
/// Order (highest first):
/// 1. vector-logo CDNs keyed by slug
/// 2. the brand's own website, scraped once
/// 3. logo/favicon APIs keyed by domain, high-resolution raster
/// 4. favicon-quality fallbacks
#[derive(Debug, Clone, Default)]
pub struct CandidateBuilder {
    brandfetch_client_id: Option<String>,
    excluded_tiers: Vec<SourceTier>,
}

impl CandidateBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Enables the Brandfetch CDN, which requires a client id
    pub fn with_brandfetch_client_id(mut self, client_id: Option<String>) -> Self {
        self.brandfetch_client_id = client_id.filter(|id| !id.trim().is_empty());
        self
    }

    /// Leaves a whole tier out of the list
    pub fn without_tier(mut self, tier: SourceTier) -> Self {
        if !self.excluded_tiers.contains(&tier) {
            self.excluded_tiers.push(tier);
        }
        self
    }

    /// Produces candidates for a brand whose domain is known
    ///
    /// # Arguments
    /// * `brand_name` - Display name, used for name-keyed sources
    /// * `slug` - Normalized brand slug
    /// * `domain` - Bare host name, e.g. `brembo.com`
    pub fn build(&self, brand_name: &str, slug: &Slug, domain: &str) -> Vec<SourceCandidate> {
        let mut candidates = Vec::new();
        candidates.extend(self.vector_candidates(brand_name, slug));
        candidates.push(SourceCandidate::website(format!("https://{}/", domain)));
        candidates.extend(self.api_candidates(domain));
        candidates.extend(Self::favicon_candidates(domain));

        candidates.retain(|c| !self.excluded_tiers.contains(&c.tier()));
        candidates
    }

    fn vector_candidates(&self, brand_name: &str, slug: &Slug) -> Vec<SourceCandidate> {
        let compact = slug.as_str().replace('-', "");
        let commons_title = urlencoding::encode(&brand_name.trim().replace(' ', "_")).into_owned();

        vec![
            SourceCandidate::direct(
                "worldvectorlogo",
                format!("https://cdn.worldvectorlogo.com/logos/{}.svg", slug),
                SourceTier::VectorCdn,
                ExpectedFormat::Vector,
            ),
            SourceCandidate::direct(
                "simple-icons",
                format!("https://cdn.simpleicons.org/{}", compact),
                SourceTier::VectorCdn,
                ExpectedFormat::Vector,
            ),
            SourceCandidate::direct(
                "wikimedia",
                format!(
                    "https://commons.wikimedia.org/wiki/Special:FilePath/{}_logo.svg",
                    commons_title
                ),
                SourceTier::VectorCdn,
                ExpectedFormat::Vector,
            ),
        ]
    }

    fn api_candidates(&self, domain: &str) -> Vec<SourceCandidate> {
        let mut candidates = Vec::new();

        if let Some(client_id) = &self.brandfetch_client_id {
            candidates.push(SourceCandidate::direct(
                "brandfetch",
                format!(
                    "https://cdn.brandfetch.io/{}/w/512/h/512/logo?c={}",
                    domain,
                    urlencoding::encode(client_id)
                ),
                SourceTier::LogoApi,
                ExpectedFormat::Raster,
            ));
        }

        candidates.push(SourceCandidate::direct(
            "clearbit",
            format!("https://logo.clearbit.com/{}?size=512", domain),
            SourceTier::LogoApi,
            ExpectedFormat::Raster,
        ));
        candidates.push(SourceCandidate::direct(
            "google-favicons",
            format!("https://www.google.com/s2/favicons?domain={}&sz=256", domain),
            SourceTier::LogoApi,
            ExpectedFormat::Raster,
        ));

        candidates
    }

    fn favicon_candidates(domain: &str) -> Vec<SourceCandidate> {
        vec![
            SourceCandidate::direct(
                "site-favicon",
                format!("https://{}/favicon.ico", domain),
                SourceTier::Favicon,
                ExpectedFormat::Any,
            )
            .with_min_bytes(FAVICON_MIN_BYTES),
            SourceCandidate::direct(
                "duckduckgo-icons",
                format!("https://icons.duckduckgo.com/ip3/{}.ico", domain),
                SourceTier::Favicon,
                ExpectedFormat::Any,
            )
            .with_min_bytes(FAVICON_MIN_BYTES),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logo_resolution::domain::CandidateKind;

    fn slug(name: &str) -> Slug {
        Slug::from_name(name).unwrap()
    }

    #[test]
    fn test_tiers_are_in_priority_order() {
        let candidates = CandidateBuilder::new().build("Brembo", &slug("Brembo"), "brembo.com");
        let tiers: Vec<SourceTier> = candidates.iter().map(|c| c.tier()).collect();
        let mut sorted = tiers.clone();
        sorted.sort();
        assert_eq!(tiers, sorted);
        assert_eq!(tiers.first(), Some(&SourceTier::VectorCdn));
        assert_eq!(tiers.last(), Some(&SourceTier::Favicon));
    }

    #[test]
    fn test_vector_sources_keyed_by_slug() {
        let candidates =
            CandidateBuilder::new().build("SC Project", &slug("SC Project"), "sc-project.com");
        assert_eq!(
            candidates[0].url(),
            "https://cdn.worldvectorlogo.com/logos/sc-project.svg"
        );
        assert_eq!(candidates[1].url(), "https://cdn.simpleicons.org/scproject");
        assert_eq!(
            candidates[2].url(),
            "https://commons.wikimedia.org/wiki/Special:FilePath/SC_Project_logo.svg"
        );
    }

    #[test]
    fn test_single_website_scrape_of_domain_root() {
        let candidates = CandidateBuilder::new().build("KW", &slug("KW"), "kwsuspensions.com");
        let scrapes: Vec<&SourceCandidate> = candidates
            .iter()
            .filter(|c| matches!(c.kind(), CandidateKind::WebsiteScrape { .. }))
            .collect();
        assert_eq!(scrapes.len(), 1);
        assert_eq!(scrapes[0].url(), "https://kwsuspensions.com/");
    }

    #[test]
    fn test_brandfetch_only_with_client_id() {
        let without = CandidateBuilder::new().build("KW", &slug("KW"), "kwsuspensions.com");
        assert!(without.iter().all(|c| c.provider() != "brandfetch"));

        let with = CandidateBuilder::new()
            .with_brandfetch_client_id(Some("abc123".to_string()))
            .build("KW", &slug("KW"), "kwsuspensions.com");
        let brandfetch = with.iter().find(|c| c.provider() == "brandfetch").unwrap();
        assert_eq!(
            brandfetch.url(),
            "https://cdn.brandfetch.io/kwsuspensions.com/w/512/h/512/logo?c=abc123"
        );
        assert_eq!(brandfetch.tier(), SourceTier::LogoApi);
    }

    #[test]
    fn test_blank_client_id_ignored() {
        let candidates = CandidateBuilder::new()
            .with_brandfetch_client_id(Some("  ".to_string()))
            .build("KW", &slug("KW"), "kwsuspensions.com");
        assert!(candidates.iter().all(|c| c.provider() != "brandfetch"));
    }

    #[test]
    fn test_favicons_have_lower_byte_minimum() {
        let candidates = CandidateBuilder::new().build("KW", &slug("KW"), "kwsuspensions.com");
        for candidate in candidates.iter().filter(|c| c.tier() == SourceTier::Favicon) {
            assert_eq!(candidate.min_bytes(), Some(FAVICON_MIN_BYTES));
        }
    }

    #[test]
    fn test_without_tier() {
        let candidates = CandidateBuilder::new()
            .without_tier(SourceTier::Favicon)
            .build("KW", &slug("KW"), "kwsuspensions.com");
        assert!(candidates.iter().all(|c| c.tier() != SourceTier::Favicon));
        assert!(candidates.iter().any(|c| c.tier() == SourceTier::LogoApi));
    }
}

/// Priority tier of a logo source, highest first
///
/// Encodes vector > scraped official asset > logo API > favicon fallback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SourceTier {
    VectorCdn,
    WebsiteScrape,
    LogoApi,
    Favicon,
}

impl SourceTier {
    pub fn label(self) -> &'static str {
        match self {
            SourceTier::VectorCdn => "vector CDN",
            SourceTier::WebsiteScrape => "official website",
            SourceTier::LogoApi => "logo API",
            SourceTier::Favicon => "favicon",
        }
    }
}

/// Format a provider is expected to serve
///
/// Only a hint for ordering and logging; the validator decides the real
/// format from the payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExpectedFormat {
    Vector,
    Raster,
    Any,
}

/// How a candidate is turned into payload bytes
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CandidateKind {
    /// A single GET of an image URL
    Direct { url: String },
    /// One GET of the site root, then the logo images found on it
    WebsiteScrape { page_url: String },
}

/// One entry of the ordered source list for a brand
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceCandidate {
    provider: String,
    kind: CandidateKind,
    tier: SourceTier,
    expected: ExpectedFormat,
    min_bytes: Option<usize>,
}

impl SourceCandidate {
    pub fn direct(
        provider: impl Into<String>,
        url: impl Into<String>,
        tier: SourceTier,
        expected: ExpectedFormat,
    ) -> Self {
        Self {
            provider: provider.into(),
            kind: CandidateKind::Direct { url: url.into() },
            tier,
            expected,
            min_bytes: None,
        }
    }

    pub fn website(page_url: impl Into<String>) -> Self {
        Self {
            provider: "website".to_string(),
            kind: CandidateKind::WebsiteScrape {
                page_url: page_url.into(),
            },
            tier: SourceTier::WebsiteScrape,
            expected: ExpectedFormat::Any,
            min_bytes: None,
        }
    }

    /// Overrides the policy's minimum byte size for this candidate only
    pub fn with_min_bytes(mut self, min_bytes: usize) -> Self {
        self.min_bytes = Some(min_bytes);
        self
    }

    pub fn provider(&self) -> &str {
        &self.provider
    }

    pub fn kind(&self) -> &CandidateKind {
        &self.kind
    }

    pub fn url(&self) -> &str {
        match &self.kind {
            CandidateKind::Direct { url } => url,
            CandidateKind::WebsiteScrape { page_url } => page_url,
        }
    }

    pub fn tier(&self) -> SourceTier {
        self.tier
    }

    pub fn expected(&self) -> ExpectedFormat {
        self.expected
    }

    pub fn min_bytes(&self) -> Option<usize> {
        self.min_bytes
    }
}

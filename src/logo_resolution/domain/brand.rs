use crate::shared::Result;
use serde::Deserialize;

/// Maximum length for brand display names (security limit)
const MAX_BRAND_NAME_LENGTH: usize = 200;

/// NewType wrapper for a brand display name
///
/// Display names are free-form (punctuation, spaces and unicode are allowed)
/// but must be non-blank and single-line.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BrandName(String);

impl BrandName {
    pub fn new(name: String) -> Result<Self> {
        let trimmed = name.trim();
        if trimmed.is_empty() {
            anyhow::bail!("Brand name cannot be empty");
        }

        if trimmed.len() > MAX_BRAND_NAME_LENGTH {
            anyhow::bail!(
                "Brand name is too long ({} bytes). Maximum allowed: {} bytes",
                trimmed.len(),
                MAX_BRAND_NAME_LENGTH
            );
        }

        if trimmed.chars().any(|c| c.is_control()) {
            anyhow::bail!("Brand name '{}' contains control characters", trimmed.escape_debug());
        }

        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for BrandName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Catalog section a brand belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BrandCategory {
    Auto,
    Moto,
}

impl std::fmt::Display for BrandCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BrandCategory::Auto => write!(f, "auto"),
            BrandCategory::Moto => write!(f, "moto"),
        }
    }
}

/// Brand value object
///
/// Identity is the display name; the optional domain is a hint supplied by
/// the brand list and is consulted after manual domain overrides.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Brand {
    name: BrandName,
    domain: Option<String>,
    category: Option<BrandCategory>,
}

impl Brand {
    pub fn new(name: String) -> Result<Self> {
        Ok(Self {
            name: BrandName::new(name)?,
            domain: None,
            category: None,
        })
    }

    pub fn with_domain(mut self, domain: impl Into<String>) -> Self {
        let domain = domain.into();
        let domain = domain.trim();
        self.domain = (!domain.is_empty()).then(|| domain.to_string());
        self
    }

    pub fn with_category(mut self, category: BrandCategory) -> Self {
        self.category = Some(category);
        self
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn domain(&self) -> Option<&str> {
        self.domain.as_deref()
    }

    pub fn category(&self) -> Option<BrandCategory> {
        self.category
    }
}

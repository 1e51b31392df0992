use crate::logo_resolution::domain::{Brand, BrandLogoMap, CacheEntry, Slug};
use std::collections::{BTreeMap, BTreeSet};

/// Default public URL prefix of the logo directory
pub const DEFAULT_PUBLIC_PREFIX: &str = "/logos";

/// Default placeholder path for brands without a logo
pub const DEFAULT_PLACEHOLDER: &str = "/images/placeholder-logo.svg";

/// Result of a map regeneration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedMap {
    pub map: BrandLogoMap,
    /// Overrides that could not be honored; the brand fell back to the cache or placeholder
    pub warnings: Vec<String>,
}

/// Rebuilds the brand → logo path table from scratch
///
/// Pure: the same brand list, directory listing and overrides always yield
/// the same map.
#[derive(Debug, Clone)]
pub struct MapGenerator {
    public_prefix: String,
    placeholder: String,
}

impl Default for MapGenerator {
    fn default() -> Self {
        Self::new(DEFAULT_PUBLIC_PREFIX, DEFAULT_PLACEHOLDER)
    }
}

impl MapGenerator {
    pub fn new(public_prefix: impl Into<String>, placeholder: impl Into<String>) -> Self {
        let public_prefix = public_prefix.into();
        let trimmed = format!("/{}", public_prefix.trim_matches('/'));
        Self {
            public_prefix: trimmed,
            placeholder: placeholder.into(),
        }
    }

    pub fn public_prefix(&self) -> &str {
        &self.public_prefix
    }

    pub fn placeholder(&self) -> &str {
        &self.placeholder
    }

    /// Normalizes a manual override fragment to a rooted public path
    ///
    /// `kw.png`, `logos/kw.png` and `/logos/kw.png` all become `/logos/kw.png`.
    pub fn normalize_override_path(&self, fragment: &str) -> String {
        let prefix_dir = self.public_prefix.trim_start_matches('/');
        let relative = fragment.trim().trim_start_matches('/');
        match relative.strip_prefix(prefix_dir) {
            Some(rest) if rest.starts_with('/') => format!("/{}", relative),
            _ => format!("{}/{}", self.public_prefix, relative),
        }
    }

    /// Regenerates the map
    ///
    /// # Arguments
    /// * `brands` - Known brands; their display casing becomes the map keys
    /// * `cache_files` - File names currently present in the cache directory
    /// * `logo_overrides` - Manual brand → path fragment table, authoritative when the file exists
    pub fn generate(
        &self,
        brands: &[Brand],
        cache_files: &BTreeSet<String>,
        logo_overrides: &BTreeMap<String, String>,
    ) -> GeneratedMap {
        let best_by_slug = Self::best_entries(cache_files);
        let mut map = BrandLogoMap::new(self.placeholder.clone());
        let mut warnings = Vec::new();
        let mut mapped_slugs: BTreeSet<&Slug> = BTreeSet::new();

        for brand in brands {
            let slug = Slug::from_name(brand.name());
            let path = match logo_overrides.get(brand.name()) {
                Some(fragment) => match self.resolve_override(fragment, cache_files) {
                    Ok(path) => Some(path),
                    Err(warning) => {
                        warnings.push(format!("{}: {}", brand.name(), warning));
                        None
                    }
                },
                None => None,
            };

            let path = path.or_else(|| {
                let slug = slug.as_ref()?;
                let entry = best_by_slug.get(slug)?;
                Some(entry.public_path(&self.public_prefix))
            });

            if let Some(slug) = slug.as_ref().and_then(|s| best_by_slug.get_key_value(s)) {
                mapped_slugs.insert(slug.0);
            }
            map.insert(
                brand.name(),
                path.unwrap_or_else(|| self.placeholder.clone()),
            );
        }

        // Lowercase variants never shadow a display name.
        for brand in brands {
            let lowered = brand.name().to_lowercase();
            if lowered != brand.name() {
                let path = map.get_brand_logo(brand.name()).to_string();
                map.insert_if_absent(lowered, path);
            }
        }

        // Files no brand claims stay reachable under their slug.
        for (slug, entry) in &best_by_slug {
            if !mapped_slugs.contains(slug) {
                map.insert_if_absent(slug.as_str(), entry.public_path(&self.public_prefix));
            }
        }

        GeneratedMap { map, warnings }
    }

    fn resolve_override(
        &self,
        fragment: &str,
        cache_files: &BTreeSet<String>,
    ) -> Result<String, String> {
        if fragment.contains("://") {
            return Err(format!("override '{}' is not a local logo path", fragment));
        }

        let path = self.normalize_override_path(fragment);
        let file_name = path
            .strip_prefix(&self.public_prefix)
            .map(|rest| rest.trim_start_matches('/'))
            .unwrap_or_default();

        if cache_files.contains(file_name) {
            Ok(path)
        } else {
            Err(format!("override file '{}' does not exist", path))
        }
    }

    fn best_entries(cache_files: &BTreeSet<String>) -> BTreeMap<Slug, CacheEntry> {
        let mut best: BTreeMap<Slug, CacheEntry> = BTreeMap::new();
        for entry in cache_files.iter().filter_map(|f| CacheEntry::from_file_name(f)) {
            match best.get(entry.slug()) {
                Some(current) if current.extension() <= entry.extension() => {}
                _ => {
                    best.insert(entry.slug().clone(), entry);
                }
            }
        }
        best
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn brands(names: &[&str]) -> Vec<Brand> {
        names
            .iter()
            .map(|n| Brand::new(n.to_string()).unwrap())
            .collect()
    }

    fn files(names: &[&str]) -> BTreeSet<String> {
        names.iter().map(|n| n.to_string()).collect()
    }

    #[test]
    fn test_normalize_override_path() {
        let generator = MapGenerator::default();
        assert_eq!(generator.normalize_override_path("kw.png"), "/logos/kw.png");
        assert_eq!(generator.normalize_override_path("logos/kw.png"), "/logos/kw.png");
        assert_eq!(generator.normalize_override_path("/logos/kw.png"), "/logos/kw.png");
        assert_eq!(
            generator.normalize_override_path("logosphere.png"),
            "/logos/logosphere.png"
        );
    }

    #[test]
    fn test_prefers_vector_entry() {
        let generated = MapGenerator::default().generate(
            &brands(&["Brembo"]),
            &files(&["brembo.png", "brembo.svg", "brembo.ico"]),
            &BTreeMap::new(),
        );
        assert_eq!(generated.map.get_brand_logo("Brembo"), "/logos/brembo.svg");
    }

    #[test]
    fn test_missing_brand_gets_placeholder() {
        let generated = MapGenerator::default().generate(
            &brands(&["Nonexistent Tuning Co"]),
            &files(&[]),
            &BTreeMap::new(),
        );
        assert_eq!(
            generated.map.get_brand_logo("Nonexistent Tuning Co"),
            DEFAULT_PLACEHOLDER
        );
    }

    #[test]
    fn test_lowercase_variant_added() {
        let generated = MapGenerator::default().generate(
            &brands(&["KW"]),
            &files(&["kw.png"]),
            &BTreeMap::new(),
        );
        assert_eq!(generated.map.entries().get("KW").unwrap(), "/logos/kw.png");
        assert_eq!(generated.map.entries().get("kw").unwrap(), "/logos/kw.png");
    }

    #[test]
    fn test_override_wins_when_file_exists() {
        let mut overrides = BTreeMap::new();
        overrides.insert("Brembo".to_string(), "brembo-white.png".to_string());
        let generated = MapGenerator::default().generate(
            &brands(&["Brembo"]),
            &files(&["brembo.svg", "brembo-white.png"]),
            &overrides,
        );
        assert_eq!(
            generated.map.get_brand_logo("Brembo"),
            "/logos/brembo-white.png"
        );
        assert!(generated.warnings.is_empty());
    }

    #[test]
    fn test_dangling_override_falls_back() {
        let mut overrides = BTreeMap::new();
        overrides.insert("Brembo".to_string(), "/logos/missing.png".to_string());
        overrides.insert("KW".to_string(), "https://cdn.example.com/kw.png".to_string());
        let generated = MapGenerator::default().generate(
            &brands(&["Brembo", "KW"]),
            &files(&["brembo.svg"]),
            &overrides,
        );
        assert_eq!(generated.map.get_brand_logo("Brembo"), "/logos/brembo.svg");
        assert_eq!(generated.map.get_brand_logo("KW"), DEFAULT_PLACEHOLDER);
        assert_eq!(generated.warnings.len(), 2);
    }

    #[test]
    fn test_unclaimed_files_are_kept_under_slug() {
        let generated = MapGenerator::default().generate(
            &brands(&["KW"]),
            &files(&["kw.png", "rizoma.svg", "notes.txt"]),
            &BTreeMap::new(),
        );
        assert_eq!(
            generated.map.entries().get("rizoma").unwrap(),
            "/logos/rizoma.svg"
        );
        assert!(!generated.map.entries().contains_key("notes"));
    }

    #[test]
    fn test_every_value_is_existing_file_or_placeholder() {
        let cache = files(&["kw.png", "brembo.svg"]);
        let generated = MapGenerator::default().generate(
            &brands(&["KW", "Brembo", "Ohlins", "!!!"]),
            &cache,
            &BTreeMap::new(),
        );
        for path in generated.map.entries().values() {
            let exists = path
                .strip_prefix("/logos/")
                .map(|f| cache.contains(f))
                .unwrap_or(false);
            assert!(exists || path == DEFAULT_PLACEHOLDER, "dangling {}", path);
        }
    }

    #[test]
    fn test_generation_is_idempotent() {
        let generator = MapGenerator::new("logos/", DEFAULT_PLACEHOLDER);
        let brand_list = brands(&["KW", "Brembo", "SC Project"]);
        let cache = files(&["kw.png", "brembo.svg", "brembo.png"]);
        let first = generator.generate(&brand_list, &cache, &BTreeMap::new());
        let second = generator.generate(&brand_list, &cache, &BTreeMap::new());
        assert_eq!(first, second);
        assert_eq!(generator.public_prefix(), "/logos");
    }
}

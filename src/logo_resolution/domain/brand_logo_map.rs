use std::collections::BTreeMap;

/// Brand display name → public logo path
///
/// Every value is either the public path of an existing cache entry or the
/// placeholder. Keys are kept sorted so that rendering is deterministic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BrandLogoMap {
    entries: BTreeMap<String, String>,
    placeholder: String,
}

impl BrandLogoMap {
    pub fn new(placeholder: impl Into<String>) -> Self {
        Self {
            entries: BTreeMap::new(),
            placeholder: placeholder.into(),
        }
    }

    /// Inserts or replaces the path for `name`
    pub fn insert(&mut self, name: impl Into<String>, path: impl Into<String>) {
        self.entries.insert(name.into(), path.into());
    }

    /// Inserts only when `name` is not already mapped; returns whether it was inserted
    pub fn insert_if_absent(&mut self, name: impl Into<String>, path: impl Into<String>) -> bool {
        let name = name.into();
        if self.entries.contains_key(&name) {
            return false;
        }
        self.entries.insert(name, path.into());
        true
    }

    /// Resolves a brand's logo: exact name, then case-insensitive, then placeholder
    pub fn get_brand_logo(&self, name: &str) -> &str {
        if let Some(path) = self.entries.get(name) {
            return path;
        }

        let lowered = name.to_lowercase();
        if let Some(path) = self.entries.get(&lowered) {
            return path;
        }

        self.entries
            .iter()
            .find(|(key, _)| key.to_lowercase() == lowered)
            .map(|(_, path)| path.as_str())
            .unwrap_or(&self.placeholder)
    }

    pub fn placeholder(&self) -> &str {
        &self.placeholder
    }

    pub fn entries(&self) -> &BTreeMap<String, String> {
        &self.entries
    }

    /// Number of keys pointing at a real logo rather than the placeholder
    pub fn resolved_count(&self) -> usize {
        self.entries
            .values()
            .filter(|path| **path != self.placeholder)
            .count()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

use super::{CacheExtension, Slug};

/// A logo file `{slug}.{ext}` in the cache directory
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CacheEntry {
    slug: Slug,
    extension: CacheExtension,
}

impl CacheEntry {
    pub fn new(slug: Slug, extension: CacheExtension) -> Self {
        Self { slug, extension }
    }

    /// Parses a cache file name; anything not shaped `{slug}.{known ext}` is ignored
    pub fn from_file_name(file_name: &str) -> Option<Self> {
        let (stem, ext) = file_name.rsplit_once('.')?;
        let extension = CacheExtension::parse(ext)?;
        let slug = Slug::from_normalized(stem)?;
        Some(Self { slug, extension })
    }

    pub fn slug(&self) -> &Slug {
        &self.slug
    }

    pub fn extension(&self) -> CacheExtension {
        self.extension
    }

    pub fn file_name(&self) -> String {
        format!("{}.{}", self.slug, self.extension)
    }

    /// Public path of the entry, e.g. `/logos/kw.png`
    pub fn public_path(&self, public_prefix: &str) -> String {
        format!("{}/{}", public_prefix.trim_end_matches('/'), self.file_name())
    }
}

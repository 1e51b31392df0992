/// Format of a validated logo payload
///
/// Selected by the validator from the payload bytes, never from the URL a
/// provider served it at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LogoFormat {
    Vector,
    Png,
    WebP,
    Jpeg,
    Ico,
}

impl LogoFormat {
    /// Extension the payload is persisted under
    pub fn extension(self) -> CacheExtension {
        match self {
            LogoFormat::Vector => CacheExtension::Svg,
            LogoFormat::Png => CacheExtension::Png,
            LogoFormat::WebP => CacheExtension::Webp,
            LogoFormat::Jpeg => CacheExtension::Jpg,
            LogoFormat::Ico => CacheExtension::Ico,
        }
    }

    pub fn is_vector(self) -> bool {
        matches!(self, LogoFormat::Vector)
    }

    pub fn label(self) -> &'static str {
        match self {
            LogoFormat::Vector => "SVG",
            LogoFormat::Png => "PNG",
            LogoFormat::WebP => "WebP",
            LogoFormat::Jpeg => "JPEG",
            LogoFormat::Ico => "ICO",
        }
    }
}

impl std::fmt::Display for LogoFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// File extension of a cache entry
///
/// Declaration order is preference order: vector first, then progressively
/// lower-fidelity raster formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum CacheExtension {
    Svg,
    Webp,
    Png,
    Jpg,
    Jpeg,
    Ico,
}

impl CacheExtension {
    /// All extensions, highest preference first
    pub const PRIORITY: [CacheExtension; 6] = [
        CacheExtension::Svg,
        CacheExtension::Webp,
        CacheExtension::Png,
        CacheExtension::Jpg,
        CacheExtension::Jpeg,
        CacheExtension::Ico,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            CacheExtension::Svg => "svg",
            CacheExtension::Webp => "webp",
            CacheExtension::Png => "png",
            CacheExtension::Jpg => "jpg",
            CacheExtension::Jpeg => "jpeg",
            CacheExtension::Ico => "ico",
        }
    }

    /// Parses a file extension, case-insensitively
    pub fn parse(ext: &str) -> Option<Self> {
        let ext = ext.to_ascii_lowercase();
        Self::PRIORITY.into_iter().find(|e| e.as_str() == ext)
    }

    /// Rank in the priority list (0 is best)
    pub fn rank(self) -> usize {
        self as usize
    }

    pub fn is_vector(self) -> bool {
        matches!(self, CacheExtension::Svg)
    }
}

impl std::fmt::Display for CacheExtension {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

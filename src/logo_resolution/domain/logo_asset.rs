use super::LogoFormat;

/// A validated logo payload, alive only between validation and persistence
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogoAsset {
    bytes: Vec<u8>,
    format: LogoFormat,
    provider: String,
    source_url: String,
    dimensions: Option<(u32, u32)>,
}

impl LogoAsset {
    pub fn new(
        bytes: Vec<u8>,
        format: LogoFormat,
        provider: impl Into<String>,
        source_url: impl Into<String>,
    ) -> Self {
        Self {
            bytes,
            format,
            provider: provider.into(),
            source_url: source_url.into(),
            dimensions: None,
        }
    }

    pub fn with_dimensions(mut self, dimensions: Option<(u32, u32)>) -> Self {
        self.dimensions = dimensions;
        self
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn format(&self) -> LogoFormat {
        self.format
    }

    pub fn provider(&self) -> &str {
        &self.provider
    }

    pub fn source_url(&self) -> &str {
        &self.source_url
    }

    /// Pixel dimensions, when the raster header was decoded
    pub fn dimensions(&self) -> Option<(u32, u32)> {
        self.dimensions
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

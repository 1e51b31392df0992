use super::validation_policy::{detect_format, raster_dimensions};
use crate::logo_resolution::domain::{CacheExtension, LogoFormat};

/// Default pixel floor for the analyzer
pub const DEFAULT_QUALITY_THRESHOLD: u32 = 300;

/// Assessment of a cached logo file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogoQuality {
    Vector,
    HighResolution { width: u32, height: u32 },
    LowResolution { width: u32, height: u32 },
    /// ICO files are favicon-grade no matter their size
    FaviconFormat,
    /// Content does not match any known format or cannot be decoded
    Unreadable,
}

impl LogoQuality {
    pub fn needs_upgrade(self) -> bool {
        !matches!(self, LogoQuality::Vector | LogoQuality::HighResolution { .. })
    }

    pub fn describe(self) -> String {
        match self {
            LogoQuality::Vector => "vector".to_string(),
            LogoQuality::HighResolution { width, height } => format!("{}x{}", width, height),
            LogoQuality::LowResolution { width, height } => {
                format!("{}x{} (low resolution)", width, height)
            }
            LogoQuality::FaviconFormat => "favicon (ico)".to_string(),
            LogoQuality::Unreadable => "unreadable".to_string(),
        }
    }
}

/// Decides whether a cached logo is good enough or should be upgraded
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QualityPolicy {
    min_dimension: u32,
}

impl Default for QualityPolicy {
    fn default() -> Self {
        Self::new(DEFAULT_QUALITY_THRESHOLD)
    }
}

impl QualityPolicy {
    pub fn new(min_dimension: u32) -> Self {
        Self { min_dimension }
    }

    pub fn min_dimension(&self) -> u32 {
        self.min_dimension
    }

    /// Assesses the bytes of a cache entry
    ///
    /// The content decides, not the extension: an `.svg` that holds no SVG
    /// markup is `Unreadable`, an `.ico` holding a PNG is judged as raster.
    pub fn assess(&self, extension: CacheExtension, bytes: &[u8]) -> LogoQuality {
        let format = match detect_format(bytes) {
            Ok(format) => format,
            Err(_) => return LogoQuality::Unreadable,
        };

        match format {
            LogoFormat::Vector => LogoQuality::Vector,
            LogoFormat::Ico => LogoQuality::FaviconFormat,
            _ if extension == CacheExtension::Ico => LogoQuality::FaviconFormat,
            _ => match raster_dimensions(bytes) {
                Ok((width, height)) if width.max(height) >= self.min_dimension => {
                    LogoQuality::HighResolution { width, height }
                }
                Ok((width, height)) => LogoQuality::LowResolution { width, height },
                Err(_) => LogoQuality::Unreadable,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn encoded_png(width: u32, height: u32) -> Vec<u8> {
        let image = image::RgbaImage::from_pixel(width, height, image::Rgba([0, 0, 0, 255]));
        let mut out = Cursor::new(Vec::new());
        image.write_to(&mut out, image::ImageFormat::Png).unwrap();
        out.into_inner()
    }

    #[test]
    fn test_vector_is_good() {
        let policy = QualityPolicy::default();
        let quality = policy.assess(CacheExtension::Svg, b"<svg viewBox=\"0 0 1 1\"></svg>");
        assert_eq!(quality, LogoQuality::Vector);
        assert!(!quality.needs_upgrade());
    }

    #[test]
    fn test_large_raster_is_good() {
        let policy = QualityPolicy::new(300);
        let quality = policy.assess(CacheExtension::Png, &encoded_png(512, 512));
        assert_eq!(
            quality,
            LogoQuality::HighResolution {
                width: 512,
                height: 512
            }
        );
        assert!(!quality.needs_upgrade());
    }

    #[test]
    fn test_small_raster_needs_upgrade() {
        let policy = QualityPolicy::new(300);
        let quality = policy.assess(CacheExtension::Png, &encoded_png(64, 64));
        assert_eq!(
            quality,
            LogoQuality::LowResolution {
                width: 64,
                height: 64
            }
        );
        assert!(quality.needs_upgrade());
        assert_eq!(quality.describe(), "64x64 (low resolution)");
    }

    #[test]
    fn test_ico_extension_is_favicon_grade() {
        let policy = QualityPolicy::new(16);
        let quality = policy.assess(CacheExtension::Ico, &encoded_png(512, 512));
        assert_eq!(quality, LogoQuality::FaviconFormat);
        assert!(quality.needs_upgrade());
    }

    #[test]
    fn test_garbage_is_unreadable() {
        let policy = QualityPolicy::default();
        assert_eq!(
            policy.assess(CacheExtension::Svg, b"Not Found"),
            LogoQuality::Unreadable
        );
    }
}

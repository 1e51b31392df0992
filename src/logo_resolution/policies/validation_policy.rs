use crate::logo_resolution::domain::LogoFormat;
use crate::shared::security::MAX_DOWNLOAD_SIZE;
use image::ImageReader;
use std::io::Cursor;
use thiserror::Error;

/// Default minimum payload size in bytes
pub const DEFAULT_MIN_BYTES: usize = 500;

const PNG_MAGIC: &[u8] = &[0x89, 0x50, 0x4E, 0x47];
const JPEG_MAGIC: &[u8] = &[0xFF, 0xD8, 0xFF];
const ICO_MAGIC: &[u8] = &[0x00, 0x00, 0x01, 0x00];

/// Lowercased markers of an HTML document root
const HTML_MARKERS: &[&str] = &["<!doctype html", "<html"];

/// Why a fetched candidate was discarded
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Rejection {
    #[error("request failed: {0}")]
    Network(String),

    #[error("HTTP status {0}")]
    HttpStatus(u16),

    #[error("payload too small ({len} bytes, minimum {min})")]
    TooSmall { len: usize, min: usize },

    #[error("payload too large ({len} bytes, maximum {max})")]
    TooLarge { len: usize, max: usize },

    #[error("HTML document instead of an image")]
    HtmlDocument,

    #[error("unrecognized image signature")]
    UnrecognizedSignature,

    #[error("image is {width}x{height}, below the {min}px floor")]
    BelowDimensionFloor { width: u32, height: u32, min: u32 },

    #[error("image header could not be decoded: {0}")]
    Undecodable(String),
}

/// Payload accepted by [`ValidationPolicy::validate`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidatedPayload {
    pub format: LogoFormat,
    pub dimensions: Option<(u32, u32)>,
}

/// Gate every downloaded payload must pass before it may be cached
///
/// Checks, in order: size bounds, format signature (magic bytes or SVG
/// markup; the declared content-type is never trusted), and an optional
/// pixel floor for raster formats. The floor applies to the longer side so
/// that wide wordmarks are not rejected for being short.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationPolicy {
    min_bytes: usize,
    max_bytes: usize,
    min_dimension: Option<u32>,
}

impl Default for ValidationPolicy {
    fn default() -> Self {
        Self {
            min_bytes: DEFAULT_MIN_BYTES,
            max_bytes: MAX_DOWNLOAD_SIZE,
            min_dimension: None,
        }
    }
}

impl ValidationPolicy {
    pub fn new(min_bytes: usize, min_dimension: Option<u32>) -> Self {
        Self {
            min_bytes,
            min_dimension,
            ..Self::default()
        }
    }

    pub fn min_bytes(&self) -> usize {
        self.min_bytes
    }

    pub fn min_dimension(&self) -> Option<u32> {
        self.min_dimension
    }

    /// Validates a payload
    ///
    /// # Arguments
    /// * `bytes` - Response body
    /// * `min_bytes_override` - Candidate-specific minimum replacing the policy default
    pub fn validate(
        &self,
        bytes: &[u8],
        min_bytes_override: Option<usize>,
    ) -> Result<ValidatedPayload, Rejection> {
        let min = min_bytes_override.unwrap_or(self.min_bytes);
        if bytes.len() < min {
            return Err(Rejection::TooSmall {
                len: bytes.len(),
                min,
            });
        }
        if bytes.len() > self.max_bytes {
            return Err(Rejection::TooLarge {
                len: bytes.len(),
                max: self.max_bytes,
            });
        }

        let format = detect_format(bytes)?;

        let dimensions = match (format.is_vector(), self.min_dimension) {
            (false, Some(floor)) => {
                let (width, height) =
                    raster_dimensions(bytes).map_err(Rejection::Undecodable)?;
                if width.max(height) < floor {
                    return Err(Rejection::BelowDimensionFloor {
                        width,
                        height,
                        min: floor,
                    });
                }
                Some((width, height))
            }
            _ => None,
        };

        Ok(ValidatedPayload { format, dimensions })
    }
}

/// Determines the payload format from its leading bytes or markup
pub fn detect_format(bytes: &[u8]) -> Result<LogoFormat, Rejection> {
    if bytes.starts_with(PNG_MAGIC) {
        return Ok(LogoFormat::Png);
    }
    if bytes.len() >= 12 && &bytes[0..4] == b"RIFF" && &bytes[8..12] == b"WEBP" {
        return Ok(LogoFormat::WebP);
    }
    if bytes.starts_with(JPEG_MAGIC) {
        return Ok(LogoFormat::Jpeg);
    }
    if bytes.starts_with(ICO_MAGIC) {
        return Ok(LogoFormat::Ico);
    }

    let markup = String::from_utf8_lossy(bytes).to_ascii_lowercase();
    let svg_at = markup.find("<svg");
    let html_at = HTML_MARKERS
        .iter()
        .filter_map(|marker| markup.find(marker))
        .min();

    // An HTML root before any `<svg`, whatever comments or XML prolog
    // precede it, makes the payload a web page with an inline icon.
    // `<?xml` alone is not enough either: S3/CDN error bodies are XML too.
    match (html_at, svg_at) {
        (Some(html), Some(svg)) if html < svg => Err(Rejection::HtmlDocument),
        (Some(_), None) => Err(Rejection::HtmlDocument),
        (_, Some(_)) => Ok(LogoFormat::Vector),
        (None, None) => Err(Rejection::UnrecognizedSignature),
    }
}

/// Reads raster pixel dimensions from the image header
pub fn raster_dimensions(bytes: &[u8]) -> Result<(u32, u32), String> {
    ImageReader::new(Cursor::new(bytes))
        .with_guessed_format()
        .map_err(|e| e.to_string())?
        .into_dimensions()
        .map_err(|e| e.to_string())
}

mod quality_policy;
mod validation_policy;

pub use quality_policy::{LogoQuality, QualityPolicy, DEFAULT_QUALITY_THRESHOLD};
pub use validation_policy::{
    detect_format, raster_dimensions, Rejection, ValidatedPayload, ValidationPolicy,
    DEFAULT_MIN_BYTES,
};

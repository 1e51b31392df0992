pub mod brand;
pub mod brand_logo_map;
pub mod cache_entry;
pub mod host;
pub mod logo_asset;
pub mod logo_format;
pub mod slug;
pub mod source_candidate;

pub use brand::{Brand, BrandCategory, BrandName};
pub use brand_logo_map::BrandLogoMap;
pub use cache_entry::CacheEntry;
pub use host::normalize_host;
pub use logo_asset::LogoAsset;
pub use logo_format::{CacheExtension, LogoFormat};
pub use slug::{slugify, Slug};
pub use source_candidate::{CandidateKind, ExpectedFormat, SourceCandidate, SourceTier};

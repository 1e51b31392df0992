pub mod candidate_builder;
pub mod known_domains;
pub mod logo_page_extractor;
pub mod map_generator;

pub use candidate_builder::CandidateBuilder;
pub use known_domains::KnownDomains;
pub use logo_page_extractor::{LogoPageExtractor, DEFAULT_MAX_LOGO_URLS};
pub use map_generator::{GeneratedMap, MapGenerator, DEFAULT_PLACEHOLDER, DEFAULT_PUBLIC_PREFIX};

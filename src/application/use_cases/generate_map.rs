use crate::application::dto::PipelineConfig;
use crate::logo_resolution::domain::Brand;
use crate::logo_resolution::services::{GeneratedMap, MapGenerator};
use crate::ports::outbound::LogoCache;
use crate::shared::Result;
use std::collections::BTreeMap;

/// GenerateMapUseCase - Rebuilds the lookup map from the cache alone
///
/// No network access; reads only the cache directory listing and the
/// manual logo overrides.
pub struct GenerateMapUseCase<C: LogoCache> {
    cache: C,
    generator: MapGenerator,
    logo_overrides: BTreeMap<String, String>,
}

impl<C: LogoCache> GenerateMapUseCase<C> {
    pub fn new(cache: C, config: &PipelineConfig) -> Self {
        Self {
            cache,
            generator: MapGenerator::new(&config.public_prefix, &config.placeholder),
            logo_overrides: config.logo_overrides.clone(),
        }
    }

    pub fn execute(&self, brands: &[Brand]) -> Result<GeneratedMap> {
        let file_names = self.cache.list_file_names()?;
        Ok(self
            .generator
            .generate(brands, &file_names, &self.logo_overrides))
    }
}

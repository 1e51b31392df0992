use crate::logo_resolution::domain::BrandLogoMap;
use crate::ports::outbound::MapFormatter;
use crate::shared::Result;
use serde::Serialize;
use std::collections::BTreeMap;

#[derive(Serialize)]
struct JsonMap<'a> {
    placeholder: &'a str,
    logos: &'a BTreeMap<String, String>,
}

/// JsonMapFormatter adapter emitting `{ "placeholder": ..., "logos": { ... } }`
pub struct JsonMapFormatter;

impl JsonMapFormatter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for JsonMapFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl MapFormatter for JsonMapFormatter {
    fn format(&self, map: &BrandLogoMap) -> Result<String> {
        let document = JsonMap {
            placeholder: map.placeholder(),
            logos: map.entries(),
        };
        let mut output = serde_json::to_string_pretty(&document)?;
        output.push('\n');
        Ok(output)
    }
}

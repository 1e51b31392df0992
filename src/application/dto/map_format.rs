/// Output format of the generated lookup artifact
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MapFormat {
    /// TypeScript module exporting `BRAND_LOGOS` and `getBrandLogo` (default)
    #[default]
    TypeScript,
    /// Plain JSON object
    Json,
}

impl std::str::FromStr for MapFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "typescript" | "ts" => Ok(MapFormat::TypeScript),
            "json" => Ok(MapFormat::Json),
            _ => Err(format!(
                "Invalid map format: {}. Please specify 'typescript' or 'json'",
                s
            )),
        }
    }
}

impl std::fmt::Display for MapFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MapFormat::TypeScript => write!(f, "typescript"),
            MapFormat::Json => write!(f, "json"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_map_format_from_str() {
        assert_eq!(MapFormat::from_str("ts").unwrap(), MapFormat::TypeScript);
        assert_eq!(
            MapFormat::from_str("TypeScript").unwrap(),
            MapFormat::TypeScript
        );
        assert_eq!(MapFormat::from_str("JSON").unwrap(), MapFormat::Json);
    }

    #[test]
    fn test_map_format_from_str_invalid() {
        let error = MapFormat::from_str("yaml").unwrap_err();
        assert!(error.contains("Invalid map format"));
        assert!(error.contains("yaml"));
    }

    #[test]
    fn test_map_format_display_round_trips() {
        for format in [MapFormat::TypeScript, MapFormat::Json] {
            assert_eq!(MapFormat::from_str(&format.to_string()).unwrap(), format);
        }
    }

    #[test]
    fn test_map_format_default() {
        assert_eq!(MapFormat::default(), MapFormat::TypeScript);
    }
}

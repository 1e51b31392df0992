use crate::logo_resolution::domain::BrandLogoMap;
use crate::ports::outbound::MapFormatter;
use crate::shared::Result;
use std::fmt::Write;

const HEADER: &str = "// Generated by logo-resolver. Do not edit by hand.\n\n";

const LOOKUP_FUNCTION: &str = r#"export function getBrandLogo(name: string): string {
  const exact = BRAND_LOGOS[name];
  if (exact) {
    return exact;
  }
  const lowered = name.toLowerCase();
  const key = Object.keys(BRAND_LOGOS).find((k) => k.toLowerCase() === lowered);
  return key ? BRAND_LOGOS[key] : PLACEHOLDER_LOGO;
}
"#;

/// TypeScriptMapFormatter adapter for the `brandLogos.ts` module
///
/// Emits `PLACEHOLDER_LOGO`, `BRAND_LOGOS` and `getBrandLogo(name)`. The
/// output carries no timestamp, so the same map always renders to the same
/// bytes.
pub struct TypeScriptMapFormatter;

impl TypeScriptMapFormatter {
    pub fn new() -> Self {
        Self
    }

    /// Quotes a value as a string literal valid in both JSON and TypeScript
    fn literal(value: &str) -> Result<String> {
        Ok(serde_json::to_string(value)?)
    }
}

impl Default for TypeScriptMapFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl MapFormatter for TypeScriptMapFormatter {
    fn format(&self, map: &BrandLogoMap) -> Result<String> {
        let mut output = String::from(HEADER);

        writeln!(
            output,
            "export const PLACEHOLDER_LOGO = {};\n",
            Self::literal(map.placeholder())?
        )?;

        output.push_str("export const BRAND_LOGOS: Record<string, string> = {\n");
        for (name, path) in map.entries() {
            writeln!(
                output,
                "  {}: {},",
                Self::literal(name)?,
                Self::literal(path)?
            )?;
        }
        output.push_str("};\n\n");
        output.push_str(LOOKUP_FUNCTION);

        Ok(output)
    }
}

/// Maps a brand display name to a filesystem- and URL-safe token.
///
/// Lowercases, folds common Latin diacritics, turns whitespace and
/// underscores into hyphens, drops everything outside `[a-z0-9-]`, collapses
/// hyphen runs and trims hyphens at both ends. Total and deterministic; an
/// all-punctuation name yields an empty string.
pub fn slugify(name: &str) -> String {
    let mut slug = String::with_capacity(name.len());
    let mut pending_hyphen = false;

    for c in name.chars().flat_map(char::to_lowercase) {
        let c = fold_diacritic(c);
        if c.is_whitespace() || c == '-' || c == '_' {
            pending_hyphen = true;
        } else if c.is_ascii_lowercase() || c.is_ascii_digit() {
            if pending_hyphen && !slug.is_empty() {
                slug.push('-');
            }
            pending_hyphen = false;
            slug.push(c);
        }
        // Anything else is stripped without acting as a separator,
        // so "H&R" becomes "hr" rather than "h-r".
    }

    slug
}

fn fold_diacritic(c: char) -> char {
    match c {
        'à' | 'á' | 'â' | 'ã' | 'ä' | 'å' | 'ā' => 'a',
        'ç' | 'č' | 'ć' => 'c',
        'è' | 'é' | 'ê' | 'ë' | 'ē' | 'ę' | 'ě' => 'e',
        'ì' | 'í' | 'î' | 'ï' | 'ī' => 'i',
        'ñ' | 'ń' | 'ň' => 'n',
        'ò' | 'ó' | 'ô' | 'õ' | 'ö' | 'ø' | 'ō' => 'o',
        'ù' | 'ú' | 'û' | 'ü' | 'ū' | 'ů' => 'u',
        'ý' | 'ÿ' => 'y',
        'š' | 'ś' => 's',
        'ž' | 'ź' | 'ż' => 'z',
        'ł' => 'l',
        'ř' => 'r',
        'ß' => 's',
        other => other,
    }
}

/// Non-empty slug derived from a brand name
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Slug(String);

impl Slug {
    /// Returns `None` when the name normalizes to nothing; such brands are
    /// unresolvable and must never be written as a root-level `.ext` file.
    pub fn from_name(name: &str) -> Option<Self> {
        let slug = slugify(name);
        (!slug.is_empty()).then_some(Self(slug))
    }

    /// Wraps an already-normalized slug, e.g. a cache file stem.
    pub fn from_normalized(slug: &str) -> Option<Self> {
        (!slug.is_empty() && slugify(slug) == slug).then(|| Self(slug.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Slug {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_well_formed(slug: &str) {
        assert!(slug
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-'));
        assert!(!slug.starts_with('-'));
        assert!(!slug.ends_with('-'));
        assert!(!slug.contains("--"));
    }

    #[test]
    fn test_slugify_basic() {
        assert_eq!(slugify("Brembo"), "brembo");
        assert_eq!(slugify("SC Project"), "sc-project");
        assert_eq!(slugify("Mercedes-AMG"), "mercedes-amg");
    }

    #[test]
    fn test_slugify_collapses_separators() {
        assert_eq!(slugify("  Akrapovič   Exhaust  "), "akrapovic-exhaust");
        assert_eq!(slugify("Milltek -- Sport"), "milltek-sport");
        assert_eq!(slugify("red_bull racing"), "red-bull-racing");
    }

    #[test]
    fn test_slugify_strips_punctuation() {
        assert_eq!(slugify("H&R"), "hr");
        assert_eq!(slugify("K&N Filters"), "kn-filters");
        assert_eq!(slugify("Dr. Ing. h.c. F. Porsche"), "dr-ing-hc-f-porsche");
    }

    #[test]
    fn test_slugify_folds_diacritics() {
        assert_eq!(slugify("Öhlins"), "ohlins");
        assert_eq!(slugify("Akrapovič"), "akrapovic");
    }

    #[test]
    fn test_slugify_empty_and_punctuation_only() {
        assert_eq!(slugify(""), "");
        assert_eq!(slugify("!!! ---"), "");
        assert_eq!(slugify("Ключ"), "");
    }

    #[test]
    fn test_slugify_is_deterministic_and_well_formed() {
        let names = [
            "KW",
            "Nonexistent Tuning Co",
            "-Leading and trailing-",
            "A__B  C--D",
            "BMW M Performance",
            "  ",
            "Öhlins",
            "ÄÖÜ ß",
            "100% Pure-Carbon",
        ];
        for name in names {
            let first = slugify(name);
            assert_eq!(first, slugify(name));
            assert_well_formed(&first);
        }
    }

    #[test]
    fn test_slug_from_name_rejects_empty() {
        assert!(Slug::from_name("???").is_none());
        assert_eq!(Slug::from_name("KW").unwrap().as_str(), "kw");
    }

    #[test]
    fn test_slug_from_normalized() {
        assert!(Slug::from_normalized("sc-project").is_some());
        assert!(Slug::from_normalized("SC Project").is_none());
        assert!(Slug::from_normalized("").is_none());
    }
}

/// Curated brand → domain table for well-known performance-parts brands
///
/// Consulted after manual overrides and before any web search. Names are
/// matched case-insensitively.
pub struct KnownDomains;

const KNOWN_DOMAINS: &[(&str, &str)] = &[
    // Auto
    ("ABT", "abt-sportsline.de"),
    ("AC Schnitzer", "ac-schnitzer.de"),
    ("Akrapovic", "akrapovic.com"),
    ("Akrapovič", "akrapovic.com"),
    ("Armytrix", "armytrix.com"),
    ("BBS", "bbs.com"),
    ("Bilstein", "bilstein.com"),
    ("Borla", "borla.com"),
    ("Brabus", "brabus.com"),
    ("Brembo", "brembo.com"),
    ("Capristo", "capristo.de"),
    ("Eibach", "eibach.com"),
    ("Eventuri", "eventuri.net"),
    ("H&R", "h-r.com"),
    ("HRE", "hrewheels.com"),
    ("K&N", "knfilters.com"),
    ("KW", "kwsuspensions.com"),
    ("Liberty Walk", "libertywalk.co.jp"),
    ("Mansory", "mansory.com"),
    ("Milltek", "millteksport.com"),
    ("Novitec", "novitecgroup.com"),
    ("OZ Racing", "ozracing.com"),
    ("Recaro", "recaro-automotive.com"),
    ("Remus", "remus.eu"),
    ("Sparco", "sparco-official.com"),
    ("Vorsteiner", "vorsteiner.com"),
    ("Wagner Tuning", "wagner-tuning.com"),
    // Moto
    ("Arrow", "arrow.it"),
    ("Galfer", "galfer.eu"),
    ("Ohlins", "ohlins.com"),
    ("Öhlins", "ohlins.com"),
    ("Rizoma", "rizoma.com"),
    ("SC-Project", "sc-project.com"),
    ("SC Project", "sc-project.com"),
    ("Termignoni", "termignoni.it"),
    ("Yoshimura", "yoshimura-rd.com"),
];

impl KnownDomains {
    /// Looks up a brand's domain, ignoring case
    pub fn lookup(brand_name: &str) -> Option<&'static str> {
        let wanted = brand_name.trim().to_lowercase();
        KNOWN_DOMAINS
            .iter()
            .find(|(name, _)| name.to_lowercase() == wanted)
            .map(|(_, domain)| *domain)
    }

    pub fn len() -> usize {
        KNOWN_DOMAINS.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_exact() {
        assert_eq!(KnownDomains::lookup("Brembo"), Some("brembo.com"));
    }

    #[test]
    fn test_lookup_case_insensitive() {
        assert_eq!(KnownDomains::lookup("kw"), Some("kwsuspensions.com"));
        assert_eq!(KnownDomains::lookup("  ÖHLINS "), Some("ohlins.com"));
    }

    #[test]
    fn test_lookup_unknown() {
        assert_eq!(KnownDomains::lookup("Nonexistent Tuning Co"), None);
    }

    #[test]
    fn test_table_domains_are_bare_hosts() {
        assert!(KnownDomains::len() > 0);
        for (_, domain) in KNOWN_DOMAINS {
            assert!(!domain.starts_with("www."));
            assert!(!domain.contains('/'));
        }
    }
}

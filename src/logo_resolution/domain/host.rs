use url::Url;

/// Reduces a domain, host or URL to a bare lowercase host without `www.`
///
/// Returns `None` for input that has no host or no dot in it.
pub fn normalize_host(raw: &str) -> Option<String> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    let url = if raw.contains("://") {
        Url::parse(raw).ok()?
    } else {
        Url::parse(&format!("https://{}", raw)).ok()?
    };

    let host = url.host_str()?.trim_end_matches('.').to_ascii_lowercase();
    let host = host.strip_prefix("www.").unwrap_or(&host);
    host.contains('.').then(|| host.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_bare_domain() {
        assert_eq!(normalize_host("brembo.com"), Some("brembo.com".to_string()));
    }

    #[test]
    fn test_normalize_strips_www_scheme_and_path() {
        assert_eq!(
            normalize_host("https://WWW.KWSuspensions.com/en/home?x=1"),
            Some("kwsuspensions.com".to_string())
        );
        assert_eq!(
            normalize_host("www.ohlins.com/"),
            Some("ohlins.com".to_string())
        );
    }

    #[test]
    fn test_normalize_rejects_non_hosts() {
        assert_eq!(normalize_host(""), None);
        assert_eq!(normalize_host("localhost"), None);
        assert_eq!(normalize_host("not a domain"), None);
    }
}

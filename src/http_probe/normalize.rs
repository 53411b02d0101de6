/// Scheme prepended to input that carries none.
pub const DEFAULT_SCHEME: &str = "https://";

/// True when `input` starts with `scheme://`, where the scheme is an ASCII
/// letter followed by letters, digits, `+`, `-` or `.`.
fn has_scheme(input: &str) -> bool {
    let Some((scheme, _)) = input.split_once("://") else {
        return false;
    };
    let mut chars = scheme.chars();
    chars.next().is_some_and(|c| c.is_ascii_alphabetic())
        && chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
}

/// Turns raw user input into the exact string that will be dispatched.
///
/// Returns `None` for absent or blank input. Input that already starts
/// with a scheme (`scheme://...`) is passed through untouched after
/// trimming; anything else is treated as a bare host and gets `https://`
/// prepended, even when a URL appears later in its path or query.
pub fn normalize_target(raw_input: Option<&str>) -> Option<String> {
    let trimmed = raw_input?.trim();
    if trimmed.is_empty() {
        return None;
    }

    if has_scheme(trimmed) {
        Some(trimmed.to_string())
    } else {
        Some(format!("{DEFAULT_SCHEME}{trimmed}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absent_or_blank_input_is_missing() {
        assert_eq!(normalize_target(None), None);
        assert_eq!(normalize_target(Some("")), None);
        assert_eq!(normalize_target(Some("   \t\n")), None);
    }

    #[test]
    fn test_explicit_scheme_is_kept() {
        assert_eq!(
            normalize_target(Some("https://example.com")).as_deref(),
            Some("https://example.com")
        );
        assert_eq!(
            normalize_target(Some("http://example.com/path?q=1")).as_deref(),
            Some("http://example.com/path?q=1")
        );
    }

    #[test]
    fn test_bare_domain_defaults_to_https() {
        assert_eq!(
            normalize_target(Some("example.com")).as_deref(),
            Some("https://example.com")
        );
        assert_eq!(
            normalize_target(Some("  localhost:8080/status ")).as_deref(),
            Some("https://localhost:8080/status")
        );
    }

    #[test]
    fn test_url_inside_bare_host_input_still_gets_a_scheme() {
        assert_eq!(
            normalize_target(Some("example.com/login?next=http://elsewhere")).as_deref(),
            Some("https://example.com/login?next=http://elsewhere")
        );
        assert_eq!(
            normalize_target(Some("127.0.0.1:8080/ok?next=http://x")).as_deref(),
            Some("https://127.0.0.1:8080/ok?next=http://x")
        );
        assert_eq!(
            normalize_target(Some("example.com#https://x")).as_deref(),
            Some("https://example.com#https://x")
        );
    }

    #[test]
    fn test_has_scheme() {
        assert!(has_scheme("https://example.com"));
        assert!(has_scheme("svn+ssh://host"));
        assert!(!has_scheme("example.com"));
        assert!(!has_scheme("://example.com"));
        assert!(!has_scheme("1http://example.com"));
        assert!(!has_scheme("host/path?u=http://x"));
    }

    #[test]
    fn test_normalization_is_deterministic() {
        let first = normalize_target(Some("www.yahoo.co.jp"));
        let second = normalize_target(Some("www.yahoo.co.jp"));
        assert_eq!(first, second);
    }
}

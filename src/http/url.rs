/// `true` when `target` carries its own scheme (`http://…`, `https://…`,
/// or any other `<scheme>://`) and must bypass the base URL.
pub fn is_absolute(target: &str) -> bool {
    let Some(idx) = target.find("://") else {
        return false;
    };
    let scheme = &target[..idx];
    let mut chars = scheme.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
}

/// Combine the base URL and a request target.
/// - absolute target → used verbatim, base is ignored
/// - empty target → the base itself
/// - anything else → appended under the base; a leading `/` does NOT
///   escape the base's path prefix (`/classes/` still lands under `/api/`)
pub fn compose(base: &str, target: &str) -> String {
    if is_absolute(target) {
        return target.to_string();
    }
    if target.is_empty() {
        return base.to_string();
    }
    format!(
        "{}/{}",
        base.trim_end_matches('/'),
        target.trim_start_matches('/')
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compose_relative() {
        assert_eq!(
            compose("http://127.0.0.1:8000/api/", "classes/"),
            "http://127.0.0.1:8000/api/classes/"
        );
    }

    #[test]
    fn test_compose_leading_slash_stays_under_base() {
        assert_eq!(
            compose("http://127.0.0.1:8000/api/", "/classes/"),
            "http://127.0.0.1:8000/api/classes/"
        );
    }

    #[test]
    fn test_compose_base_without_trailing_slash() {
        assert_eq!(
            compose("https://api.example.com/v2", "tests/3/results/"),
            "https://api.example.com/v2/tests/3/results/"
        );
    }

    #[test]
    fn test_compose_absolute_overrides_base() {
        assert_eq!(
            compose("http://127.0.0.1:8000/api/", "https://other.example.com/ping"),
            "https://other.example.com/ping"
        );
    }

    #[test]
    fn test_compose_empty_target() {
        assert_eq!(
            compose("http://127.0.0.1:8000/api/", ""),
            "http://127.0.0.1:8000/api/"
        );
    }

    #[test]
    fn test_is_absolute() {
        assert!(is_absolute("http://example.com"));
        assert!(is_absolute("HTTPS://example.com"));
        assert!(is_absolute("custom+scheme-1.0://x"));
        assert!(!is_absolute("classes/"));
        assert!(!is_absolute("/classes/"));
        assert!(!is_absolute("://no-scheme"));
        assert!(!is_absolute("1http://leading-digit"));
    }
}

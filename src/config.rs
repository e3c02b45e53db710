use std::env;

/// Environment variable that overrides the API base URL.
pub const BASE_URL_ENV: &str = "MARKBOOK_API_BASE_URL";

/// Base URL used when the variable is unset or empty: the local dev server.
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8000/api/";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub base_url: String,
}

impl ClientConfig {
    /// Read the base URL from the process environment.
    pub fn from_env() -> Self {
        Self::resolve(env::var(BASE_URL_ENV).ok())
    }

    /// Resolve an externally supplied base URL. Absent and empty (or
    /// whitespace-only) values both fall back to [`DEFAULT_BASE_URL`];
    /// anything else is taken verbatim. Malformed URLs are not rejected
    /// here — they fail at request time like any other bad URL.
    pub fn resolve(value: Option<String>) -> Self {
        let base_url = value
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        Self { base_url }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_set() {
        let config = ClientConfig::resolve(Some("https://api.example.com/v2/".to_string()));
        assert_eq!(config.base_url, "https://api.example.com/v2/");
    }

    #[test]
    fn test_resolve_absent() {
        let config = ClientConfig::resolve(None);
        assert_eq!(config.base_url, "http://127.0.0.1:8000/api/");
    }

    #[test]
    fn test_resolve_empty_falls_back() {
        let config = ClientConfig::resolve(Some(String::new()));
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
    }

    #[test]
    fn test_resolve_whitespace_falls_back() {
        let config = ClientConfig::resolve(Some("   ".to_string()));
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
    }

    #[test]
    fn test_resolve_verbatim_no_normalization() {
        // Even a value that is not a valid URL is kept as-is.
        let config = ClientConfig::resolve(Some("not a url".to_string()));
        assert_eq!(config.base_url, "not a url");
    }

    #[test]
    fn test_resolve_idempotent() {
        let value = Some("https://api.example.com/v2/".to_string());
        let first = ClientConfig::resolve(value.clone());
        let second = ClientConfig::resolve(value);
        assert_eq!(first, second);
    }
}

//! API utilities for frontend-backend communication
//!
//! Resolves the origin the catalog API is served from.

use crate::shared::config::{load_config, ApiConfig};

/// Get the base URL for API requests
///
/// Uses the configured `api.base_url` when set. Otherwise the URL is built
/// from the current window location and the configured port.
///
/// # Returns
/// - API base URL like "http://localhost:8000" or "https://quotes.example.com"
pub fn api_base() -> String {
    let config = load_config();
    let (protocol, hostname) = match web_sys::window() {
        Some(w) => {
            let location = w.location();
            (location.protocol().ok(), location.hostname().ok())
        }
        None => (None, None),
    };
    resolve_api_base(&config.api, protocol.as_deref(), hostname.as_deref())
}

/// Pick the API origin from configuration and the page location
pub fn resolve_api_base(api: &ApiConfig, protocol: Option<&str>, hostname: Option<&str>) -> String {
    let explicit = api.base_url.trim().trim_end_matches('/');
    if !explicit.is_empty() {
        return explicit.to_string();
    }
    let protocol = protocol.filter(|p| !p.is_empty()).unwrap_or("http:");
    let hostname = hostname.filter(|h| !h.is_empty()).unwrap_or("127.0.0.1");
    format!("{}//{}:{}", protocol, hostname, api.port)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_base_wins() {
        let api = ApiConfig {
            base_url: "https://quotes.example.com/".to_string(),
            port: 8000,
        };
        assert_eq!(
            resolve_api_base(&api, Some("http:"), Some("localhost")),
            "https://quotes.example.com"
        );
    }

    #[test]
    fn test_base_from_location() {
        let api = ApiConfig::default();
        assert_eq!(
            resolve_api_base(&api, Some("https:"), Some("quotes.local")),
            "https://quotes.local:8000"
        );
    }

    #[test]
    fn test_base_without_location() {
        let api = ApiConfig {
            base_url: String::new(),
            port: 9000,
        };
        assert_eq!(resolve_api_base(&api, None, None), "http://127.0.0.1:9000");
    }
}

//! HTTP client creation and configuration utilities

use once_cell::sync::Lazy;
use reqwest::Client;
use reqwest::header::{ACCEPT, ACCEPT_LANGUAGE, HeaderMap, HeaderValue, ORIGIN, REFERER, USER_AGENT};
use std::time::Duration;

use crate::constants::request_headers;

static DEFAULT_HEADERS: Lazy<HeaderMap> = Lazy::new(|| {
    let mut headers = HeaderMap::new();
    headers.insert(USER_AGENT, HeaderValue::from_static(request_headers::USER_AGENT));
    headers.insert(ACCEPT, HeaderValue::from_static(request_headers::ACCEPT));
    headers.insert(
        ACCEPT_LANGUAGE,
        HeaderValue::from_static(request_headers::ACCEPT_LANGUAGE),
    );
    headers.insert(ORIGIN, HeaderValue::from_static(request_headers::ORIGIN));
    headers.insert(REFERER, HeaderValue::from_static(request_headers::REFERER));
    headers
});

/// Creates an HTTP client with the per-request timeout and the browser-like
/// headers the stats service requires.
///
/// # Returns
/// * `Result<Client, reqwest::Error>` - A configured reqwest HTTP client or error
pub fn create_http_client_with_timeout(timeout_seconds: u64) -> Result<Client, reqwest::Error> {
    Client::builder()
        .timeout(Duration::from_secs(timeout_seconds))
        .pool_max_idle_per_host(crate::constants::HTTP_POOL_MAX_IDLE_PER_HOST)
        .default_headers(DEFAULT_HEADERS.clone())
        .build()
}

/// Creates an HTTP client for testing with default timeout
#[cfg(test)]
pub fn create_test_http_client() -> Client {
    create_http_client_with_timeout(crate::constants::DEFAULT_HTTP_TIMEOUT_SECONDS)
        .expect("Failed to create test HTTP client")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_headers_include_referer_and_agent() {
        assert!(DEFAULT_HEADERS.contains_key(USER_AGENT));
        assert_eq!(DEFAULT_HEADERS[REFERER], "https://www.nba.com/");
        assert_eq!(DEFAULT_HEADERS[ORIGIN], "https://www.nba.com");
    }

    #[test]
    fn test_client_builds() {
        assert!(create_http_client_with_timeout(5).is_ok());
    }
}

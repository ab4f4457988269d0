//! Environment-driven client configuration.

/// Backend origin used when `SURAKSHA_API_BASE_URL` is unset.
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8080";

/// Environment variable naming the backend origin.
pub const API_BASE_URL_VAR: &str = "SURAKSHA_API_BASE_URL";

/// Backend origin for the API client. Read from the environment, falling
/// back to the local development default; a trailing slash is trimmed so
/// endpoint paths append cleanly.
pub fn api_base_url() -> String {
    std::env::var(API_BASE_URL_VAR)
        .unwrap_or_else(|_| DEFAULT_API_BASE_URL.to_string())
        .trim_end_matches('/')
        .to_string()
}

//! API utilities for frontend-backend communication
//!
//! Resolves the base URL of the menu API from the client configuration.

use super::config::ClientConfig;

/// Get the base URL for API requests
///
/// An explicit `api_base` from the configuration wins. Otherwise the URL is
/// built from the current window location, using the configured port
/// (3000 by default) for the backend server.
///
/// # Returns
/// - API base URL like "http://localhost:3000", without a trailing slash
/// - "http://localhost:{port}" if window is not available
pub fn api_base(config: &ClientConfig) -> String {
    if has_explicit_base(config) {
        return resolve_api_base(config, None);
    }
    let location = web_sys::window().map(|window| {
        let location = window.location();
        let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
        let hostname = location
            .hostname()
            .unwrap_or_else(|_| "localhost".to_string());
        (protocol, hostname)
    });
    resolve_api_base(config, location)
}

fn has_explicit_base(config: &ClientConfig) -> bool {
    config
        .api_base
        .as_deref()
        .is_some_and(|base| !base.trim().is_empty())
}

/// Pure part of [`api_base`]: `location` is `(protocol, hostname)` of the page
pub fn resolve_api_base(config: &ClientConfig, location: Option<(String, String)>) -> String {
    if let Some(base) = config.api_base.as_deref().map(str::trim) {
        if !base.is_empty() {
            return base.trim_end_matches('/').to_string();
        }
    }
    match location {
        Some((protocol, hostname)) => format!("{}//{}:{}", protocol, hostname, config.api_port),
        None => format!("http://localhost:{}", config.api_port),
    }
}

//! Turns a search term and a [`SearchConfiguration`] into a request URL.
//!
//! Everything here is pure: the same inputs always give the same URL and
//! nothing can fail. A broken configuration produces a URL the API rejects,
//! which surfaces later as an ordinary request error.

use crate::config::SearchConfiguration;

const REDACTED: &str = "[REDACTED]";

/// Ordered `(name, value)` pairs of the search query, values not yet encoded.
pub fn search_params(term: &str, config: &SearchConfiguration) -> Vec<(&'static str, String)> {
    vec![
        ("api_key", config.api_key.clone()),
        ("q", term.to_string()),
        ("limit", config.limit.to_string()),
        ("offset", config.offset.to_string()),
        ("rating", config.rating.to_string()),
        ("lang", config.lang.clone()),
    ]
}

/// Join a base URL and a path with exactly one slash between them.
pub fn join_url(base: &str, path: &str) -> String {
    format!("{}/{}", base.trim_end_matches('/'), path.trim_start_matches('/'))
}

/// `{api_base}/{endpoint}` for the configured search endpoint.
pub fn endpoint_url(config: &SearchConfiguration) -> String {
    join_url(&config.api_base, &config.endpoint)
}

/// Percent-encode the pairs into a query string, preserving their order.
pub fn encode_query(params: &[(&str, String)]) -> String {
    params
        .iter()
        .map(|(name, value)| format!("{name}={}", urlencoding::encode(value)))
        .collect::<Vec<_>>()
        .join("&")
}

/// Full search URL for `term`.
pub fn build_search_url(term: &str, config: &SearchConfiguration) -> String {
    format!(
        "{}?{}",
        endpoint_url(config),
        encode_query(&search_params(term, config))
    )
}

/// Same as [`build_search_url`] but with the API key masked, for logs.
pub fn redacted_search_url(term: &str, config: &SearchConfiguration) -> String {
    let params: Vec<_> = search_params(term, config)
        .into_iter()
        .map(|(name, value)| {
            if name == "api_key" {
                (name, REDACTED.to_string())
            } else {
                (name, value)
            }
        })
        .collect();

    format!("{}?{}", endpoint_url(config), encode_query(&params))
}

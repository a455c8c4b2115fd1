use std::time::Duration;

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use reqwest::blocking::Client;
use reqwest::header::ACCEPT;
use thiserror::Error;
use url::Url;

/// Base endpoint of the Jina Reader content-extraction API
pub const API_BASE_URL: &str = "https://r.jina.ai";

/// Default request timeout in seconds
pub const DEFAULT_TIMEOUT: u64 = 30;

// Escape everything outside the unreserved set (ALPHA / DIGIT / "-" / "_"
// / "." / "~") so the target URL travels as a single opaque path segment.
const TARGET_ENCODE_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

/// Terminal failure classifications for a fetch. None are retried.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("Invalid URL format: {0}")]
    InvalidUrl(String),

    #[error("Request timed out after {seconds} seconds")]
    Timeout { seconds: u64 },

    #[error("HTTP {status} - {body}")]
    Upstream { status: u16, body: String },

    #[error("Network error - {0}")]
    Network(reqwest::Error),

    #[error("{0}")]
    Other(String),
}

/// Check that a candidate string is an absolute http(s) URL with a host.
///
/// Pure predicate: malformed input yields false rather than an error.
pub fn validate_url(candidate: &str) -> bool {
    match Url::parse(candidate) {
        Ok(url) => matches!(url.scheme(), "http" | "https") && url.has_host(),
        Err(_) => false,
    }
}

/// Percent-encode a target URL so it can be appended to the API base as
/// one path segment. No character is treated as safe beyond the
/// unreserved set; `/`, `:`, `?`, `=`, `&` and non-ASCII bytes all escape.
pub fn encode_target(url: &str) -> String {
    utf8_percent_encode(url, TARGET_ENCODE_SET).to_string()
}

/// Fetch extracted content for `url` through the Reader API, returning the
/// raw response body verbatim.
pub fn fetch_content(url: &str, timeout_secs: u64) -> Result<String, FetchError> {
    fetch_via(API_BASE_URL, url, timeout_secs)
}

// The base endpoint is a parameter so tests can stand in for the upstream.
pub(crate) fn fetch_via(base: &str, url: &str, timeout_secs: u64) -> Result<String, FetchError> {
    let api_url = format!("{}/{}", base, encode_target(url));

    // The client lives only for this one request
    let client = Client::builder()
        .timeout(Duration::from_secs(timeout_secs))
        .build()
        .map_err(|e| FetchError::Other(e.to_string()))?;

    let response = client
        .get(&api_url)
        .header(ACCEPT, "application/json")
        .send()
        .map_err(|e| classify(e, timeout_secs))?;

    let status = response.status();
    let body = response.text().map_err(|e| classify(e, timeout_secs))?;

    if !status.is_success() {
        return Err(FetchError::Upstream {
            status: status.as_u16(),
            body,
        });
    }

    Ok(body)
}

fn classify(err: reqwest::Error, timeout_secs: u64) -> FetchError {
    if err.is_timeout() {
        FetchError::Timeout {
            seconds: timeout_secs,
        }
    } else {
        FetchError::Network(err)
    }
}

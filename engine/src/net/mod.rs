// Blocking HTTP fetch for pages and icon bytes.
//
// The pipeline itself never performs I/O; this module is the transport
// collaborator the driver wires in front of it. One GET per call, no
// caching, no conditional requests.

pub mod url;

pub use url::{resolve_url, ParsedUrl};

use std::time::Duration;

use thiserror::Error;
use tracing::debug;

/// Transport knobs. The page fetch and every icon fetch share one config.
#[derive(Debug, Clone)]
pub struct FetchConfig {
    /// Request timeout in seconds
    pub timeout_secs: u64,
    /// Maximum number of redirects to follow
    pub max_redirects: u32,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            timeout_secs: 15,
            max_redirects: 5,
        }
    }
}

/// A fetched resource with the Content-Type the server declared.
#[derive(Debug, Clone)]
pub struct FetchedResource {
    /// Final URL after redirects.
    pub url: String,
    pub data: Vec<u8>,
    pub content_type: String,
}

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("HTTP error: {0}")]
    Status(reqwest::StatusCode),
}

/// GET `url` and return the body with its declared Content-Type.
pub fn fetch(url: &str, config: &FetchConfig) -> Result<FetchedResource, FetchError> {
    let client = reqwest::blocking::Client::builder()
        .timeout(Duration::from_secs(config.timeout_secs))
        .redirect(reqwest::redirect::Policy::limited(
            config.max_redirects as usize,
        ))
        .build()?;

    debug!(url = %url, "fetching");
    let response = client.get(url).send()?;

    if !response.status().is_success() {
        return Err(FetchError::Status(response.status()));
    }

    let content_type = response
        .headers()
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("application/octet-stream")
        .to_string();

    let final_url = response.url().to_string();
    let data = response.bytes()?.to_vec();

    Ok(FetchedResource {
        url: final_url,
        data,
        content_type,
    })
}

/// Reduce a Content-Type header value to its bare media type:
/// parameters are dropped, whitespace trimmed, case folded.
/// `"image/PNG; charset=utf-8"` becomes `"image/png"`.
pub fn media_type(content_type: &str) -> String {
    let ct = content_type.to_lowercase();
    let ct = match ct.find(';') {
        Some(pos) => &ct[..pos],
        None => &ct,
    };
    ct.trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_media_type_strips_parameters() {
        assert_eq!(media_type("text/html; charset=UTF-8"), "text/html");
        assert_eq!(media_type("image/png;charset=utf-8"), "image/png");
        assert_eq!(media_type(" Image/X-Icon "), "image/x-icon");
        assert_eq!(media_type("image/png"), "image/png");
    }

    #[test]
    fn test_media_type_empty_input() {
        assert_eq!(media_type(""), "");
        assert_eq!(media_type(";"), "");
    }
}

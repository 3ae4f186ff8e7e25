//! Input resolution: turn a user-supplied URL or path into raw markup.
//!
//! URLs get one GET with a browser `User-Agent` and a fixed timeout. There is
//! no retry: a published document is either reachable or it is not, and a
//! second attempt would only delay the error. Local paths are read straight
//! from disk, which lets a saved copy of the document be converted offline.

use crate::config::GridConfig;
use crate::error::GlyphGridError;
use std::path::PathBuf;
use std::time::Duration;
use tracing::{debug, info};

/// Check if the input string looks like a URL.
pub fn is_url(input: &str) -> bool {
    input.starts_with("http://") || input.starts_with("https://")
}

/// Resolve the input string to markup text.
///
/// If the input is a URL, download it; otherwise read it as a local file.
pub async fn resolve_markup(input: &str, config: &GridConfig) -> Result<String, GlyphGridError> {
    if is_url(input) {
        fetch_markup(input, config).await
    } else {
        read_local(input).await
    }
}

/// Download `url` and return the response body as text.
pub async fn fetch_markup(url: &str, config: &GridConfig) -> Result<String, GlyphGridError> {
    info!("Downloading document from: {}", url);

    let client = reqwest::Client::builder()
        .timeout(Duration::from_secs(config.timeout_secs))
        .user_agent(config.user_agent.as_str())
        .build()
        .map_err(|e| GlyphGridError::FetchFailed {
            url: url.to_string(),
            reason: e.to_string(),
        })?;

    let response = client
        .get(url)
        .send()
        .await
        .map_err(|e| transport_error(url, config.timeout_secs, e))?;

    if !response.status().is_success() {
        return Err(GlyphGridError::FetchFailed {
            url: url.to_string(),
            reason: format!("HTTP {}", response.status()),
        });
    }

    let body = response
        .text()
        .await
        .map_err(|e| transport_error(url, config.timeout_secs, e))?;

    info!("Downloaded {} bytes", body.len());
    Ok(body)
}

fn transport_error(url: &str, secs: u64, e: reqwest::Error) -> GlyphGridError {
    if e.is_timeout() {
        GlyphGridError::FetchTimeout {
            url: url.to_string(),
            secs,
        }
    } else {
        GlyphGridError::FetchFailed {
            url: url.to_string(),
            reason: e.to_string(),
        }
    }
}

/// Read a local markup file.
async fn read_local(path_str: &str) -> Result<String, GlyphGridError> {
    if path_str.trim().is_empty() {
        return Err(GlyphGridError::InvalidInput {
            input: path_str.to_string(),
        });
    }

    let path = PathBuf::from(path_str);
    if !path.is_file() {
        return Err(GlyphGridError::FileNotFound { path });
    }

    let bytes = tokio::fs::read(&path)
        .await
        .map_err(|source| GlyphGridError::ReadFailed {
            path: path.clone(),
            source,
        })?;

    debug!("Read {} bytes from {}", bytes.len(), path.display());
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

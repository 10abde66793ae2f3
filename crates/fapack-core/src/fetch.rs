//! HTTP GET for a single SVG asset.
//!
//! Uses the curl crate (libcurl): one plain GET per asset, following
//! redirects, with connect and total timeouts. There is no retry; any
//! failure is reported once and the icon lands on the failure list.
//! Runs in the current thread; call from `spawn_blocking` in async code.

use std::time::Duration;
use thiserror::Error;

/// Failure fetching one asset.
///
/// Transport errors and non-2xx statuses are distinct variants, but callers
/// treat them identically: the icon is recorded as failed and never retried.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("{0}")]
    Curl(#[from] curl::Error),
    #[error("HTTP {0}")]
    Http(u32),
}

/// Performs a GET for `url` and returns the response body.
pub fn fetch_svg(url: &str) -> Result<Vec<u8>, FetchError> {
    let mut body: Vec<u8> = Vec::new();

    let mut easy = curl::easy::Easy::new();
    easy.url(url)?;
    easy.follow_location(true)?;
    easy.max_redirections(10)?;
    easy.connect_timeout(Duration::from_secs(15))?;
    easy.timeout(Duration::from_secs(60))?;

    {
        let mut transfer = easy.transfer();
        transfer.write_function(|data| {
            body.extend_from_slice(data);
            Ok(data.len())
        })?;
        transfer.perform()?;
    }

    let code = easy.response_code()?;
    if !(200..300).contains(&code) {
        return Err(FetchError::Http(code));
    }
    Ok(body)
}

//! Blocking HTTP GET for the remote MIME-type registry.
//!
//! Uses the curl crate (libcurl) to fetch the registry body as text.
//! One attempt, no retries; any failure aborts the run before parsing.

use std::str;
use std::time::Duration;
use thiserror::Error;

/// Default upstream registry: the Apache HTTPD `mime.types` file.
pub const DEFAULT_REGISTRY_URL: &str =
    "https://svn.apache.org/repos/asf/httpd/httpd/trunk/docs/conf/mime.types";

/// Failure to obtain the registry text.
#[derive(Debug, Error)]
pub enum FetchError {
    /// Curl reported an error (DNS, timeout, connection reset, bad URL).
    #[error("transfer failed: {0}")]
    Transport(#[from] curl::Error),
    /// Transfer completed with a status other than 200.
    #[error("GET {url} returned HTTP {code}")]
    Http { url: String, code: u32 },
    /// Response body was not valid UTF-8. The registry is plain text, so a
    /// binary body means we fetched the wrong thing.
    #[error("response body is not UTF-8: {0}")]
    Body(#[source] str::Utf8Error),
}

/// Fetches `url` with a single GET and returns the body as text.
///
/// Follows redirects. Runs in the current thread; the whole program is
/// sequential so blocking here is fine.
pub fn fetch(url: &str) -> Result<String, FetchError> {
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

    // Only a plain 200 carries the registry body; a 204 or 203 would
    // parse as an empty or transformed registry.
    let code = easy.response_code()?;
    if code != 200 {
        return Err(FetchError::Http {
            url: url.to_string(),
            code,
        });
    }

    tracing::debug!("fetched {} bytes from {}", body.len(), url);
    let text = str::from_utf8(&body).map_err(FetchError::Body)?;
    Ok(text.to_string())
}

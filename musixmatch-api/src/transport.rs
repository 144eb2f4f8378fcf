//! Blocking GET transport.
//!
//! [`Request`](crate::Request) only needs "fetch this URL as text", so the
//! HTTP client sits behind the [`Transport`] trait. [`HttpTransport`] is the
//! reqwest implementation used by [`MusixmatchClient::new`](crate::MusixmatchClient::new).

use crate::error::{BoxError, Result};
use reqwest::blocking::Client;
use std::time::Duration;

const USER_AGENT: &str = concat!("musixmatch-api/", env!("CARGO_PKG_VERSION"));

/// Something that can perform a blocking HTTP GET.
pub trait Transport {
    /// Fetch `url` and return the response body.
    ///
    /// Non-2xx responses must be reported as errors.
    fn get(&self, url: &str) -> std::result::Result<String, BoxError>;
}

/// [`Transport`] backed by [`reqwest::blocking::Client`].
pub struct HttpTransport {
    http: Client,
}

impl HttpTransport {
    pub fn new(timeout: Duration) -> Result<Self> {
        let http = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(timeout)
            .build()
            .map_err(|e| crate::MusixmatchError::Other(format!("cannot build HTTP client: {e}")))?;
        Ok(Self { http })
    }
}

impl Transport for HttpTransport {
    fn get(&self, url: &str) -> std::result::Result<String, BoxError> {
        let resp = self.http.get(url).send()?.error_for_status()?;
        Ok(resp.text()?)
    }
}

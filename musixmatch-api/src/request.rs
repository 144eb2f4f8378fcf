//! A single API request.
//!
//! A [`Request`] pairs a [`Method`] with a [`QueryString`] and renders the
//! URL `<ws_base>/<method>?<query>`:
//!
//! ```
//! use musixmatch_api::{QueryString, Request};
//!
//! let request = Request::new("artist.chart.get", QueryString::new().with("country", "it").with("page", 1));
//! assert_eq!(
//!     request.url(),
//!     "https://api.musixmatch.com/ws/1.1/artist.chart.get?country=it&page=1"
//! );
//! ```
//!
//! The response is fetched on first demand and kept for the lifetime of the
//! request, so a request performs at most one round trip no matter how many
//! times its response is inspected. The cache is not thread-safe; `Request`
//! is `!Sync`.

use crate::config::Config;
use crate::error::{MusixmatchError, Result};
use crate::message::ResponseMessage;
use crate::method::Method;
use crate::query::{FORMAT, QueryString};
use crate::transport::Transport;
use log::{debug, trace};
use std::cell::OnceCell;
use std::fmt;
use std::hash::{Hash, Hasher};

pub struct Request {
    method: Method,
    query: QueryString,
    ws_base: String,
    response: OnceCell<String>,
    message: OnceCell<ResponseMessage>,
}

impl Request {
    /// Build a request against the default web-service base.
    pub fn new(method: impl Into<Method>, query: impl Into<QueryString>) -> Self {
        Self {
            method: method.into(),
            query: query.into(),
            ws_base: Config::default().ws_base(),
            response: OnceCell::new(),
            message: OnceCell::new(),
        }
    }

    /// Use another web-service base (`<ws_location>/<api_version>`).
    #[must_use]
    pub fn with_ws_base(mut self, ws_base: impl Into<String>) -> Self {
        self.ws_base = ws_base.into().trim_end_matches('/').to_owned();
        self
    }

    /// Merge extra parameters; they override existing ones.
    #[must_use]
    pub fn with_params(mut self, extra: QueryString) -> Self {
        self.query.merge(extra);
        self
    }

    pub fn method(&self) -> &Method {
        &self.method
    }

    pub fn query_string(&self) -> &QueryString {
        &self.query
    }

    pub fn url(&self) -> String {
        format!("{}/{}?{}", self.ws_base, self.method, self.query.encode())
    }

    /// URL with the apikey value masked, for logs and errors.
    pub fn redacted_url(&self) -> String {
        format!("{}/{}?{}", self.ws_base, self.method, self.query.redacted())
    }

    /// Raw response body. Fetched on the first call only.
    pub fn response(&self, transport: &dyn Transport) -> Result<&str> {
        if let Some(body) = self.response.get() {
            trace!("reusing response for {self:?}");
            return Ok(body.as_str());
        }
        debug!("GET {}", self.redacted_url());
        let body = transport
            .get(&self.url())
            .map_err(|source| MusixmatchError::Transport {
                url: self.redacted_url(),
                source,
            })?;
        Ok(self.response.get_or_init(|| body).as_str())
    }

    /// Response parsed with the parser chosen by the `format` parameter.
    ///
    /// An unsupported or missing format fails before any network I/O.
    pub fn message(&self, transport: &dyn Transport) -> Result<&ResponseMessage> {
        if let Some(message) = self.message.get() {
            return Ok(message);
        }
        let format = match self.query.get(FORMAT) {
            Some(f @ ("json" | "xml")) => f,
            Some(other) => return Err(MusixmatchError::UnsupportedFormat(other.to_owned())),
            None => return Err(MusixmatchError::UnsupportedFormat("<missing>".into())),
        };
        let message = ResponseMessage::parse(format, self.response(transport)?)?;
        Ok(self.message.get_or_init(|| message))
    }
}

impl fmt::Display for Request {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.url())
    }
}

impl fmt::Debug for Request {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Request({:?}, {:?})", self.method, self.query)
    }
}

impl PartialEq for Request {
    fn eq(&self, other: &Self) -> bool {
        self.url() == other.url()
    }
}

impl Eq for Request {}

impl Hash for Request {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.url().hash(state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::FakeTransport;

    const OK_BODY: &str = r#"{"message":{"header":{"status_code":200},"body":{}}}"#;

    #[test]
    fn test_url() {
        let request = Request::new(
            Method::new("artist").segment("chart").get(),
            QueryString::new().with("page", 1).with("country", "it"),
        )
        .with_ws_base("http://localhost/ws/1.1/");
        assert_eq!(request.url(), "http://localhost/ws/1.1/artist.chart.get?country=it&page=1");
        assert_eq!(request.to_string(), request.url());
    }

    #[test]
    fn test_with_params_merges() {
        let request = Request::new("track.get", QueryString::new().with("track_id", 1))
            .with_params(QueryString::new().with("format", "json").with("track_id", 2));
        assert_eq!(request.query_string().encode(), "format=json&track_id=2");
    }

    #[test]
    fn test_debug_and_errors_hide_apikey() {
        let request = Request::new("track.get", QueryString::new().with("apikey", "s3cret").with("format", "json"));
        assert!(!format!("{request:?}").contains("s3cret"));
        assert!(!request.redacted_url().contains("s3cret"));

        let transport = FakeTransport::new();
        let err = request.message(&transport).unwrap_err();
        match err {
            MusixmatchError::Transport { url, .. } => assert!(!url.contains("s3cret")),
            other => panic!("expected Transport error, got: {other:?}"),
        }
    }

    #[test]
    fn test_response_is_fetched_once() {
        let transport = FakeTransport::new().route("track.get", OK_BODY);
        let request = Request::new("track.get", QueryString::new().with("format", "json"));

        let first = request.message(&transport).unwrap();
        assert!(first.status_code().unwrap().is_success());
        let second = request.message(&transport).unwrap();
        assert!(std::ptr::eq(first, second));
        request.response(&transport).unwrap();
        assert_eq!(transport.calls(), 1);
    }

    #[test]
    fn test_unsupported_format_skips_network() {
        let transport = FakeTransport::new().route("track.get", OK_BODY);
        for query in [QueryString::new().with("format", "yaml"), QueryString::new()] {
            let request = Request::new("track.get", query);
            assert!(matches!(
                request.message(&transport),
                Err(MusixmatchError::UnsupportedFormat(_))
            ));
        }
        assert_eq!(transport.calls(), 0);
    }

    #[test]
    fn test_parse_failure() {
        let transport = FakeTransport::new().route("track.get", "<html>oops</html>");
        let request = Request::new("track.get", QueryString::new().with("format", "json"));
        assert!(matches!(
            request.message(&transport),
            Err(MusixmatchError::MessageParse { format: "json", .. })
        ));
    }

    #[test]
    fn test_equal_requests_share_url() {
        let a = Request::new("track.get", QueryString::new().with("b", 2).with("a", 1));
        let b = Request::new(Method::new("track").get(), QueryString::new().with("a", 1).with("b", 2));
        assert_eq!(a, b);
    }
}

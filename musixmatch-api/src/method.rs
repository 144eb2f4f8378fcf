//! Dotted API method names.
//!
//! musiXmatch endpoints are named by dotted paths such as `artist.chart.get`
//! or `track.lyrics.feedback.post`. A [`Method`] is an immutable list of
//! those path segments; [`segment`](Method::segment) returns a new, longer
//! method and leaves the parent untouched, so namespace roots from
//! [`ws`](crate::ws) can be shared freely.
//!
//! ```
//! use musixmatch_api::Method;
//!
//! let artist = Method::new("artist");
//! let chart = artist.segment("chart").segment("get");
//! assert_eq!(chart.path(), "artist.chart.get");
//! assert_eq!(artist.path(), "artist");
//! ```

use crate::client::MusixmatchClient;
use crate::error::Result;
use crate::message::ResponseMessage;
use crate::query::{APIKEY, FORMAT, QueryString};
use std::fmt;

/// An API method name built from path segments.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Method {
    segments: Vec<String>,
}

impl Method {
    /// Root method with a single segment.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            segments: vec![name.into()],
        }
    }

    /// Return a new method with `name` appended.
    #[must_use]
    pub fn segment(&self, name: impl Into<String>) -> Self {
        let mut segments = self.segments.clone();
        segments.push(name.into());
        Self { segments }
    }

    /// Shorthand for `.segment("get")`.
    #[must_use]
    pub fn get(&self) -> Self {
        self.segment("get")
    }

    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// The dotted path, e.g. `artist.chart.get`.
    pub fn path(&self) -> String {
        self.segments.join(".")
    }

    /// Call the method and return the parsed response message.
    ///
    /// `apikey` and `format` are taken from `params` when present, otherwise
    /// from the client [`Config`](crate::Config). This performs exactly one
    /// blocking GET.
    pub fn call(&self, client: &MusixmatchClient, mut params: QueryString) -> Result<ResponseMessage> {
        let config = client.config();
        if let Some(apikey) = &config.apikey {
            params.set_default(APIKEY, apikey);
        }
        params.set_default(FORMAT, config.format);
        let request = client.request(self.clone(), params);
        request.message(client.transport()).cloned()
    }
}

impl From<&str> for Method {
    /// Split a dotted path into segments.
    fn from(path: &str) -> Self {
        Self {
            segments: path
                .split('.')
                .filter(|s| !s.is_empty())
                .map(String::from)
                .collect(),
        }
    }
}

impl From<String> for Method {
    fn from(path: String) -> Self {
        Self::from(path.as_str())
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}

impl fmt::Debug for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Method({:?})", self.path())
    }
}

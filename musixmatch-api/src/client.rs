//! Blocking client for the musiXmatch web API.
//!
//! Every call is a plain GET:
//!
//! ```text
//! https://api.musixmatch.com/ws/1.1/<dotted.method>?<sorted query, incl. apikey and format>
//! ```
//!
//! and the server answers with the `message` envelope described in
//! [`message`](crate::message). A non-200 `header.status_code` is mapped to
//! [`MusixmatchError::Api`](crate::MusixmatchError::Api) by the typed
//! lookups; [`MusixmatchClient::call`] returns the raw message and leaves the
//! status to the caller.
//!
//! Typed endpoints live in separate modules (`artist`, `album`, `track`,
//! `lyrics`, `subtitle`) as `impl MusixmatchClient` blocks.

use crate::config::Config;
use crate::error::Result;
use crate::message::ResponseMessage;
use crate::method::Method;
use crate::query::QueryString;
use crate::request::Request;
use crate::transport::{HttpTransport, Transport};

/// Blocking musiXmatch API client.
///
/// Holds the [`Config`] (apikey, default format, web-service location) and a
/// [`Transport`]. Nothing is shared between calls except this read-only
/// configuration.
pub struct MusixmatchClient {
    config: Config,
    transport: Box<dyn Transport>,
}

impl MusixmatchClient {
    /// Create a client that talks HTTP through reqwest.
    pub fn new(config: Config) -> Result<Self> {
        let transport = HttpTransport::new(config.timeout())?;
        Ok(Self::with_transport(config, Box::new(transport)))
    }

    /// Create a client with an explicit [`Transport`] (useful for testing or
    /// when embedding in another HTTP stack).
    pub fn with_transport(config: Config, transport: Box<dyn Transport>) -> Self {
        Self { config, transport }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn transport(&self) -> &dyn Transport {
        self.transport.as_ref()
    }

    /// Build an unsent [`Request`] against the configured web-service base.
    ///
    /// Unlike [`call`](Self::call), no `apikey`/`format` defaults are added.
    pub fn request(&self, method: impl Into<Method>, params: QueryString) -> Request {
        Request::new(method, params).with_ws_base(self.config.ws_base())
    }

    /// Call `method` with `params` and return the parsed message, whatever
    /// its status code.
    pub fn call(&self, method: impl Into<Method>, params: QueryString) -> Result<ResponseMessage> {
        method.into().call(self, params)
    }
}

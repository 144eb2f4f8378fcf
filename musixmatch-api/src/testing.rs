//! In-memory transport for unit tests.

use crate::client::MusixmatchClient;
use crate::config::Config;
use crate::error::BoxError;
use crate::transport::Transport;
use std::cell::RefCell;
use std::rc::Rc;

/// Answers GETs from a fixed table keyed by method path and records every
/// URL it was asked for. Clones share the same call log.
#[derive(Clone, Default)]
pub(crate) struct FakeTransport {
    routes: Vec<(String, String)>,
    log: Rc<RefCell<Vec<String>>>,
}

impl FakeTransport {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn route(mut self, method: &str, body: &str) -> Self {
        self.routes.push((format!("/{method}?"), body.to_owned()));
        self
    }

    pub(crate) fn calls(&self) -> usize {
        self.log.borrow().len()
    }

    pub(crate) fn urls(&self) -> Vec<String> {
        self.log.borrow().clone()
    }

    /// A client with an apikey wired to a clone of this transport.
    pub(crate) fn client(&self) -> MusixmatchClient {
        let config = Config {
            apikey: Some("test-key".into()),
            ..Config::default()
        };
        MusixmatchClient::with_transport(config, Box::new(self.clone()))
    }
}

impl Transport for FakeTransport {
    fn get(&self, url: &str) -> Result<String, BoxError> {
        self.log.borrow_mut().push(url.to_owned());
        self.routes
            .iter()
            .find(|(needle, _)| url.contains(needle.as_str()))
            .map(|(_, body)| body.clone())
            .ok_or_else(|| format!("no route for {url}").into())
    }
}

/// Wrap a body value in the standard envelope with the given status.
pub(crate) fn envelope(status: i64, body: &serde_json::Value) -> String {
    serde_json::json!({
        "message": {
            "header": { "status_code": status, "execute_time": 0.01 },
            "body": body,
        }
    })
    .to_string()
}

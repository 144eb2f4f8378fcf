//! Subtitle (time-synced lyrics) lookup.
//!
//! `GET track.subtitle.get` with `track_id` or `track_mbid`:
//!
//! ```json
//! { "subtitle": { "subtitle_id": 7, "subtitle_body": "[00:12.34] ...", "subtitle_language": "en" } }
//! ```

use crate::client::MusixmatchClient;
use crate::error::Result;
use crate::item::{Item, Record, item_identity};
use crate::method::Method;
use crate::query::QueryString;
use crate::ws;

/// Time-synced lyrics of a track.
#[derive(Debug, Clone)]
pub struct Subtitle {
    record: Record,
}

impl Item for Subtitle {
    const LABEL: &'static str = "subtitle";

    fn method() -> Method {
        ws::track().segment("subtitle").get()
    }

    fn from_record(record: Record) -> Self {
        Self { record }
    }

    fn record(&self) -> &Record {
        &self.record
    }
}

item_identity!(Subtitle);

impl Subtitle {
    pub fn body(&self) -> Option<&str> {
        self.get_str("subtitle_body")
    }

    pub fn language(&self) -> Option<&str> {
        self.get_str("subtitle_language")
    }
}

impl MusixmatchClient {
    /// Get a subtitle by `track_id` or `track_mbid`.
    pub fn subtitle(&self, params: QueryString) -> Result<Subtitle> {
        Subtitle::fetch(self, params)
    }
}

//! Typed records built from response bodies.
//!
//! Single lookups return `body.<label>`:
//!
//! ```json
//! { "message": { "header": { "status_code": 200 },
//!                "body": { "artist": { "artist_id": 292, "artist_name": "Cher" } } } }
//! ```
//!
//! Every item carries an integer `<label>_id` (`artist_id`, `track_id`,
//! `lyrics_id`, ...). It is checked when the item is built, and it is the
//! item's identity: two items with the same id compare and hash equal even if
//! their other fields differ.

use crate::client::MusixmatchClient;
use crate::error::{MusixmatchError, Result};
use crate::message::ResponseMessage;
use crate::method::Method;
use crate::query::QueryString;
use serde_json::{Map, Value};
use std::fmt;

/// Flat field mapping plus the id extracted from it.
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    id: u64,
    fields: Map<String, Value>,
}

impl Record {
    /// Wrap `fields`, requiring an integer (or numeric string) `<label>_id`.
    pub fn new(label: &str, fields: Map<String, Value>) -> Result<Self> {
        let field = format!("{label}_id");
        let Some(id) = fields.get(&field).and_then(id_from_value) else {
            return Err(MusixmatchError::MissingId { field });
        };
        Ok(Self { id, fields })
    }

    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(Value::as_str).filter(|s| !s.is_empty())
    }

    /// Integer field, accepting numeric strings.
    pub fn get_u64(&self, key: &str) -> Option<u64> {
        self.get(key).and_then(id_from_value)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.fields.contains_key(key)
    }

    pub fn fields(&self) -> &Map<String, Value> {
        &self.fields
    }

    pub fn into_fields(self) -> Map<String, Value> {
        self.fields
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let pretty = serde_json::to_string_pretty(&self.fields).map_err(|_| fmt::Error)?;
        f.write_str(&pretty)
    }
}

fn id_from_value(value: &Value) -> Option<u64> {
    match value {
        Value::Number(n) => n.as_u64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

/// A domain record (artist, album, track, lyrics, subtitle).
pub trait Item: Sized {
    /// Key of the record in a response body, and prefix of its id field.
    const LABEL: &'static str;

    /// Method used by [`fetch`](Self::fetch). Defaults to `<label>.get`.
    fn method() -> Method {
        Method::new(Self::LABEL).get()
    }

    fn from_record(record: Record) -> Self;

    fn record(&self) -> &Record;

    fn id(&self) -> u64 {
        self.record().id()
    }

    fn get(&self, key: &str) -> Option<&Value> {
        self.record().get(key)
    }

    fn get_str(&self, key: &str) -> Option<&str> {
        self.record().get_str(key)
    }

    fn from_map(fields: Map<String, Value>) -> Result<Self> {
        Record::new(Self::LABEL, fields).map(Self::from_record)
    }

    fn from_value(value: &Value) -> Result<Self> {
        let fields = value
            .as_object()
            .cloned()
            .ok_or_else(|| MusixmatchError::Lookup(format!("{} object", Self::LABEL)))?;
        Self::from_map(fields)
    }

    /// Build from `body.<label>` of a successful message.
    fn from_message(message: &ResponseMessage) -> Result<Self> {
        message.ensure_success()?;
        let value = message
            .body()?
            .get(Self::LABEL)
            .ok_or_else(|| MusixmatchError::Lookup(format!("body.{}", Self::LABEL)))?;
        Self::from_value(value)
    }

    /// Call [`method`](Self::method) with `params` and build the item.
    fn fetch(client: &MusixmatchClient, params: QueryString) -> Result<Self> {
        let message = Self::method().call(client, params)?;
        Self::from_message(&message)
    }
}

/// Id-based `PartialEq`/`Eq`/`Hash` and record-based `Display` for item types.
macro_rules! item_identity {
    ($($ty:ty),+ $(,)?) => {$(
        impl PartialEq for $ty {
            fn eq(&self, other: &Self) -> bool {
                $crate::item::Item::id(self) == $crate::item::Item::id(other)
            }
        }

        impl Eq for $ty {}

        impl std::hash::Hash for $ty {
            fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
                std::hash::Hash::hash(&$crate::item::Item::id(self), state);
            }
        }

        impl std::fmt::Display for $ty {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                std::fmt::Display::fmt($crate::item::Item::record(self), f)
            }
        }
    )+};
}

pub(crate) use item_identity;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::artist::Artist;
    use crate::testing::{FakeTransport, envelope};
    use serde_json::json;
    use std::collections::HashSet;

    fn map(value: Value) -> Map<String, Value> {
        value.as_object().cloned().unwrap()
    }

    #[test]
    fn test_record_requires_id() {
        let err = Record::new("track", map(json!({ "track_name": "x" }))).unwrap_err();
        assert!(matches!(err, MusixmatchError::MissingId { field } if field == "track_id"));
        let err = Record::new("track", map(json!({ "track_id": "abc" }))).unwrap_err();
        assert!(matches!(err, MusixmatchError::MissingId { .. }));
    }

    #[test]
    fn test_numeric_string_id() {
        let record = Record::new("item", map(json!({ "item_id": "9673" }))).unwrap();
        assert_eq!(record.id(), 9673);
    }

    #[test]
    fn test_identity_by_id() {
        let a = Artist::from_map(map(json!({ "artist_id": 292, "artist_name": "Cher" }))).unwrap();
        let b = Artist::from_map(map(json!({ "artist_id": "292" }))).unwrap();
        let c = Artist::from_map(map(json!({ "artist_id": 293, "artist_name": "Cher" }))).unwrap();
        assert_eq!(a, b);
        assert_ne!(a, c);
        let set: HashSet<_> = [a, b, c].into_iter().collect();
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_display_is_pretty_json() {
        let a = Artist::from_map(map(json!({ "artist_id": 1, "artist_name": "A" }))).unwrap();
        assert_eq!(a.to_string(), "{\n  \"artist_id\": 1,\n  \"artist_name\": \"A\"\n}");
    }

    #[test]
    fn test_from_message_unwraps_label() {
        let body = envelope(200, &json!({ "artist": { "artist_id": 292, "artist_name": "Cher" } }));
        let message = ResponseMessage::parse("json", &body).unwrap();
        let artist = Artist::from_message(&message).unwrap();
        assert_eq!(artist.id(), 292);
        assert_eq!(artist.get_str("artist_name"), Some("Cher"));
    }

    #[test]
    fn test_from_message_non_200_is_api_error() {
        let body = envelope(404, &json!({}));
        let message = ResponseMessage::parse("json", &body).unwrap();
        assert!(matches!(
            Artist::from_message(&message),
            Err(MusixmatchError::Api { code: 404, .. })
        ));
    }

    #[test]
    fn test_from_message_missing_label() {
        let message = ResponseMessage::parse("json", &envelope(200, &json!({}))).unwrap();
        assert!(matches!(
            Artist::from_message(&message),
            Err(MusixmatchError::Lookup(path)) if path == "body.artist"
        ));
    }

    #[test]
    fn test_fetch_uses_default_method() {
        let transport = FakeTransport::new().route(
            "artist.get",
            &envelope(200, &json!({ "artist": { "artist_id": 292 } })),
        );
        let artist = Artist::fetch(&transport.client(), QueryString::new().with("artist_id", 292)).unwrap();
        assert_eq!(artist.id(), 292);
        assert_eq!(transport.calls(), 1);
        assert!(transport.urls()[0].contains("/artist.get?"));
    }
}

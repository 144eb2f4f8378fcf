//! Parsed API response messages.
//!
//! Every musiXmatch response is wrapped in the same envelope:
//!
//! ```json
//! {
//!   "message": {
//!     "header": { "status_code": 200, "execute_time": 0.0123 },
//!     "body": { ... }
//!   }
//! }
//! ```
//!
//! XML responses carry the same structure as elements
//! (`<message><header><status_code>200</status_code>...`). The parser is
//! chosen by the `format` query parameter of the request, never by looking at
//! the body.
//!
//! `header.status_code` is the API status, independent of the HTTP status.
//! Codes and messages:
//!
//! | Code | Meaning                                                    |
//! |------|------------------------------------------------------------|
//! | 200  | The request was successful.                                |
//! | 400  | Bad syntax, or impossible to satisfy.                      |
//! | 401  | Authentication failed, probably a bad API key.             |
//! | 402  | Hourly limit reached or balance insufficient.              |
//! | 403  | Not authorized, or API version shut down.                  |
//! | 404  | Requested resource was not found.                          |
//! | 405  | Requested method was not found.                            |

use crate::error::{MusixmatchError, Result};
use quick_xml::events::Event;
use quick_xml::{Reader, Writer};
use serde::{Deserialize, Serialize};
use serde_json::ser::PrettyFormatter;
use serde_json::{Map, Value};
use std::borrow::Cow;
use std::fmt;

/// API status code carried in `header.status_code`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct StatusCode(i64);

impl StatusCode {
    pub const OK: Self = Self(200);

    pub fn new(code: i64) -> Self {
        Self(code)
    }

    pub fn code(self) -> i64 {
        self.0
    }

    /// `true` iff the code is exactly 200.
    pub fn is_success(self) -> bool {
        self.0 == 200
    }

    /// Human-readable message for the code.
    pub fn message(self) -> Cow<'static, str> {
        let known = match self.0 {
            200 => "The request was successful.",
            400 => "The request had bad syntax or was inherently impossible to be satisfied.",
            401 => "Authentication failed, probably because of a bad API key.",
            402 => {
                "A limit was reached, either you exceeded per hour requests limits or your \
                 balance is insufficient."
            }
            403 => {
                "You are not authorized to perform this operation or the api version you're \
                 trying to use has been shut down."
            }
            404 => "Requested resource was not found.",
            405 => "Requested method was not found.",
            code => return Cow::Owned(format!("Unknown status code {code}!")),
        };
        Cow::Borrowed(known)
    }
}

impl From<i64> for StatusCode {
    fn from(code: i64) -> Self {
        Self(code)
    }
}

impl fmt::Display for StatusCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message())
    }
}

/// Status code from a JSON number or a numeric string.
fn status_from_value(value: &Value) -> Option<StatusCode> {
    match value {
        Value::Number(n) => n.as_i64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
    .map(StatusCode)
}

fn parse_error(format: &'static str, reason: impl ToString) -> MusixmatchError {
    MusixmatchError::MessageParse {
        format,
        reason: reason.to_string(),
    }
}

/// JSON response: the contents of the top-level `message` object.
#[derive(Debug, Clone, PartialEq)]
pub struct JsonMessage {
    message: Map<String, Value>,
}

impl JsonMessage {
    /// Parse a raw body. Fails unless it is a JSON object with a `message`
    /// object inside.
    pub fn parse(body: &str) -> Result<Self> {
        let parsed: Value = serde_json::from_str(body).map_err(|e| parse_error("json", e))?;
        match parsed {
            Value::Object(mut root) => match root.remove("message") {
                Some(Value::Object(message)) => Ok(Self { message }),
                _ => Err(parse_error("json", "missing `message` object")),
            },
            _ => Err(parse_error("json", "expected a JSON object")),
        }
    }

    /// Top-level key of the message, e.g. `header` or `body`.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.message.get(key)
    }

    pub fn header(&self) -> Option<&Map<String, Value>> {
        self.get("header").and_then(Value::as_object)
    }

    pub fn body(&self) -> Option<&Map<String, Value>> {
        self.get("body").and_then(Value::as_object)
    }

    pub fn as_map(&self) -> &Map<String, Value> {
        &self.message
    }

    /// Read `header.status_code`.
    pub fn status_code(&self) -> Result<StatusCode> {
        self.header()
            .and_then(|h| h.get("status_code"))
            .and_then(status_from_value)
            .ok_or_else(|| MusixmatchError::Lookup("header.status_code".into()))
    }

    /// Pretty-printed, key-sorted JSON wrapped again under `"message"`.
    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for JsonMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut root = Map::new();
        root.insert("message".into(), Value::Object(self.message.clone()));

        let mut buf = Vec::new();
        let mut ser = serde_json::Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(b"    "));
        root.serialize(&mut ser).map_err(|_| fmt::Error)?;
        f.write_str(std::str::from_utf8(&buf).map_err(|_| fmt::Error)?)
    }
}

#[derive(Deserialize)]
struct XmlEnvelope {
    header: Option<XmlHeader>,
}

#[derive(Deserialize)]
struct XmlHeader {
    status_code: Option<String>,
}

/// XML response: the re-indented document plus its status code.
///
/// Only the status code is extracted; typed items are built from JSON
/// messages.
#[derive(Debug, Clone, PartialEq)]
pub struct XmlMessage {
    document: String,
    status_code: Option<StatusCode>,
}

impl XmlMessage {
    pub fn parse(body: &str) -> Result<Self> {
        let document = reindent(body)?;
        let envelope: XmlEnvelope =
            quick_xml::de::from_str(body).map_err(|e| parse_error("xml", e))?;
        let status_code = envelope
            .header
            .and_then(|h| h.status_code)
            .and_then(|code| code.trim().parse().ok())
            .map(StatusCode);
        Ok(Self {
            document,
            status_code,
        })
    }

    /// Read the `header/status_code` element.
    pub fn status_code(&self) -> Result<StatusCode> {
        self.status_code
            .ok_or_else(|| MusixmatchError::Lookup("header/status_code".into()))
    }

    pub fn render(&self) -> String {
        self.document.clone()
    }
}

impl fmt::Display for XmlMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.document)
    }
}

/// Re-emit the document with 4-space indentation, dropping whitespace-only
/// text. Also rejects ill-formed input.
fn reindent(body: &str) -> Result<String> {
    let mut reader = Reader::from_str(body);
    reader.config_mut().trim_text(true);
    let mut writer = Writer::new_with_indent(Vec::new(), b' ', 4);
    let mut seen_element = false;
    loop {
        match reader.read_event() {
            Ok(Event::Eof) => break,
            Ok(event) => {
                if matches!(event, Event::Start(_) | Event::Empty(_)) {
                    seen_element = true;
                }
                writer.write_event(event).map_err(|e| parse_error("xml", e))?;
            }
            Err(e) => return Err(parse_error("xml", e)),
        }
    }
    if !seen_element {
        return Err(parse_error("xml", "no root element"));
    }
    String::from_utf8(writer.into_inner()).map_err(|e| parse_error("xml", e))
}

/// A parsed response in one of the supported formats.
#[derive(Debug, Clone, PartialEq)]
pub enum ResponseMessage {
    Json(JsonMessage),
    Xml(XmlMessage),
}

impl ResponseMessage {
    /// Parse `body` with the parser selected by `format` (`json` or `xml`).
    pub fn parse(format: &str, body: &str) -> Result<Self> {
        match format {
            "json" => JsonMessage::parse(body).map(Self::Json),
            "xml" => XmlMessage::parse(body).map(Self::Xml),
            other => Err(MusixmatchError::UnsupportedFormat(other.to_owned())),
        }
    }

    pub fn status_code(&self) -> Result<StatusCode> {
        match self {
            Self::Json(m) => m.status_code(),
            Self::Xml(m) => m.status_code(),
        }
    }

    /// Return the status code, or [`MusixmatchError::Api`] if it is not 200.
    pub fn ensure_success(&self) -> Result<StatusCode> {
        let status = self.status_code()?;
        if status.is_success() {
            Ok(status)
        } else {
            Err(MusixmatchError::Api {
                code: status.code(),
                message: status.message().into_owned(),
            })
        }
    }

    /// The `header` object of a JSON message.
    pub fn header(&self) -> Result<&Map<String, Value>> {
        match self {
            Self::Json(m) => m.header().ok_or_else(|| MusixmatchError::Lookup("header".into())),
            Self::Xml(_) => Err(MusixmatchError::UnsupportedFormat("xml (no structured header)".into())),
        }
    }

    /// The `body` object. Only JSON messages expose a structured body.
    pub fn body(&self) -> Result<&Map<String, Value>> {
        match self {
            Self::Json(m) => m.body().ok_or_else(|| MusixmatchError::Lookup("body".into())),
            Self::Xml(_) => Err(MusixmatchError::UnsupportedFormat(
                "xml (typed items need json)".into(),
            )),
        }
    }

    pub fn as_json(&self) -> Option<&JsonMessage> {
        match self {
            Self::Json(m) => Some(m),
            Self::Xml(_) => None,
        }
    }

    pub fn render(&self) -> String {
        match self {
            Self::Json(m) => m.render(),
            Self::Xml(m) => m.render(),
        }
    }
}

impl fmt::Display for ResponseMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Json(m) => fmt::Display::fmt(m, f),
            Self::Xml(m) => fmt::Display::fmt(m, f),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const OK_BODY: &str = r#"{"message":{"header":{"status_code":200},"body":{}}}"#;

    #[test]
    fn test_status_code_table() {
        let table = [
            (200, "The request was successful."),
            (400, "The request had bad syntax or was inherently impossible to be satisfied."),
            (401, "Authentication failed, probably because of a bad API key."),
            (
                402,
                "A limit was reached, either you exceeded per hour requests limits or your balance is insufficient.",
            ),
            (
                403,
                "You are not authorized to perform this operation or the api version you're trying to use has been shut down.",
            ),
            (404, "Requested resource was not found."),
            (405, "Requested method was not found."),
        ];
        for (code, text) in table {
            assert_eq!(StatusCode::new(code).message(), text);
            assert_eq!(StatusCode::new(code).is_success(), code == 200);
        }
        assert_eq!(StatusCode::new(666).to_string(), "Unknown status code 666!");
        assert!(!StatusCode::new(666).is_success());
    }

    #[test]
    fn test_json_status_ok() {
        let msg = JsonMessage::parse(OK_BODY).unwrap();
        let status = msg.status_code().unwrap();
        assert_eq!(status, StatusCode::OK);
        assert!(status.is_success());
        assert!(msg.body().unwrap().is_empty());
    }

    #[test]
    fn test_json_status_as_string() {
        let msg = JsonMessage::parse(r#"{"message":{"header":{"status_code":"404"}}}"#).unwrap();
        assert_eq!(msg.status_code().unwrap().code(), 404);
    }

    #[test]
    fn test_json_render_is_idempotent() {
        let body = r#"{"message":{"header":{"status_code":200,"execute_time":0.01},"body":{"b":1,"a":[1,2]}}}"#;
        let first = JsonMessage::parse(body).unwrap().render();
        let second = JsonMessage::parse(&first).unwrap().render();
        assert_eq!(first, second);
        assert!(first.starts_with("{\n    \"message\": {"));
        // Keys sorted.
        assert!(first.find("\"body\"").unwrap() < first.find("\"header\"").unwrap());
        assert!(first.find("\"a\"").unwrap() < first.find("\"b\"").unwrap());
    }

    #[test]
    fn test_json_malformed_bodies() {
        for body in ["", "null", "not json at all", "[1, 2]", r#"{"header":{}}"#] {
            let err = JsonMessage::parse(body).unwrap_err();
            assert!(
                matches!(err, MusixmatchError::MessageParse { format: "json", .. }),
                "{body:?} -> {err:?}"
            );
        }
    }

    #[test]
    fn test_json_missing_status_is_lookup_error() {
        let msg = JsonMessage::parse(r#"{"message":{"body":{}}}"#).unwrap();
        assert!(matches!(msg.status_code(), Err(MusixmatchError::Lookup(_))));
    }

    #[test]
    fn test_xml_status() {
        let body = "<?xml version=\"1.0\" encoding=\"utf-8\"?>\
            <message><header><status_code>401</status_code>\
            <execute_time>0.0012</execute_time></header><body/></message>";
        let msg = ResponseMessage::parse("xml", body).unwrap();
        let status = msg.status_code().unwrap();
        assert_eq!(status.code(), 401);
        assert!(!status.is_success());
        assert!(msg.render().contains("    <header>"));
        assert!(matches!(msg.body(), Err(MusixmatchError::UnsupportedFormat(_))));
    }

    #[test]
    fn test_xml_missing_status_is_lookup_error() {
        let msg = XmlMessage::parse("<message><body/></message>").unwrap();
        assert!(matches!(msg.status_code(), Err(MusixmatchError::Lookup(_))));
    }

    #[test]
    fn test_xml_ill_formed() {
        for body in ["", "<message><header></message>"] {
            assert!(matches!(
                XmlMessage::parse(body),
                Err(MusixmatchError::MessageParse { format: "xml", .. })
            ));
        }
    }

    #[test]
    fn test_unsupported_format() {
        let err = ResponseMessage::parse("jsonp", OK_BODY).unwrap_err();
        assert!(matches!(err, MusixmatchError::UnsupportedFormat(f) if f == "jsonp"));
    }

    #[test]
    fn test_ensure_success() {
        let ok = ResponseMessage::parse("json", OK_BODY).unwrap();
        assert_eq!(ok.ensure_success().unwrap(), StatusCode::OK);
        assert!(ok.header().unwrap().contains_key("status_code"));

        let denied =
            ResponseMessage::parse("json", r#"{"message":{"header":{"status_code":401}}}"#).unwrap();
        match denied.ensure_success().unwrap_err() {
            MusixmatchError::Api { code, message } => {
                assert_eq!(code, 401);
                assert_eq!(message, StatusCode::new(401).to_string());
            }
            other => panic!("expected Api error, got: {other:?}"),
        }
    }
}

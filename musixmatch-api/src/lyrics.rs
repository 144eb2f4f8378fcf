//! Lyrics lookup and feedback.
//!
//! ## `lyrics`: `GET track.lyrics.get`
//!
//! Params: `track_id` or `track_mbid`.
//!
//! ```json
//! { "lyrics": { "lyrics_id": 2577, "lyrics_body": "...", "lyrics_language": "en",
//!               "lyrics_copyright": "...", "pixel_tracking_url": "...",
//!               "script_tracking_url": "..." } }
//! ```
//!
//! ## `post_lyrics_feedback`: `GET track.lyrics.feedback.post`
//!
//! Params: `track_id`, `lyrics_id`, `feedback` (see [`LyricsFeedback`]).
//! The body is empty; only the status code matters.

use crate::client::MusixmatchClient;
use crate::error::Result;
use crate::item::{Item, Record, item_identity};
use crate::method::Method;
use crate::query::QueryString;
use crate::track::Track;
use crate::ws;
use std::fmt;

/// Lyrics of a track.
#[derive(Debug, Clone)]
pub struct Lyrics {
    record: Record,
}

impl Item for Lyrics {
    const LABEL: &'static str = "lyrics";

    fn method() -> Method {
        ws::track().segment("lyrics").get()
    }

    fn from_record(record: Record) -> Self {
        Self { record }
    }

    fn record(&self) -> &Record {
        &self.record
    }
}

item_identity!(Lyrics);

impl Lyrics {
    pub fn body(&self) -> Option<&str> {
        self.get_str("lyrics_body")
    }

    pub fn language(&self) -> Option<&str> {
        self.get_str("lyrics_language")
    }

    pub fn copyright(&self) -> Option<&str> {
        self.get_str("lyrics_copyright")
    }

    /// Tracking pixel the API terms require displaying with the lyrics.
    pub fn pixel_tracking_url(&self) -> Option<&str> {
        self.get_str("pixel_tracking_url")
    }

    pub fn script_tracking_url(&self) -> Option<&str> {
        self.get_str("script_tracking_url")
    }
}

/// Problems that can be reported about a lyrics text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LyricsFeedback {
    /// The lyrics are not by the selected artist.
    WrongAttribution,
    /// Strange characters or partially scrambled words.
    BadCharacters,
    /// The text of each verse is too long.
    LinesTooLong,
    /// Verses missing at the beginning or end.
    WrongVerses,
    /// Badly formatted text.
    WrongFormatting,
}

impl LyricsFeedback {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::WrongAttribution => "wrong_attribution",
            Self::BadCharacters => "bad_characters",
            Self::LinesTooLong => "lines_too_long",
            Self::WrongVerses => "wrong_verses",
            Self::WrongFormatting => "wrong_formatting",
        }
    }
}

impl fmt::Display for LyricsFeedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl MusixmatchClient {
    /// Get lyrics by `track_id` or `track_mbid`.
    pub fn lyrics(&self, params: QueryString) -> Result<Lyrics> {
        Lyrics::fetch(self, params)
    }

    /// Report a problem with the lyrics of `track`.
    ///
    /// Resolves the track's lyrics first (at most one extra call, cached in
    /// the track).
    pub fn post_lyrics_feedback(&self, track: &Track, feedback: LyricsFeedback) -> Result<()> {
        let lyrics = track.resolve_lyrics(self)?;
        let params = QueryString::new()
            .with("track_id", track.id())
            .with("lyrics_id", lyrics.id())
            .with("feedback", feedback);
        let method = ws::track().segment("lyrics").segment("feedback").segment("post");
        self.call(method, params)?.ensure_success()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MusixmatchError;
    use crate::testing::{FakeTransport, envelope};
    use serde_json::json;

    #[test]
    fn test_lyrics_method() {
        assert_eq!(Lyrics::method().path(), "track.lyrics.get");
    }

    #[test]
    fn test_lyrics_fields() {
        let transport = FakeTransport::new().route(
            "track.lyrics.get",
            &envelope(
                200,
                &json!({ "lyrics": { "lyrics_id": 2577, "lyrics_body": "Yeah yeah", "lyrics_language": "en" } }),
            ),
        );
        let lyrics = transport.client().lyrics(QueryString::new().with("track_id", 4_559_887)).unwrap();
        assert_eq!(lyrics.id(), 2577);
        assert_eq!(lyrics.body(), Some("Yeah yeah"));
        assert_eq!(lyrics.language(), Some("en"));
        assert_eq!(lyrics.copyright(), None);
    }

    #[test]
    fn test_post_feedback() {
        let transport = FakeTransport::new()
            .route("track.lyrics.get", &envelope(200, &json!({ "lyrics": { "lyrics_id": 77 } })))
            .route("track.lyrics.feedback.post", &envelope(200, &json!({})));
        let client = transport.client();
        let track = Track::from_value(&json!({ "track_id": 5 })).unwrap();

        client.post_lyrics_feedback(&track, LyricsFeedback::WrongVerses).unwrap();
        client.post_lyrics_feedback(&track, LyricsFeedback::BadCharacters).unwrap();

        let urls = transport.urls();
        assert_eq!(urls.len(), 3);
        assert!(urls[1].contains("feedback=wrong_verses&format=json&lyrics_id=77&track_id=5"));
        assert!(urls[2].contains("feedback=bad_characters"));
    }

    #[test]
    fn test_post_feedback_rejected() {
        let transport = FakeTransport::new()
            .route("track.lyrics.get", &envelope(200, &json!({ "lyrics": { "lyrics_id": 77 } })))
            .route("track.lyrics.feedback.post", &envelope(403, &json!({})));
        let client = transport.client();
        let track = Track::from_value(&json!({ "track_id": 5 })).unwrap();
        assert!(matches!(
            client.post_lyrics_feedback(&track, LyricsFeedback::LinesTooLong),
            Err(MusixmatchError::Api { code: 403, .. })
        ));
    }
}

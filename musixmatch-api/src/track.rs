//! Track lookup, search, charts and matching.
//!
//! # Endpoints
//!
//! ## `track`: `GET track.get`
//!
//! Params: `track_id` or `track_mbid`.
//!
//! ```json
//! { "track": { "track_id": 4559887, "track_mbid": "...", "track_name": "...",
//!              "lyrics_id": 2577, "subtitle_id": 0, "instrumental": 0,
//!              "artist_id": 292, "artist_name": "...", "album_coverart_100x100": "..." } }
//! ```
//!
//! ## `track_search`: `GET track.search`
//!
//! Params: `q`, `q_track`, `q_artist`, `q_lyrics`, `f_has_lyrics`,
//! `s_track_rating`, `page`, `page_size`.
//!
//! ## `track_chart`: `GET track.chart.get`
//!
//! Params: `country`, `f_has_lyrics`, `page`, `page_size`.
//!
//! ## `album_tracks`: `GET album.tracks.get`
//!
//! Params: `album_id`, `f_has_lyrics`, `page`, `page_size`.
//!
//! ## `track_match`: `GET matcher.track.get`
//!
//! Params: `q_track`, `q_artist`. Answers with a single `track`.

use crate::client::MusixmatchClient;
use crate::collection::ItemsCollection;
use crate::error::Result;
use crate::item::{Item, Record, item_identity};
use crate::lyrics::Lyrics;
use crate::query::QueryString;
use crate::subtitle::Subtitle;
use crate::ws;
use log::trace;
use std::cell::OnceCell;

/// A musiXmatch track.
///
/// Lyrics and subtitle are looked up lazily by
/// [`resolve_lyrics`](Self::resolve_lyrics) and
/// [`resolve_subtitle`](Self::resolve_subtitle) and cached in the track.
#[derive(Debug, Clone)]
pub struct Track {
    record: Record,
    lyrics: OnceCell<Lyrics>,
    subtitle: OnceCell<Subtitle>,
}

impl Item for Track {
    const LABEL: &'static str = "track";

    fn from_record(record: Record) -> Self {
        Self {
            record,
            lyrics: OnceCell::new(),
            subtitle: OnceCell::new(),
        }
    }

    fn record(&self) -> &Record {
        &self.record
    }
}

item_identity!(Track);

impl Track {
    /// Match a track by title and artist (`matcher.track.get`).
    pub fn from_matcher(client: &MusixmatchClient, params: QueryString) -> Result<Self> {
        let message = ws::matcher().segment("track").get().call(client, params)?;
        Self::from_message(&message)
    }

    pub fn name(&self) -> Option<&str> {
        self.get_str("track_name")
    }

    pub fn mbid(&self) -> Option<&str> {
        self.get_str("track_mbid")
    }

    pub fn artist_id(&self) -> Option<u64> {
        self.record.get_u64("artist_id")
    }

    pub fn artist_name(&self) -> Option<&str> {
        self.get_str("artist_name")
    }

    pub fn artist_mbid(&self) -> Option<&str> {
        self.get_str("artist_mbid")
    }

    pub fn coverart(&self) -> Option<&str> {
        self.get_str("album_coverart_100x100")
    }

    pub fn lyrics_id(&self) -> Option<u64> {
        self.record.get_u64("lyrics_id").filter(|&id| id != 0)
    }

    pub fn subtitle_id(&self) -> Option<u64> {
        self.record.get_u64("subtitle_id").filter(|&id| id != 0)
    }

    pub fn is_instrumental(&self) -> bool {
        self.record.get_u64("instrumental").is_some_and(|flag| flag != 0)
    }

    /// Lyrics of this track.
    ///
    /// Uses an embedded `lyrics` object when the track mapping has one,
    /// otherwise calls `track.lyrics.get` with this `track_id`. Either way
    /// the result is cached: only the first successful call does any work.
    pub fn resolve_lyrics(&self, client: &MusixmatchClient) -> Result<&Lyrics> {
        if let Some(lyrics) = self.lyrics.get() {
            trace!("track {}: cached lyrics", self.id());
            return Ok(lyrics);
        }
        let lyrics = match self.get(Lyrics::LABEL) {
            Some(embedded) => Lyrics::from_value(embedded)?,
            None => Lyrics::fetch(client, self.id_query())?,
        };
        Ok(self.lyrics.get_or_init(|| lyrics))
    }

    /// Subtitle of this track, resolved and cached like
    /// [`resolve_lyrics`](Self::resolve_lyrics).
    pub fn resolve_subtitle(&self, client: &MusixmatchClient) -> Result<&Subtitle> {
        if let Some(subtitle) = self.subtitle.get() {
            trace!("track {}: cached subtitle", self.id());
            return Ok(subtitle);
        }
        let subtitle = match self.get(Subtitle::LABEL) {
            Some(embedded) => Subtitle::from_value(embedded)?,
            None => Subtitle::fetch(client, self.id_query())?,
        };
        Ok(self.subtitle.get_or_init(|| subtitle))
    }

    fn id_query(&self) -> QueryString {
        QueryString::new().with("track_id", self.id())
    }
}

pub type TracksCollection = ItemsCollection<Track>;

impl MusixmatchClient {
    /// Get one track by `track_id` or `track_mbid`.
    pub fn track(&self, params: QueryString) -> Result<Track> {
        Track::fetch(self, params)
    }

    /// Search tracks.
    pub fn track_search(&self, params: QueryString) -> Result<TracksCollection> {
        TracksCollection::fetch(self, ws::track().segment("search"), params)
    }

    /// Top tracks of a country.
    pub fn track_chart(&self, params: QueryString) -> Result<TracksCollection> {
        TracksCollection::fetch(self, ws::track().segment("chart").get(), params)
    }

    /// Tracks of an album.
    pub fn album_tracks(&self, params: QueryString) -> Result<TracksCollection> {
        TracksCollection::fetch(self, ws::album().segment("tracks").get(), params)
    }

    /// Best matching track for `q_track` / `q_artist`.
    pub fn track_match(&self, params: QueryString) -> Result<Track> {
        Track::from_matcher(self, params)
    }
}

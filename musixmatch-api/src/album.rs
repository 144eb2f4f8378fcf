//! Album lookup and artist discography.
//!
//! # Endpoints
//!
//! ## `album`: `GET album.get`
//!
//! Params: `album_id`.
//!
//! ```json
//! { "album": { "album_id": 14250417, "album_name": "...", "album_release_date": "2012-04-01",
//!              "album_release_type": "Single", "artist_id": 292, "artist_name": "..." } }
//! ```
//!
//! ## `artist_albums`: `GET artist.albums.get`
//!
//! Params: `artist_id`, `g_album_name` (group by name), `s_release_date`
//! (`asc`/`desc`), `page`, `page_size`. Answers with `album_list`.

use crate::client::MusixmatchClient;
use crate::collection::ItemsCollection;
use crate::error::Result;
use crate::item::{Item, Record, item_identity};
use crate::query::QueryString;
use crate::ws;

/// A musiXmatch album.
#[derive(Debug, Clone)]
pub struct Album {
    record: Record,
}

impl Item for Album {
    const LABEL: &'static str = "album";

    fn from_record(record: Record) -> Self {
        Self { record }
    }

    fn record(&self) -> &Record {
        &self.record
    }
}

item_identity!(Album);

impl Album {
    pub fn name(&self) -> Option<&str> {
        self.get_str("album_name")
    }

    pub fn release_date(&self) -> Option<&str> {
        self.get_str("album_release_date")
    }

    /// `Album`, `Single`, `Compilation`, ...
    pub fn release_type(&self) -> Option<&str> {
        self.get_str("album_release_type")
    }

    pub fn artist_id(&self) -> Option<u64> {
        self.record.get_u64("artist_id")
    }

    pub fn artist_name(&self) -> Option<&str> {
        self.get_str("artist_name")
    }

    pub fn coverart(&self) -> Option<&str> {
        self.get_str("album_coverart_100x100")
    }
}

pub type AlbumsCollection = ItemsCollection<Album>;

impl MusixmatchClient {
    /// Get one album by `album_id`.
    pub fn album(&self, params: QueryString) -> Result<Album> {
        Album::fetch(self, params)
    }

    /// Albums of an artist.
    pub fn artist_albums(&self, params: QueryString) -> Result<AlbumsCollection> {
        AlbumsCollection::fetch(self, ws::artist().segment("albums").get(), params)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{FakeTransport, envelope};
    use serde_json::json;

    #[test]
    fn test_album_fields() {
        let transport = FakeTransport::new().route(
            "album.get",
            &envelope(
                200,
                &json!({ "album": {
                    "album_id": "14250417",
                    "album_name": "Wrecking Ball",
                    "album_release_date": "2012-03-06",
                    "album_release_type": "Album",
                    "artist_id": "1007",
                    "artist_name": "Bruce Springsteen",
                    "album_coverart_100x100": ""
                } }),
            ),
        );
        let album = transport.client().album(QueryString::new().with("album_id", 14_250_417)).unwrap();
        assert_eq!(album.id(), 14_250_417);
        assert_eq!(album.name(), Some("Wrecking Ball"));
        assert_eq!(album.release_type(), Some("Album"));
        assert_eq!(album.artist_id(), Some(1007));
        assert_eq!(album.coverart(), None);
    }

    #[test]
    fn test_artist_albums_dedups_grouped_results() {
        let transport = FakeTransport::new().route(
            "artist.albums.get",
            &envelope(
                200,
                &json!({ "album_list": [
                    { "album": { "album_id": 10 } },
                    { "album": { "album_id": 11 } },
                    { "album": { "album_id": 10 } }
                ] }),
            ),
        );
        let albums = transport
            .client()
            .artist_albums(QueryString::new().with("artist_id", 1007).with("s_release_date", "desc"))
            .unwrap();
        assert_eq!(albums.len(), 2);
    }
}

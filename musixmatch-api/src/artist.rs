//! Artist lookup, search and charts.
//!
//! # Endpoints
//!
//! ## `artist`: `GET artist.get`
//!
//! Params: `artist_id` or `artist_mbid`.
//!
//! Response body:
//! ```json
//! { "artist": { "artist_id": 292, "artist_mbid": "...", "artist_name": "Cher" } }
//! ```
//!
//! ## `artist_search`: `GET artist.search`
//!
//! Params: `q`, `q_artist`, `f_artist_id`, `f_artist_mbid`, `page`,
//! `page_size`.
//!
//! ## `artist_chart`: `GET artist.chart.get`
//!
//! Params: `country`, `page`, `page_size`.
//!
//! Both list endpoints answer with `{ "artist_list": [ { "artist": {...} } ] }`.

use crate::client::MusixmatchClient;
use crate::collection::ItemsCollection;
use crate::error::Result;
use crate::item::{Item, Record, item_identity};
use crate::query::QueryString;
use crate::ws;

/// A musiXmatch artist.
///
/// Fields: `artist_id`, `artist_mbid` (MusicBrainz id), `artist_name`,
/// `artist_country`, `artist_rating`.
#[derive(Debug, Clone)]
pub struct Artist {
    record: Record,
}

impl Item for Artist {
    const LABEL: &'static str = "artist";

    fn from_record(record: Record) -> Self {
        Self { record }
    }

    fn record(&self) -> &Record {
        &self.record
    }
}

item_identity!(Artist);

impl Artist {
    pub fn name(&self) -> Option<&str> {
        self.get_str("artist_name")
    }

    /// MusicBrainz artist id.
    pub fn mbid(&self) -> Option<&str> {
        self.get_str("artist_mbid")
    }

    pub fn country(&self) -> Option<&str> {
        self.get_str("artist_country")
    }
}

pub type ArtistsCollection = ItemsCollection<Artist>;

impl MusixmatchClient {
    /// Get one artist by `artist_id` or `artist_mbid`.
    pub fn artist(&self, params: QueryString) -> Result<Artist> {
        Artist::fetch(self, params)
    }

    /// Search artists.
    pub fn artist_search(&self, params: QueryString) -> Result<ArtistsCollection> {
        ArtistsCollection::fetch(self, ws::artist().segment("search"), params)
    }

    /// Top artists of a country.
    pub fn artist_chart(&self, params: QueryString) -> Result<ArtistsCollection> {
        ArtistsCollection::fetch(self, ws::artist().segment("chart").get(), params)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{FakeTransport, envelope};
    use serde_json::json;

    #[test]
    fn test_artist_lookup() {
        let transport = FakeTransport::new().route(
            "artist.get",
            &envelope(
                200,
                &json!({ "artist": {
                    "artist_id": 378_462,
                    "artist_mbid": "650e7db6-b795-4eb5-a702-5ea2fc46c848",
                    "artist_name": "Lady Gaga"
                } }),
            ),
        );
        let artist = transport
            .client()
            .artist(QueryString::new().with("artist_mbid", "650e7db6-b795-4eb5-a702-5ea2fc46c848"))
            .unwrap();
        assert_eq!(artist.id(), 378_462);
        assert_eq!(artist.name(), Some("Lady Gaga"));
        assert_eq!(artist.mbid(), Some("650e7db6-b795-4eb5-a702-5ea2fc46c848"));
        assert_eq!(artist.country(), None);
    }

    #[test]
    fn test_artist_chart() {
        let transport = FakeTransport::new().route(
            "artist.chart.get",
            &envelope(
                200,
                &json!({ "artist_list": [
                    { "artist": { "artist_id": 1, "artist_name": "A" } },
                    { "artist": { "artist_id": 2, "artist_name": "B" } }
                ] }),
            ),
        );
        let chart = transport
            .client()
            .artist_chart(QueryString::new().with("country", "it").with("page", 1).with("page_size", 2))
            .unwrap();
        assert_eq!(chart.len(), 2);
        assert!(transport.urls()[0].contains("/artist.chart.get?apikey=test-key&country=it&format=json&page=1&page_size=2"));
    }

    #[test]
    fn test_artist_search_method() {
        let transport = FakeTransport::new().route("artist.search", &envelope(200, &json!({ "artist_list": [] })));
        let found = transport.client().artist_search(QueryString::new().with("q_artist", "madonna")).unwrap();
        assert!(found.is_empty());
    }
}

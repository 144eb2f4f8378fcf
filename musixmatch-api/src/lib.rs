//! musiXmatch web API client library.
//!
//! Builds and sends method calls to the musiXmatch lyrics/metadata web
//! service, parses the `message` envelope it answers with, and turns response
//! bodies into typed, id-keyed records and deduplicated collections.
//!
//! # Configuration
//!
//! Every call needs an API key. It is read from [`Config`], which layers
//! `~/.config/musixmatch/config.json` and `MUSIXMATCH_*` environment
//! variables:
//!
//! ```no_run
//! use musixmatch_api::{Config, MusixmatchClient, QueryString};
//!
//! let client = MusixmatchClient::new(Config::load().unwrap()).unwrap();
//! let track = client
//!     .track_match(QueryString::new().with("q_artist", "beatles").with("q_track", "yesterday"))
//!     .unwrap();
//! let lyrics = track.resolve_lyrics(&client).unwrap();
//! println!("{}", lyrics.body().unwrap_or_default());
//! ```
//!
//! # Raw calls
//!
//! Any method can be called by its dotted name; the result is the parsed
//! message, whatever its status:
//!
//! ```
//! use musixmatch_api::{Method, QueryString, Request};
//!
//! let request = Request::new(
//!     Method::new("artist").segment("chart").get(),
//!     QueryString::new().with("apikey", "KEY").with("country", "it"),
//! );
//! assert_eq!(
//!     request.url(),
//!     "https://api.musixmatch.com/ws/1.1/artist.chart.get?apikey=KEY&country=it",
//! );
//! ```
//!
//! # API endpoint mapping
//!
//! | Method                                    | API method                   | Returns             |
//! |-------------------------------------------|------------------------------|---------------------|
//! | [`MusixmatchClient::artist`]              | `artist.get`                 | [`Artist`]          |
//! | [`MusixmatchClient::artist_search`]       | `artist.search`              | [`ArtistsCollection`] |
//! | [`MusixmatchClient::artist_chart`]        | `artist.chart.get`           | [`ArtistsCollection`] |
//! | [`MusixmatchClient::album`]               | `album.get`                  | [`Album`]           |
//! | [`MusixmatchClient::artist_albums`]       | `artist.albums.get`          | [`AlbumsCollection`] |
//! | [`MusixmatchClient::track`]               | `track.get`                  | [`Track`]           |
//! | [`MusixmatchClient::track_search`]        | `track.search`               | [`TracksCollection`] |
//! | [`MusixmatchClient::track_chart`]         | `track.chart.get`            | [`TracksCollection`] |
//! | [`MusixmatchClient::album_tracks`]        | `album.tracks.get`           | [`TracksCollection`] |
//! | [`MusixmatchClient::track_match`]         | `matcher.track.get`          | [`Track`]           |
//! | [`MusixmatchClient::lyrics`]              | `track.lyrics.get`           | [`Lyrics`]          |
//! | [`MusixmatchClient::subtitle`]            | `track.subtitle.get`         | [`Subtitle`]        |
//! | [`MusixmatchClient::post_lyrics_feedback`]| `track.lyrics.feedback.post` | `()`                |
//! | [`MusixmatchClient::call`]                | any                          | [`ResponseMessage`] |

mod album;
mod artist;
pub mod client;
pub mod collection;
pub mod config;
pub mod error;
pub mod item;
mod lyrics;
pub mod message;
pub mod method;
pub mod query;
pub mod request;
mod subtitle;
#[cfg(test)]
mod testing;
mod track;
pub mod transport;
pub mod ws;

pub use album::{Album, AlbumsCollection};
pub use artist::{Artist, ArtistsCollection};
pub use client::MusixmatchClient;
pub use collection::{ItemsCollection, Pager};
pub use config::{Config, Format};
pub use error::{BoxError, MusixmatchError, Result};
pub use item::{Item, Record};
pub use lyrics::{Lyrics, LyricsFeedback};
pub use message::{JsonMessage, ResponseMessage, StatusCode, XmlMessage};
pub use method::Method;
pub use query::QueryString;
pub use request::Request;
pub use subtitle::Subtitle;
pub use track::{Track, TracksCollection};
pub use transport::{HttpTransport, Transport};

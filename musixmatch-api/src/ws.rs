//! Raw web-service namespaces.
//!
//! Entry points for building any API method by hand:
//!
//! ```no_run
//! use musixmatch_api::{Config, MusixmatchClient, QueryString, ws};
//!
//! let client = MusixmatchClient::new(Config::from_env()).unwrap();
//! let chart = ws::track()
//!     .segment("chart")
//!     .get()
//!     .call(&client, QueryString::new().with("country", "it").with("f_has_lyrics", 1))
//!     .unwrap();
//! println!("{chart}");
//! ```

use crate::method::Method;

pub fn artist() -> Method {
    Method::new("artist")
}

pub fn album() -> Method {
    Method::new("album")
}

pub fn track() -> Method {
    Method::new("track")
}

pub fn tracking() -> Method {
    Method::new("tracking")
}

pub fn matcher() -> Method {
    Method::new("matcher")
}

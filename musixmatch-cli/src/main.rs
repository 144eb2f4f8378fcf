use anyhow::{Context, Result, bail};
use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use log::debug;
use musixmatch_api::{
    Album, Artist, Config, Format, Item, ItemsCollection, Lyrics, MusixmatchClient, QueryString,
    Track,
};

#[derive(Parser)]
#[command(name = "musixmatch", version, about = "musiXmatch lyrics & metadata CLI")]
struct Cli {
    /// API key (overrides config file and `MUSIXMATCH_APIKEY`)
    #[arg(long, global = true)]
    apikey: Option<String>,
    /// Response format
    #[arg(long, global = true)]
    format: Option<FormatArg>,
    /// Split list output into pages of this size
    #[arg(long, global = true, value_name = "N")]
    page_size: Option<usize>,
    /// More logging (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Save `--apikey`/`--format`/`--location` to the config file
    Configure {
        /// Web-service location, e.g. `https://api.musixmatch.com/ws`
        #[arg(long)]
        location: Option<String>,
        /// Show the current configuration
        #[arg(long, conflicts_with = "clear")]
        check: bool,
        /// Delete the config file
        #[arg(long)]
        clear: bool,
    },
    /// Call any API method and print the response message
    Call {
        /// Dotted method name, e.g. `track.chart.get`
        method: String,
        /// Parameters as `key=value`
        params: Vec<String>,
    },
    /// Show an artist
    Artist {
        /// Artist ID
        artist_id: u64,
    },
    /// Search artists by name
    ArtistSearch {
        /// Artist name
        query: String,
        /// Max results
        #[arg(short, long, default_value = "10")]
        limit: u32,
    },
    /// Top artists of a country
    ArtistChart {
        /// Two-letter country code
        #[arg(short, long, default_value = "us")]
        country: String,
        /// Max results
        #[arg(short, long, default_value = "10")]
        limit: u32,
    },
    /// Show an album
    Album {
        /// Album ID
        album_id: u64,
    },
    /// List the albums of an artist
    Albums {
        /// Artist ID
        artist_id: u64,
        /// Max results
        #[arg(short, long, default_value = "20")]
        limit: u32,
    },
    /// Show a track
    Track {
        /// Track ID
        track_id: u64,
    },
    /// Search tracks
    TrackSearch {
        /// Track title
        query: String,
        /// Restrict to an artist
        #[arg(short, long)]
        artist: Option<String>,
        /// Only tracks with lyrics
        #[arg(long)]
        has_lyrics: bool,
        /// Max results
        #[arg(short, long, default_value = "10")]
        limit: u32,
    },
    /// Top tracks of a country
    TrackChart {
        /// Two-letter country code
        #[arg(short, long, default_value = "us")]
        country: String,
        /// Max results
        #[arg(short, long, default_value = "10")]
        limit: u32,
    },
    /// List the tracks of an album
    AlbumTracks {
        /// Album ID
        album_id: u64,
    },
    /// Find the best matching track
    Match {
        /// Track title
        track: String,
        /// Artist name
        artist: String,
        /// Also print its lyrics
        #[arg(long)]
        lyrics: bool,
    },
    /// Print the lyrics of a track
    Lyrics {
        /// Track ID
        track_id: u64,
    },
    /// Print the time-synced subtitle of a track
    Subtitle {
        /// Track ID
        track_id: u64,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum FormatArg {
    Json,
    Xml,
}

impl From<FormatArg> for Format {
    fn from(f: FormatArg) -> Self {
        match f {
            FormatArg::Json => Self::Json,
            FormatArg::Xml => Self::Xml,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logger(cli.verbose);

    let mut config = Config::load().context("failed to load configuration")?;
    if let Some(apikey) = &cli.apikey {
        config.apikey = Some(apikey.clone());
    }
    if let Some(format) = cli.format {
        config.format = format.into();
    }
    debug!("using {}", config.ws_base());

    let client = || MusixmatchClient::new(config.clone()).context("failed to create API client");
    let page_size = cli.page_size;
    match cli.command {
        Command::Configure {
            location,
            check,
            clear,
        } => cmd_configure(cli.apikey, cli.format, location, check, clear),
        Command::Call { method, params } => cmd_call(&client()?, &method, &params),
        Command::Artist { artist_id } => cmd_artist(&client()?, artist_id),
        Command::ArtistSearch { query, limit } => {
            let params = QueryString::new().with("q_artist", query).with("page_size", limit);
            print_list(&client()?.artist_search(params)?, page_size, print_artist_line);
            Ok(())
        }
        Command::ArtistChart { country, limit } => {
            let params = QueryString::new().with("country", country).with("page_size", limit);
            print_list(&client()?.artist_chart(params)?, page_size, print_artist_line);
            Ok(())
        }
        Command::Album { album_id } => cmd_album(&client()?, album_id),
        Command::Albums { artist_id, limit } => {
            let params = QueryString::new()
                .with("artist_id", artist_id)
                .with("g_album_name", 1)
                .with("s_release_date", "desc")
                .with("page_size", limit);
            print_list(&client()?.artist_albums(params)?, page_size, print_album_line);
            Ok(())
        }
        Command::Track { track_id } => cmd_track(&client()?, track_id),
        Command::TrackSearch {
            query,
            artist,
            has_lyrics,
            limit,
        } => {
            let mut params = QueryString::new().with("q_track", query).with("page_size", limit);
            if let Some(artist) = artist {
                params.insert("q_artist", artist);
            }
            if has_lyrics {
                params.insert("f_has_lyrics", 1);
            }
            print_list(&client()?.track_search(params)?, page_size, print_track_line);
            Ok(())
        }
        Command::TrackChart { country, limit } => {
            let params = QueryString::new().with("country", country).with("page_size", limit);
            print_list(&client()?.track_chart(params)?, page_size, print_track_line);
            Ok(())
        }
        Command::AlbumTracks { album_id } => {
            let params = QueryString::new().with("album_id", album_id);
            print_list(&client()?.album_tracks(params)?, page_size, print_track_line);
            Ok(())
        }
        Command::Match {
            track,
            artist,
            lyrics,
        } => cmd_match(&client()?, track, artist, lyrics),
        Command::Lyrics { track_id } => cmd_lyrics(&client()?, track_id),
        Command::Subtitle { track_id } => cmd_subtitle(&client()?, track_id),
    }
}

fn init_logger(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(
        env_logger::Env::default().filter_or(env_logger::DEFAULT_FILTER_ENV, level),
    )
    .format_target(false)
    .init();
}

// ── artist / album / track ──

fn cmd_artist(client: &MusixmatchClient, artist_id: u64) -> Result<()> {
    let a = client.artist(QueryString::new().with("artist_id", artist_id))?;
    println!("Artist:  {} (id={})", a.name().unwrap_or("?"), a.id());
    if let Some(mbid) = a.mbid() {
        println!("MBID:    {mbid}");
    }
    if let Some(country) = a.country() {
        println!("Country: {country}");
    }
    Ok(())
}

fn cmd_album(client: &MusixmatchClient, album_id: u64) -> Result<()> {
    let a = client.album(QueryString::new().with("album_id", album_id))?;
    println!("Album:    {} (id={})", a.name().unwrap_or("?"), a.id());
    if let Some(artist) = a.artist_name() {
        println!("Artist:   {artist}");
    }
    if let Some(date) = a.release_date() {
        println!("Released: {date}");
    }
    if let Some(kind) = a.release_type() {
        println!("Type:     {kind}");
    }
    Ok(())
}

fn cmd_track(client: &MusixmatchClient, track_id: u64) -> Result<()> {
    let track = client.track(QueryString::new().with("track_id", track_id))?;
    print_track(&track);
    Ok(())
}

fn cmd_match(client: &MusixmatchClient, track: String, artist: String, lyrics: bool) -> Result<()> {
    let params = QueryString::new().with("q_track", track).with("q_artist", artist);
    let track = client.track_match(params)?;
    print_track(&track);
    if lyrics {
        println!();
        print_lyrics(track.resolve_lyrics(client)?);
    }
    Ok(())
}

// ── lyrics / subtitle ──

fn cmd_lyrics(client: &MusixmatchClient, track_id: u64) -> Result<()> {
    let lyrics = client.lyrics(QueryString::new().with("track_id", track_id))?;
    print_lyrics(&lyrics);
    Ok(())
}

fn cmd_subtitle(client: &MusixmatchClient, track_id: u64) -> Result<()> {
    let subtitle = client.subtitle(QueryString::new().with("track_id", track_id))?;
    match subtitle.body() {
        Some(body) => println!("{body}"),
        None => println!("No subtitle available."),
    }
    Ok(())
}

// ── configure / call ──

fn cmd_configure(
    apikey: Option<String>,
    format: Option<FormatArg>,
    location: Option<String>,
    check: bool,
    clear: bool,
) -> Result<()> {
    if clear {
        Config::clear()?;
        println!("Configuration cleared.");
        return Ok(());
    }

    let mut config = Config::load_file()?;
    if check {
        println!("File:     {}", Config::path()?.display());
        println!("API key:  {}", if config.has_apikey() { "set" } else { "not set" });
        println!("Format:   {}", config.format);
        println!("Endpoint: {}", config.ws_base());
        return Ok(());
    }

    if apikey.is_none() && format.is_none() && location.is_none() {
        bail!("nothing to save; pass --apikey, --format or --location");
    }
    if apikey.is_some() {
        config.apikey = apikey;
    }
    if let Some(format) = format {
        config.format = format.into();
    }
    if let Some(location) = location {
        config.ws_location = location;
    }
    config.save()?;
    println!("Configuration saved to {}.", Config::path()?.display());
    Ok(())
}

fn cmd_call(client: &MusixmatchClient, method: &str, params: &[String]) -> Result<()> {
    let mut query = QueryString::new();
    for param in params {
        let (key, value) = param
            .split_once('=')
            .with_context(|| format!("expected key=value, got `{param}`"))?;
        query.insert(key, value);
    }
    let message = client.call(method, query)?;
    println!("{message}");
    Ok(())
}

// ── output ──

fn print_list<T: Item + Clone>(
    list: &ItemsCollection<T>,
    page_size: Option<usize>,
    print: fn(&T),
) {
    if list.is_empty() {
        println!("No results.");
        return;
    }
    match page_size {
        Some(size) if size > 0 => {
            let pages = list.pages(size);
            for (i, page) in list.pager(size).enumerate() {
                println!("-- page {}/{pages} --", i + 1);
                page.iter().for_each(print);
            }
        }
        _ => list.iter().for_each(print),
    }
}

fn print_artist_line(a: &Artist) {
    println!("  [{}] {}", a.id(), a.name().unwrap_or("?"));
}

fn print_album_line(a: &Album) {
    println!(
        "  [{}] {} ({})",
        a.id(),
        a.name().unwrap_or("?"),
        a.release_date().unwrap_or("unknown date"),
    );
}

fn print_track_line(t: &Track) {
    println!(
        "  [{}] {} - {}",
        t.id(),
        t.artist_name().unwrap_or("?"),
        t.name().unwrap_or("?"),
    );
}

fn print_track(t: &Track) {
    println!("Track:    {} (id={})", t.name().unwrap_or("?"), t.id());
    if let Some(artist) = t.artist_name() {
        println!("Artist:   {artist}");
    }
    println!("Lyrics:   {}", if t.lyrics_id().is_some() { "yes" } else { "no" });
    println!("Subtitle: {}", if t.subtitle_id().is_some() { "yes" } else { "no" });
    if t.is_instrumental() {
        println!("Instrumental");
    }
}

fn print_lyrics(lyrics: &Lyrics) {
    match lyrics.body() {
        Some(body) => println!("{body}"),
        None => println!("No lyrics available."),
    }
    if let Some(copyright) = lyrics.copyright() {
        println!("\n{copyright}");
    }
}

//! Data types for Grooveshark API responses.
//!
//! The service returns JSON objects with PascalCase fields (`SongID`,
//! `ArtistName`, ...); field names here follow Rust conventions instead.
//! Parsing is deliberately lenient: the service is known to return numeric
//! ids both as JSON numbers and as numeric strings, and to omit fields, so
//! every record parses with missing pieces defaulting to `0` / `""` / `None`.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A song record.
///
/// Returned by the lookup, library, favorites, playlist, popularity, and
/// search methods. A record with `song_id == 0` lacked a `SongID` field on
/// the wire; keyed lookups drop such records.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Song {
    /// Grooveshark song ID.
    pub song_id: u64,
    /// Song title.
    pub song_name: String,
    /// Primary artist ID.
    pub artist_id: u64,
    /// Primary artist name.
    pub artist_name: String,
    /// Album ID.
    pub album_id: u64,
    /// Album title.
    pub album_name: String,
    /// Cover art filename, when the album has one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cover_art_filename: Option<String>,
    /// Whether the song metadata is verified.
    pub is_verified: bool,
    /// Relative popularity score, when the endpoint reports one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub popularity: Option<u64>,
}

/// An artist record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Artist {
    /// Grooveshark artist ID.
    pub artist_id: u64,
    /// Display name.
    pub artist_name: String,
    /// Whether the artist is verified.
    pub is_verified: bool,
}

/// An album record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Album {
    /// Grooveshark album ID.
    pub album_id: u64,
    /// Album title.
    pub album_name: String,
    /// Primary artist ID.
    pub artist_id: u64,
    /// Primary artist name.
    pub artist_name: String,
    /// Cover art filename, when present.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cover_art_filename: Option<String>,
    /// Whether the album metadata is verified.
    pub is_verified: bool,
}

/// A playlist as listed by the user-playlist methods.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Playlist {
    /// Grooveshark playlist ID.
    pub playlist_id: u64,
    /// Playlist title.
    pub playlist_name: String,
    /// Timestamp the playlist was added, as reported by the service.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ts_added: Option<String>,
}

/// The logged-in user record returned by `authenticate` / `getUserInfo`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserInfo {
    /// Grooveshark user ID.
    pub user_id: u64,
    /// Account email, when the service discloses it.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// First name.
    pub first_name: String,
    /// Last name.
    pub last_name: String,
    /// Whether the account has a premium subscription.
    pub is_premium: bool,
}

/// Streaming descriptor returned by
/// [`get_stream_key_stream_server`](crate::GroovesharkClient::get_stream_key_stream_server).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StreamKey {
    /// Opaque stream key, echoed back by the mark-as-played methods.
    pub stream_key: String,
    /// One-shot stream URL.
    pub url: String,
    /// Stream server ID, echoed back by the mark-as-played methods.
    pub stream_server_id: u64,
    /// Server-reported lifetime of the key, in microseconds.
    pub usecs: u64,
    /// Hostname component of [`url`](Self::url), extracted client-side.
    pub stream_server_hostname: String,
}

/// Boolean acknowledgement returned by the mutation methods.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Success {
    /// Whether the remote operation succeeded.
    pub success: bool,
}

/// Result of [`create_playlist`](crate::GroovesharkClient::create_playlist).
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct CreatedPlaylist {
    /// Whether the playlist was created.
    pub success: bool,
    /// ID of the new playlist (0 when creation failed).
    pub playlist_id: u64,
}

/// One-or-many id input for the plural lookup methods.
///
/// A single id normalizes to a one-element sequence, producing exactly the
/// same wire request as passing `vec![id]`.
///
/// ```
/// use grooveshark_api::Ids;
///
/// assert_eq!(Ids::from(7u64).into_vec(), Ids::from(vec![7u64]).into_vec());
/// ```
#[derive(Debug, Clone)]
pub enum Ids {
    /// A single id.
    One(u64),
    /// An explicit sequence of ids.
    Many(Vec<u64>),
}

impl Ids {
    /// Normalize to a sequence.
    pub fn into_vec(self) -> Vec<u64> {
        match self {
            Self::One(id) => vec![id],
            Self::Many(ids) => ids,
        }
    }
}

impl From<u64> for Ids {
    fn from(id: u64) -> Self {
        Self::One(id)
    }
}

impl From<Vec<u64>> for Ids {
    fn from(ids: Vec<u64>) -> Self {
        Self::Many(ids)
    }
}

impl From<&[u64]> for Ids {
    fn from(ids: &[u64]) -> Self {
        Self::Many(ids.to_vec())
    }
}

// ---------------------------------------------------------------------------
// Lenient wire parsers. The service mixes numbers and numeric strings for
// ids and 0/1 and booleans for flags; these helpers accept either.

pub(crate) fn num_field(v: &Value, key: &str) -> u64 {
    match &v[key] {
        Value::Number(n) => n.as_u64().unwrap_or(0),
        Value::String(s) => s.parse().unwrap_or(0),
        _ => 0,
    }
}

pub(crate) fn str_field(v: &Value, key: &str) -> String {
    v[key].as_str().unwrap_or("").to_owned()
}

pub(crate) fn opt_str_field(v: &Value, key: &str) -> Option<String> {
    v[key].as_str().filter(|s| !s.is_empty()).map(String::from)
}

pub(crate) fn flag_field(v: &Value, key: &str) -> bool {
    match &v[key] {
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_i64().unwrap_or(0) != 0,
        Value::String(s) => s == "1" || s.eq_ignore_ascii_case("true"),
        _ => false,
    }
}

pub(crate) fn parse_song(v: &Value) -> Song {
    Song {
        song_id: num_field(v, "SongID"),
        song_name: str_field(v, "SongName"),
        artist_id: num_field(v, "ArtistID"),
        artist_name: str_field(v, "ArtistName"),
        album_id: num_field(v, "AlbumID"),
        album_name: str_field(v, "AlbumName"),
        cover_art_filename: opt_str_field(v, "CoverArtFilename"),
        is_verified: flag_field(v, "IsVerified"),
        popularity: match &v["Popularity"] {
            Value::Null => None,
            p => Some(match p {
                Value::Number(n) => n.as_u64().unwrap_or(0),
                Value::String(s) => s.parse().unwrap_or(0),
                _ => 0,
            }),
        },
    }
}

pub(crate) fn parse_artist(v: &Value) -> Artist {
    Artist {
        artist_id: num_field(v, "ArtistID"),
        artist_name: str_field(v, "ArtistName"),
        is_verified: flag_field(v, "IsVerified"),
    }
}

pub(crate) fn parse_album(v: &Value) -> Album {
    Album {
        album_id: num_field(v, "AlbumID"),
        album_name: str_field(v, "AlbumName"),
        artist_id: num_field(v, "ArtistID"),
        artist_name: str_field(v, "ArtistName"),
        cover_art_filename: opt_str_field(v, "CoverArtFilename"),
        is_verified: flag_field(v, "IsVerified"),
    }
}

pub(crate) fn parse_playlist(v: &Value) -> Playlist {
    Playlist {
        playlist_id: num_field(v, "PlaylistID"),
        playlist_name: str_field(v, "PlaylistName"),
        ts_added: match &v["TSAdded"] {
            Value::String(s) => Some(s.clone()),
            Value::Number(n) => Some(n.to_string()),
            _ => None,
        },
    }
}

pub(crate) fn parse_user(v: &Value) -> UserInfo {
    UserInfo {
        user_id: num_field(v, "UserID"),
        email: opt_str_field(v, "Email"),
        first_name: str_field(v, "FName"),
        last_name: str_field(v, "LName"),
        is_premium: flag_field(v, "IsPremium"),
    }
}

pub(crate) fn parse_success(v: &Value) -> Success {
    Success { success: flag_field(v, "success") }
}

pub(crate) fn parse_created_playlist(v: &Value) -> CreatedPlaylist {
    CreatedPlaylist {
        success: flag_field(v, "success"),
        playlist_id: num_field(v, "playlistID"),
    }
}

/// Parse a `result[key]` list value into records; the sentinel empty result
/// and non-array values both yield an empty list, matching the original's
/// falsy-for-no-data convention.
pub(crate) fn parse_list<T>(result: Option<Value>, parse: fn(&Value) -> T) -> Vec<T> {
    match result {
        Some(Value::Array(items)) => items.iter().map(parse).collect(),
        _ => Vec::new(),
    }
}

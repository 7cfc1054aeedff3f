//! Grooveshark ws3 API client library.
//!
//! A blocking client binding for the Grooveshark music-catalog web service:
//! it builds signed JSON requests, posts them to the fixed `ws3.php`
//! endpoint, and unwraps the `{result, errors}` response envelope into
//! domain values (songs, albums, artists, playlists, streaming metadata).
//!
//! # Sessions
//!
//! Every call rides on a session id. Open one with
//! [`GroovesharkClient::start_session`] (or restore a stored id with
//! [`GroovesharkClient::set_session`]); calling anything else first fails
//! with [`Error::SessionRequired`] before any network activity.
//!
//! ```no_run
//! use grooveshark_api::GroovesharkClient;
//!
//! let mut client = GroovesharkClient::new("my-key", "my-secret").unwrap();
//! client.start_session().unwrap();
//! client.get_country(None).unwrap();
//!
//! let songs = client
//!     .get_song_search_results("the kinks", None, Some(10), None)
//!     .unwrap();
//! for song in songs {
//!     println!("{} — {}", song.artist_name, song.song_name);
//! }
//! ```
//!
//! # API method mapping
//!
//! | Method family | Remote methods | Module |
//! |---------------|----------------|--------|
//! | Session & account | `startSession`, `logout`, `authenticate`, `getUserInfo`, `getCountry`, `pingService` | `session` |
//! | User library | `getUserPlaylists(ByUserID)`, `getUserLibrarySongs`, `getUserFavoriteSongs`, `addUserFavoriteSong` | `user` |
//! | Playlists | `createPlaylist`, `getPlaylistSongs`, `setPlaylistSongs` (+ append composite) | `playlist` |
//! | Songs | `getSongsInfo`, `getDoesSongExist`, `getSongURLFromSongID`, Tinysong resolvers, `getPopularSongsToday/Month` | `song` |
//! | Albums | `getAlbumsInfo`, `getDoesAlbumExist`, `getAlbumSongs` | `album` |
//! | Artists | `getArtistsInfo`, `getDoesArtistExist`, `getArtist(Verified)Albums`, `getArtistPopularSongs` | `artist` |
//! | Search | `getSongSearchResults`, `getArtistSearchResults`, `getAlbumSearchResults` | `search` |
//! | Streaming | `getStreamKeyStreamServer`, `markStreamKeyOver30Secs`, `markSongComplete` | `stream` |
//!
//! # Signing
//!
//! Each request body is signed with HMAC-MD5 keyed by the shared secret;
//! the hex digest travels as the `sig` query parameter. The signature is
//! computed over the exact bytes that are transmitted. See [`sign`]
//! (internal).
//!
//! # "No data" vs errors
//!
//! The service answers "nothing found" with an empty `result` rather than
//! an error entry. Methods mirror that: they return `None` or an empty
//! collection for no-data, and reserve [`Error`] for validation, session,
//! transport, and explicit service errors.

mod album;
mod artist;
pub mod client;
pub mod error;
mod playlist;
mod search;
mod session;
mod sign;
mod song;
mod stream;
pub mod types;
mod user;

pub use client::{Config, GroovesharkClient};
pub use error::{Error, Result};
pub use types::{
    Album, Artist, CreatedPlaylist, Ids, Playlist, Song, StreamKey, Success, UserInfo,
};

//! Artist lookup, existence, album, and popularity methods.
//!
//! `getArtistsInfo` follows the same plural/singular/keyed pattern as the
//! song lookups (see [`crate::song`]); `getArtistAlbums` has a verified-only
//! sibling endpoint selected by [`get_artist_verified_albums`].
//!
//! [`get_artist_verified_albums`]: crate::GroovesharkClient::get_artist_verified_albums

use crate::client::GroovesharkClient;
use crate::error::Result;
use crate::types::{Album, Artist, Ids, Song, parse_album, parse_artist, parse_list, parse_song};
use serde_json::{Value, json};
use std::collections::BTreeMap;

impl GroovesharkClient {
    /// Metadata for a single artist; `None` when the service knows nothing
    /// about it.
    pub fn get_artist_info(&self, artist_id: u64) -> Result<Option<Artist>> {
        Ok(self.get_artists_info(artist_id)?.into_iter().next())
    }

    /// Metadata for several artists. Accepts a single id or a sequence;
    /// an empty sequence returns an empty list without a network call.
    pub fn get_artists_info(&self, artist_ids: impl Into<Ids>) -> Result<Vec<Artist>> {
        let ids = artist_ids.into().into_vec();
        if ids.is_empty() {
            return Ok(Vec::new());
        }
        let params = json!({ "artistIDs": ids });
        let result = self.call("getArtistsInfo", params, Some("artists"), false)?;
        Ok(parse_list(result, parse_artist))
    }

    /// Like [`get_artists_info`](Self::get_artists_info), keyed by artist
    /// id. Records without an artist id are dropped.
    pub fn get_artists_info_by_id(
        &self,
        artist_ids: impl Into<Ids>,
    ) -> Result<BTreeMap<u64, Artist>> {
        Ok(self
            .get_artists_info(artist_ids)?
            .into_iter()
            .filter(|a| a.artist_id != 0)
            .map(|a| (a.artist_id, a))
            .collect())
    }

    /// Whether the given artist id exists.
    pub fn get_does_artist_exist(&self, artist_id: u64) -> Result<bool> {
        let params = json!({ "artistID": artist_id });
        let result = self.call("getDoesArtistExist", params, None, false)?;
        Ok(result.as_ref().and_then(Value::as_bool).unwrap_or(false))
    }

    /// All albums by an artist.
    pub fn get_artist_albums(&self, artist_id: u64) -> Result<Vec<Album>> {
        let params = json!({ "artistID": artist_id });
        let result = self.call("getArtistAlbums", params, Some("albums"), false)?;
        Ok(parse_list(result, parse_album))
    }

    /// Only the verified albums of an artist.
    pub fn get_artist_verified_albums(&self, artist_id: u64) -> Result<Vec<Album>> {
        let params = json!({ "artistID": artist_id });
        let result = self.call("getArtistVerifiedAlbums", params, Some("albums"), false)?;
        Ok(parse_list(result, parse_album))
    }

    /// The top songs for an artist.
    pub fn get_artist_popular_songs(&self, artist_id: u64) -> Result<Vec<Song>> {
        let params = json!({ "artistID": artist_id });
        let result = self.call("getArtistPopularSongs", params, Some("songs"), false)?;
        Ok(parse_list(result, parse_song))
    }
}

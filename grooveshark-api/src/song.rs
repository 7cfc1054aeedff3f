//! Song lookup, existence, URL, and popularity methods.
//!
//! # Endpoints
//!
//! ## `getSongsInfo`
//!
//! Request parameters: `{ "songIDs": [1, 2, ...] }`
//!
//! Response `result`: `{ "songs": [ { "SongID": 1, "SongName": "...",
//! "ArtistID": ..., "AlbumID": ..., "CoverArtFilename": "...", ... } ] }`
//!
//! Plural results are not guaranteed to come back in request order. The
//! singular variant delegates to the plural one and takes the first record;
//! the keyed variant re-keys records by song id, silently dropping any that
//! lack one.
//!
//! ## `getDoesSongExist`
//!
//! The `result` value is a bare boolean rather than an object.
//!
//! ## Tinysong methods
//!
//! `getSongIDFromTinysongBase62` / `getSongURLFromTinysongBase62` resolve a
//! Tinysong short code; codes must be base-62 alphanumeric.

use crate::client::{GroovesharkClient, with_limit};
use crate::error::Result;
use crate::types::{Ids, Song, parse_list, parse_song};
use serde_json::{Value, json};
use std::collections::BTreeMap;

fn is_base62(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_alphanumeric())
}

impl GroovesharkClient {
    /// Metadata for a single song; `None` when the service knows nothing
    /// about it.
    pub fn get_song_info(&self, song_id: u64) -> Result<Option<Song>> {
        Ok(self.get_songs_info(song_id)?.into_iter().next())
    }

    /// Metadata for several songs. Accepts a single id or a sequence; both
    /// produce the same one-element request on the wire.
    ///
    /// An empty id sequence returns an empty list without a network call.
    pub fn get_songs_info(&self, song_ids: impl Into<Ids>) -> Result<Vec<Song>> {
        let ids = song_ids.into().into_vec();
        if ids.is_empty() {
            return Ok(Vec::new());
        }
        let params = json!({ "songIDs": ids });
        let result = self.call("getSongsInfo", params, Some("songs"), false)?;
        Ok(parse_list(result, parse_song))
    }

    /// Like [`get_songs_info`](Self::get_songs_info), keyed by song id.
    /// Records the service returned without a song id are dropped.
    pub fn get_songs_info_by_id(
        &self,
        song_ids: impl Into<Ids>,
    ) -> Result<BTreeMap<u64, Song>> {
        Ok(self
            .get_songs_info(song_ids)?
            .into_iter()
            .filter(|s| s.song_id != 0)
            .map(|s| (s.song_id, s))
            .collect())
    }

    /// Whether the given song id exists.
    pub fn get_does_song_exist(&self, song_id: u64) -> Result<bool> {
        let result = self.call("getDoesSongExist", json!({ "songID": song_id }), None, false)?;
        Ok(result.as_ref().and_then(Value::as_bool).unwrap_or(false))
    }

    /// The Grooveshark page URL for a song.
    pub fn get_song_url_from_song_id(&self, song_id: u64) -> Result<Option<String>> {
        let params = json!({ "songID": song_id });
        let result = self.call("getSongURLFromSongID", params, Some("url"), false)?;
        Ok(result.as_ref().and_then(Value::as_str).map(String::from))
    }

    /// Resolve a Tinysong base-62 code to a song id.
    ///
    /// Returns `None` without a network call when `base62` is not
    /// alphanumeric.
    pub fn get_song_id_from_tinysong_base62(&self, base62: &str) -> Result<Option<u64>> {
        if !is_base62(base62) {
            return Ok(None);
        }
        let params = json!({ "base62": base62 });
        let result = self.call("getSongIDFromTinysongBase62", params, Some("songID"), false)?;
        Ok(result.as_ref().and_then(Value::as_u64))
    }

    /// Resolve a Tinysong base-62 code to a Grooveshark page URL.
    ///
    /// Returns `None` without a network call when `base62` is not
    /// alphanumeric.
    pub fn get_song_url_from_tinysong_base62(&self, base62: &str) -> Result<Option<String>> {
        if !is_base62(base62) {
            return Ok(None);
        }
        let params = json!({ "base62": base62 });
        let result = self.call("getSongURLFromTinysongBase62", params, Some("url"), false)?;
        Ok(result.as_ref().and_then(Value::as_str).map(String::from))
    }

    /// Today's popular songs.
    pub fn get_popular_songs_today(&self, limit: Option<u64>) -> Result<Vec<Song>> {
        let params = with_limit(json!({}), limit);
        let result = self.call("getPopularSongsToday", params, Some("songs"), false)?;
        Ok(parse_list(result, parse_song))
    }

    /// This month's popular songs.
    pub fn get_popular_songs_month(&self, limit: Option<u64>) -> Result<Vec<Song>> {
        let params = with_limit(json!({}), limit);
        let result = self.call("getPopularSongsMonth", params, Some("songs"), false)?;
        Ok(parse_list(result, parse_song))
    }
}

//! Album lookup, existence, and track-listing methods.
//!
//! `getAlbumsInfo` follows the same plural/singular/keyed pattern as the
//! song lookups (see [`crate::song`]).

use crate::client::{GroovesharkClient, with_limit};
use crate::error::Result;
use crate::types::{Album, Ids, Song, parse_album, parse_list, parse_song};
use serde_json::{Value, json};
use std::collections::BTreeMap;

impl GroovesharkClient {
    /// Metadata for a single album; `None` when the service knows nothing
    /// about it.
    pub fn get_album_info(&self, album_id: u64) -> Result<Option<Album>> {
        Ok(self.get_albums_info(album_id)?.into_iter().next())
    }

    /// Metadata for several albums. Accepts a single id or a sequence;
    /// an empty sequence returns an empty list without a network call.
    pub fn get_albums_info(&self, album_ids: impl Into<Ids>) -> Result<Vec<Album>> {
        let ids = album_ids.into().into_vec();
        if ids.is_empty() {
            return Ok(Vec::new());
        }
        let params = json!({ "albumIDs": ids });
        let result = self.call("getAlbumsInfo", params, Some("albums"), false)?;
        Ok(parse_list(result, parse_album))
    }

    /// Like [`get_albums_info`](Self::get_albums_info), keyed by album id.
    /// Records without an album id are dropped.
    pub fn get_albums_info_by_id(
        &self,
        album_ids: impl Into<Ids>,
    ) -> Result<BTreeMap<u64, Album>> {
        Ok(self
            .get_albums_info(album_ids)?
            .into_iter()
            .filter(|a| a.album_id != 0)
            .map(|a| (a.album_id, a))
            .collect())
    }

    /// Whether the given album id exists.
    pub fn get_does_album_exist(&self, album_id: u64) -> Result<bool> {
        let params = json!({ "albumID": album_id });
        let result = self.call("getDoesAlbumExist", params, None, false)?;
        Ok(result.as_ref().and_then(Value::as_bool).unwrap_or(false))
    }

    /// Songs on the given album.
    pub fn get_album_songs(&self, album_id: u64, limit: Option<u64>) -> Result<Vec<Song>> {
        let params = with_limit(json!({ "albumID": album_id }), limit);
        let result = self.call("getAlbumSongs", params, Some("songs"), false)?;
        Ok(parse_list(result, parse_song))
    }
}

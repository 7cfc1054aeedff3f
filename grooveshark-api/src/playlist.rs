//! Playlist mutation methods.
//!
//! The service has no append primitive: adding a song means fetching the
//! playlist's current songs and re-setting the full id list via
//! `setPlaylistSongs`, which acknowledges with `{ "success": bool }`.

use crate::client::{GroovesharkClient, with_limit};
use crate::error::Result;
use crate::types::{
    CreatedPlaylist, Song, Success, parse_created_playlist, parse_list, parse_song, parse_success,
};
use serde_json::json;

impl GroovesharkClient {
    /// Create a playlist for the logged-in user, optionally pre-filled with
    /// songs.
    ///
    /// Returns `None` without a network call when `name` is empty.
    pub fn create_playlist(
        &self,
        name: &str,
        song_ids: &[u64],
    ) -> Result<Option<CreatedPlaylist>> {
        if name.is_empty() {
            return Ok(None);
        }
        let params = json!({ "name": name, "songIDs": song_ids });
        let result = self.call("createPlaylist", params, None, false)?;
        Ok(result.map(|v| parse_created_playlist(&v)))
    }

    /// Songs on the given playlist.
    pub fn get_playlist_songs(&self, playlist_id: u64, limit: Option<u64>) -> Result<Vec<Song>> {
        Ok(self
            .fetch_playlist_songs(playlist_id, limit)?
            .unwrap_or_default())
    }

    /// Like [`get_playlist_songs`](Self::get_playlist_songs), but keeps the
    /// no-data sentinel apart from a playlist that exists and is empty; the
    /// append composite must only abort on the former.
    fn fetch_playlist_songs(
        &self,
        playlist_id: u64,
        limit: Option<u64>,
    ) -> Result<Option<Vec<Song>>> {
        let params = with_limit(json!({ "playlistID": playlist_id }), limit);
        let result = self.call("getPlaylistSongs", params, Some("songs"), false)?;
        Ok(result.map(|v| parse_list(Some(v), parse_song)))
    }

    /// Replace the songs of a playlist owned by the logged-in user.
    pub fn set_playlist_songs(&self, playlist_id: u64, song_ids: &[u64]) -> Result<Success> {
        let params = json!({ "playlistID": playlist_id, "songIDs": song_ids });
        let result = self.call("setPlaylistSongs", params, None, false)?;
        Ok(result.map_or(Success { success: false }, |v| parse_success(&v)))
    }

    /// Append a song to the end of a playlist.
    ///
    /// Fetches the playlist's current songs, appends `song_id`, and calls
    /// [`set_playlist_songs`](Self::set_playlist_songs). An empty playlist
    /// is still a playlist and the append proceeds; only the no-data
    /// sentinel (the service knows nothing about the playlist) abandons the
    /// append with `success: false`.
    pub fn add_song_to_playlist(&self, playlist_id: u64, song_id: u64) -> Result<Success> {
        let Some(songs) = self.fetch_playlist_songs(playlist_id, None)? else {
            return Ok(Success { success: false });
        };
        let mut ids: Vec<u64> = songs.into_iter().map(|s| s.song_id).collect();
        ids.push(song_id);
        self.set_playlist_songs(playlist_id, &ids)
    }
}

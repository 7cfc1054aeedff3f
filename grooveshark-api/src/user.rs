//! Library, favorites, and playlist listings for the logged-in user.
//!
//! All of these require an authenticated session. The optional `limit`
//! parameter caps the number of returned records and is sent only when
//! non-zero.

use crate::client::{GroovesharkClient, with_limit};
use crate::error::Result;
use crate::types::{Playlist, Song, parse_list, parse_playlist, parse_song};
use serde_json::{Value, json};

impl GroovesharkClient {
    /// The logged-in user's playlists.
    pub fn get_user_playlists(&self, limit: Option<u64>) -> Result<Vec<Playlist>> {
        let params = with_limit(json!({}), limit);
        let result = self.call("getUserPlaylists", params, Some("playlists"), false)?;
        Ok(parse_list(result, parse_playlist))
    }

    /// Playlists owned by the given user.
    pub fn get_user_playlists_by_user_id(
        &self,
        user_id: u64,
        limit: Option<u64>,
    ) -> Result<Vec<Playlist>> {
        let params = with_limit(json!({ "userID": user_id }), limit);
        let result = self.call("getUserPlaylistsByUserID", params, Some("playlists"), false)?;
        Ok(parse_list(result, parse_playlist))
    }

    /// Songs in the logged-in user's library.
    pub fn get_user_library_songs(&self, limit: Option<u64>) -> Result<Vec<Song>> {
        let params = with_limit(json!({}), limit);
        let result = self.call("getUserLibrarySongs", params, Some("songs"), false)?;
        Ok(parse_list(result, parse_song))
    }

    /// The logged-in user's favorite songs.
    pub fn get_user_favorite_songs(&self, limit: Option<u64>) -> Result<Vec<Song>> {
        let params = with_limit(json!({}), limit);
        let result = self.call("getUserFavoriteSongs", params, Some("songs"), false)?;
        Ok(parse_list(result, parse_song))
    }

    /// Add a song to the logged-in user's favorites.
    pub fn add_user_favorite_song(&self, song_id: u64) -> Result<bool> {
        let params = json!({ "songID": song_id });
        let result = self.call("addUserFavoriteSong", params, Some("success"), false)?;
        Ok(result.as_ref().and_then(Value::as_bool).unwrap_or(false))
    }
}

//! Streaming methods.
//!
//! # Endpoints
//!
//! ## `getStreamKeyStreamServer`
//!
//! Request parameters: `{ "songID": 123, "country": <stored country>,
//! "lowBitrate": true? }`
//!
//! Response `result`: `{ "StreamKey": "...", "url": "http://host/...",
//! "StreamServerID": 42, "uSecs": 215000000 }`. The stream URL is good for
//! one playback. The hostname is extracted from `url` client-side into
//! [`StreamKey::stream_server_hostname`].
//!
//! ## `markStreamKeyOver30Secs` / `markSongComplete`
//!
//! Playback reporting: the first after 30 seconds of actual listening, the
//! second once the stream both passed 30 seconds and reached its final
//! second. Both acknowledge with `{ "success": bool }`.

use crate::client::GroovesharkClient;
use crate::error::{Error, Result};
use crate::types::{StreamKey, Success, num_field, parse_success, str_field};
use serde_json::json;

impl GroovesharkClient {
    /// Fetch a one-shot stream descriptor for a song.
    ///
    /// Returns `None` without a network call when `song_id` is zero, and
    /// `None` when the service has no stream for the song (the result
    /// carries no `StreamKey`).
    ///
    /// # Errors
    ///
    /// [`Error::Config`] when the client has no country set.
    pub fn get_stream_key_stream_server(
        &self,
        song_id: u64,
        low_bitrate: bool,
    ) -> Result<Option<StreamKey>> {
        if song_id == 0 {
            return Ok(None);
        }
        let Some(country) = self.country() else {
            return Err(Error::Config(
                "getStreamKeyStreamServer requires a country; call get_country or set_country first"
                    .to_owned(),
            ));
        };
        let mut params = json!({ "songID": song_id, "country": country });
        if low_bitrate {
            params["lowBitrate"] = json!(true);
        }
        let Some(result) = self.call("getStreamKeyStreamServer", params, None, false)? else {
            return Ok(None);
        };

        let stream_key = str_field(&result, "StreamKey");
        if stream_key.is_empty() {
            return Ok(None);
        }
        let url = str_field(&result, "url");
        let hostname = reqwest::Url::parse(&url)
            .ok()
            .and_then(|u| u.host_str().map(String::from))
            .unwrap_or_default();
        Ok(Some(StreamKey {
            stream_key,
            url,
            stream_server_id: num_field(&result, "StreamServerID"),
            usecs: num_field(&result, "uSecs"),
            stream_server_hostname: hostname,
        }))
    }

    /// Report that a stream has been listened to for more than 30 seconds.
    /// Call after 30 seconds of actual listening, not at the 30-second mark
    /// of the track.
    ///
    /// Returns `success: false` without a network call when `stream_key` is
    /// empty or `stream_server_id` is zero.
    pub fn mark_stream_key_over_30_secs(
        &self,
        stream_key: &str,
        stream_server_id: u64,
    ) -> Result<Success> {
        if stream_key.is_empty() || stream_server_id == 0 {
            return Ok(Success { success: false });
        }
        let params = json!({ "streamKey": stream_key, "streamServerID": stream_server_id });
        let result = self.call("markStreamKeyOver30Secs", params, None, false)?;
        Ok(result.map_or(Success { success: false }, |v| parse_success(&v)))
    }

    /// Report a completed stream: played for at least 30 seconds and
    /// reached the last second, by seeking or normal playback.
    ///
    /// Returns `success: false` without a network call when any input is
    /// empty/zero.
    pub fn mark_song_complete(
        &self,
        song_id: u64,
        stream_key: &str,
        stream_server_id: u64,
    ) -> Result<Success> {
        if song_id == 0 || stream_key.is_empty() || stream_server_id == 0 {
            return Ok(Success { success: false });
        }
        let params = json!({
            "songID": song_id,
            "streamKey": stream_key,
            "streamServerID": stream_server_id,
        });
        let result = self.call("markSongComplete", params, None, false)?;
        Ok(result.map_or(Success { success: false }, |v| parse_success(&v)))
    }
}

//! Search methods for songs, artists, and albums.
//!
//! The song search is country-scoped: a country must be resolvable from the
//! call argument or the client state (set by
//! [`get_country`](crate::GroovesharkClient::get_country) or
//! [`set_country`](crate::GroovesharkClient::set_country)).
//!
//! Song-search pagination is offset-based: with both `limit` and `page` the
//! offset is `(page - 1) * limit`, with only `page` it is `(page - 1) * 100`,
//! and it is sent only when positive. The artist and album searches instead
//! pass `page` straight through to the service.

use crate::client::GroovesharkClient;
use crate::error::{Error, Result};
use crate::types::{Album, Artist, Song, parse_album, parse_artist, parse_list, parse_song};
use serde_json::{Value, json};

fn with_paging(mut params: Value, limit: Option<u64>, page: Option<u64>) -> Value {
    if let Some(limit) = limit.filter(|l| *l > 0) {
        params["limit"] = json!(limit);
    }
    if let Some(page) = page.filter(|p| *p > 0) {
        params["page"] = json!(page);
    }
    params
}

fn song_search_offset(limit: Option<u64>, page: u64) -> u64 {
    (page.saturating_sub(1)) * limit.unwrap_or(100)
}

impl GroovesharkClient {
    /// Search songs matching `query`.
    ///
    /// `country` overrides the client's stored country for this call.
    /// An empty query returns an empty list without a network call.
    ///
    /// # Errors
    ///
    /// [`Error::Config`] when no country is resolvable from the argument or
    /// the client state.
    pub fn get_song_search_results(
        &self,
        query: &str,
        country: Option<Value>,
        limit: Option<u64>,
        page: Option<u64>,
    ) -> Result<Vec<Song>> {
        if query.is_empty() {
            return Ok(Vec::new());
        }
        let country = match country.or_else(|| self.country().cloned()) {
            Some(c) => c,
            None => {
                return Err(Error::Config(
                    "getSongSearchResults requires a country; call get_country or set_country first"
                        .to_owned(),
                ));
            }
        };

        let mut params = json!({ "query": query, "country": country });
        if let Some(limit) = limit.filter(|l| *l > 0) {
            params["limit"] = json!(limit);
        }
        if let Some(page) = page.filter(|p| *p > 0) {
            let offset = song_search_offset(limit, page);
            if offset > 0 {
                params["offset"] = json!(offset);
            }
        }

        let result = self.call("getSongSearchResults", params, Some("songs"), false)?;
        Ok(parse_list(result, parse_song))
    }

    /// Search artists matching `query`. To detect whether more than `n`
    /// artists exist, send a limit of `n + 1`.
    ///
    /// An empty query returns an empty list without a network call.
    pub fn get_artist_search_results(
        &self,
        query: &str,
        limit: Option<u64>,
        page: Option<u64>,
    ) -> Result<Vec<Artist>> {
        if query.is_empty() {
            return Ok(Vec::new());
        }
        let params = with_paging(json!({ "query": query }), limit, page);
        let result = self.call("getArtistSearchResults", params, Some("artists"), false)?;
        Ok(parse_list(result, parse_artist))
    }

    /// Search albums matching `query`. To detect whether more than `n`
    /// albums exist, send a limit of `n + 1`.
    ///
    /// An empty query returns an empty list without a network call.
    pub fn get_album_search_results(
        &self,
        query: &str,
        limit: Option<u64>,
        page: Option<u64>,
    ) -> Result<Vec<Album>> {
        if query.is_empty() {
            return Ok(Vec::new());
        }
        let params = with_paging(json!({ "query": query }), limit, page);
        let result = self.call("getAlbumSearchResults", params, Some("albums"), false)?;
        Ok(parse_list(result, parse_album))
    }
}

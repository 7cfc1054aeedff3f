//! Integration tests against a local mock of the ws3 endpoint.

use grooveshark_api::{Config, Error, GroovesharkClient};
use mockito::{Matcher, Server, ServerGuard};
use serde_json::json;

const KEY: &str = "demo";
const SECRET: &str = "1a79a4d60de6718e8e5b326e338ae533";

fn client_for(server: &ServerGuard) -> GroovesharkClient {
    let mut config = Config::new(KEY, SECRET);
    config.session_id = Some("sess".to_owned());
    GroovesharkClient::with_endpoint(config, server.url()).unwrap()
}

fn sessionless_client_for(server: &ServerGuard) -> GroovesharkClient {
    GroovesharkClient::with_endpoint(Config::new(KEY, SECRET), server.url()).unwrap()
}

#[test]
fn start_session_signs_the_transmitted_bytes_and_stores_the_id() {
    let mut server = Server::new();
    // Pinned HMAC-MD5 of the exact serialized envelope for these
    // credentials; a mismatch means the signature was computed over
    // different bytes than were sent.
    let mock = server
        .mock("POST", "/")
        .match_query(Matcher::UrlEncoded(
            "sig".into(),
            "73235aa437e65cd2c9d21cc357594342".into(),
        ))
        .match_body(Matcher::Json(json!({
            "method": "startSession",
            "parameters": {},
            "header": { "wsKey": KEY, "sessionID": "" },
        })))
        .with_body(r#"{"result":{"success":true,"sessionID":"abc123"}}"#)
        .create();

    let mut client = sessionless_client_for(&server);
    let id = client.start_session().unwrap();
    assert_eq!(id.as_deref(), Some("abc123"));
    assert_eq!(client.session(), Some("abc123"));
    mock.assert();
}

#[test]
fn start_session_ignores_an_empty_session_id() {
    let mut server = Server::new();
    server
        .mock("POST", "/")
        .match_query(Matcher::Any)
        .with_body(r#"{"result":{"success":false,"sessionID":""}}"#)
        .create();

    let mut client = sessionless_client_for(&server);
    assert!(client.start_session().unwrap().is_none());
    assert_eq!(client.session(), None);
}

#[test]
fn session_required_methods_issue_no_network_calls() {
    let mut server = Server::new();
    let mock = server
        .mock("POST", "/")
        .match_query(Matcher::Any)
        .expect(0)
        .create();

    let client = sessionless_client_for(&server);
    assert!(matches!(
        client.get_user_info(),
        Err(Error::SessionRequired { method }) if method == "getUserInfo"
    ));
    assert!(matches!(
        client.get_songs_info(7u64),
        Err(Error::SessionRequired { .. })
    ));
    mock.assert();
}

#[test]
fn single_id_and_one_element_sequence_hit_the_wire_identically() {
    let mut server = Server::new();
    let mock = server
        .mock("POST", "/")
        .match_query(Matcher::Regex("sig=[0-9a-f]{32}".into()))
        .match_body(Matcher::Json(json!({
            "method": "getSongsInfo",
            "parameters": { "songIDs": [42] },
            "header": { "wsKey": KEY, "sessionID": "sess" },
        })))
        .with_body(r#"{"result":{"songs":[{"SongID":42,"SongName":"Lola"}]}}"#)
        .expect(2)
        .create();

    let client = client_for(&server);
    let from_single = client.get_songs_info(42u64).unwrap();
    let from_sequence = client.get_songs_info(vec![42u64]).unwrap();
    assert_eq!(from_single.len(), 1);
    assert_eq!(from_single[0].song_id, from_sequence[0].song_id);
    mock.assert();
}

#[test]
fn empty_id_list_returns_empty_without_network() {
    let mut server = Server::new();
    let mock = server
        .mock("POST", "/")
        .match_query(Matcher::Any)
        .expect(0)
        .create();

    let client = client_for(&server);
    assert!(client.get_songs_info(Vec::<u64>::new()).unwrap().is_empty());
    assert!(client.get_songs_info_by_id(Vec::<u64>::new()).unwrap().is_empty());
    mock.assert();
}

#[test]
fn keyed_lookup_drops_records_without_an_id() {
    let mut server = Server::new();
    server
        .mock("POST", "/")
        .match_query(Matcher::Any)
        .with_body(
            r#"{"result":{"songs":[{"SongID":1,"SongName":"a"},{"SongName":"no id"}]}}"#,
        )
        .create();

    let client = client_for(&server);
    let keyed = client.get_songs_info_by_id(vec![1u64, 2]).unwrap();
    assert_eq!(keyed.len(), 1);
    assert_eq!(keyed[&1].song_name, "a");
}

#[test]
fn song_search_offset_uses_limit_times_pages() {
    let mut server = Server::new();
    let mock = server
        .mock("POST", "/")
        .match_query(Matcher::Any)
        .match_body(Matcher::Json(json!({
            "method": "getSongSearchResults",
            "parameters": { "query": "foo", "country": "US", "limit": 10, "offset": 10 },
            "header": { "wsKey": KEY, "sessionID": "sess" },
        })))
        .with_body(r#"{"result":{"songs":[]}}"#)
        .create();

    let mut client = client_for(&server);
    client.set_country("US");
    let songs = client
        .get_song_search_results("foo", None, Some(10), Some(2))
        .unwrap();
    assert!(songs.is_empty());
    mock.assert();
}

#[test]
fn song_search_offset_defaults_to_pages_of_100() {
    let mut server = Server::new();
    let mock = server
        .mock("POST", "/")
        .match_query(Matcher::Any)
        .match_body(Matcher::Json(json!({
            "method": "getSongSearchResults",
            "parameters": { "query": "foo", "country": "US", "offset": 100 },
            "header": { "wsKey": KEY, "sessionID": "sess" },
        })))
        .with_body(r#"{"result":{"songs":[]}}"#)
        .create();

    let mut client = client_for(&server);
    client.set_country("US");
    client
        .get_song_search_results("foo", None, None, Some(2))
        .unwrap();
    mock.assert();
}

#[test]
fn song_search_first_page_sends_no_offset() {
    let mut server = Server::new();
    let mock = server
        .mock("POST", "/")
        .match_query(Matcher::Any)
        .match_body(Matcher::Json(json!({
            "method": "getSongSearchResults",
            "parameters": { "query": "foo", "country": "US", "limit": 10 },
            "header": { "wsKey": KEY, "sessionID": "sess" },
        })))
        .with_body(r#"{"result":{"songs":[]}}"#)
        .create();

    let mut client = client_for(&server);
    client.set_country("US");
    client
        .get_song_search_results("foo", None, Some(10), Some(1))
        .unwrap();
    mock.assert();
}

#[test]
fn song_search_without_a_country_is_a_config_error() {
    let mut server = Server::new();
    let mock = server
        .mock("POST", "/")
        .match_query(Matcher::Any)
        .expect(0)
        .create();

    let client = client_for(&server);
    assert!(matches!(
        client.get_song_search_results("foo", None, None, None),
        Err(Error::Config(_))
    ));
    mock.assert();
}

#[test]
fn malformed_ip_fails_validation_before_network() {
    let mut server = Server::new();
    let mock = server
        .mock("POST", "/")
        .match_query(Matcher::Any)
        .expect(0)
        .create();

    let mut client = client_for(&server);
    assert!(matches!(
        client.get_country(Some("999.999.999.999")),
        Err(Error::Validation(_))
    ));
    assert!(matches!(
        client.get_country(Some("192.168.1.1")),
        Err(Error::Validation(_))
    ));
    mock.assert();
}

#[test]
fn get_country_stores_the_returned_record() {
    let mut server = Server::new();
    server
        .mock("POST", "/")
        .match_query(Matcher::Any)
        .with_body(r#"{"result":{"ID":221,"CC1":0,"CC2":0}}"#)
        .create();

    let mut client = client_for(&server);
    let country = client.get_country(None).unwrap().unwrap();
    assert_eq!(country["ID"], json!(221));
    assert_eq!(client.country(), Some(&country));
}

#[test]
fn error_envelope_maps_to_remote_error() {
    let mut server = Server::new();
    server
        .mock("POST", "/")
        .match_query(Matcher::Any)
        .with_body(r#"{"errors":[{"code":256,"message":"invalid client"},{"code":1}]}"#)
        .create();

    let client = client_for(&server);
    match client.get_user_info() {
        Err(Error::Remote { code, message }) => {
            assert_eq!(code, 256);
            assert_eq!(message, "invalid client");
        }
        other => panic!("expected remote error, got {other:?}"),
    }
}

#[test]
fn non_200_status_maps_to_transport_error() {
    let mut server = Server::new();
    server
        .mock("POST", "/")
        .match_query(Matcher::Any)
        .with_status(503)
        .create();

    let client = client_for(&server);
    assert!(matches!(
        client.get_user_info(),
        Err(Error::Transport { status: 503 })
    ));
}

#[test]
fn empty_result_is_the_no_data_sentinel_not_an_error() {
    let mut server = Server::new();
    server
        .mock("POST", "/")
        .match_query(Matcher::Any)
        .with_body(r#"{"result":{}}"#)
        .create();

    let client = client_for(&server);
    assert!(client.get_user_info().unwrap().is_none());
    assert!(client.get_song_info(5).unwrap().is_none());
}

#[test]
fn garbage_body_is_the_no_data_sentinel() {
    let mut server = Server::new();
    server
        .mock("POST", "/")
        .match_query(Matcher::Any)
        .with_body("<html>gateway got confused</html>")
        .create();

    let client = client_for(&server);
    assert!(client.ping_service().unwrap().is_none());
}

#[test]
fn authenticate_guards_inputs_and_requires_a_user_id() {
    let mut server = Server::new();
    let rejected = server
        .mock("POST", "/")
        .match_query(Matcher::Any)
        .with_body(r#"{"result":{"FName":"n","LName":"o"}}"#)
        .create();

    let client = client_for(&server);
    // Empty credentials never reach the wire.
    assert!(client.authenticate("", "pw").unwrap().is_none());
    assert!(client.authenticate("user", "").unwrap().is_none());
    // A result without a UserID is a rejection.
    assert!(client.authenticate("user", "pw").unwrap().is_none());
    rejected.assert();
}

#[test]
fn authenticate_returns_the_user_record() {
    let mut server = Server::new();
    server
        .mock("POST", "/")
        .match_query(Matcher::Any)
        .with_body(
            r#"{"result":{"UserID":99,"Email":"u@example.com","FName":"Ray","LName":"Davies","IsPremium":1}}"#,
        )
        .create();

    let client = client_for(&server);
    let user = client.authenticate("user", "pw").unwrap().unwrap();
    assert_eq!(user.user_id, 99);
    assert_eq!(user.first_name, "Ray");
    assert!(user.is_premium);
}

#[test]
fn add_song_to_playlist_appends_to_the_fetched_ids() {
    let mut server = Server::new();
    let fetch = server
        .mock("POST", "/")
        .match_query(Matcher::Any)
        .match_body(Matcher::Json(json!({
            "method": "getPlaylistSongs",
            "parameters": { "playlistID": 5 },
            "header": { "wsKey": KEY, "sessionID": "sess" },
        })))
        .with_body(r#"{"result":{"songs":[{"SongID":1},{"SongID":2}]}}"#)
        .create();
    let set = server
        .mock("POST", "/")
        .match_query(Matcher::Any)
        .match_body(Matcher::Json(json!({
            "method": "setPlaylistSongs",
            "parameters": { "playlistID": 5, "songIDs": [1, 2, 99] },
            "header": { "wsKey": KEY, "sessionID": "sess" },
        })))
        .with_body(r#"{"result":{"success":true}}"#)
        .create();

    let client = client_for(&server);
    let ack = client.add_song_to_playlist(5, 99).unwrap();
    assert!(ack.success);
    fetch.assert();
    set.assert();
}

#[test]
fn add_song_to_playlist_appends_to_an_empty_playlist() {
    let mut server = Server::new();
    let fetch = server
        .mock("POST", "/")
        .match_query(Matcher::Any)
        .match_body(Matcher::Json(json!({
            "method": "getPlaylistSongs",
            "parameters": { "playlistID": 5 },
            "header": { "wsKey": KEY, "sessionID": "sess" },
        })))
        .with_body(r#"{"result":{"songs":[]}}"#)
        .create();
    let set = server
        .mock("POST", "/")
        .match_query(Matcher::Any)
        .match_body(Matcher::Json(json!({
            "method": "setPlaylistSongs",
            "parameters": { "playlistID": 5, "songIDs": [99] },
            "header": { "wsKey": KEY, "sessionID": "sess" },
        })))
        .with_body(r#"{"result":{"success":true}}"#)
        .create();

    let client = client_for(&server);
    // An empty song list is still a playlist; only the no-data sentinel
    // aborts the append.
    let ack = client.add_song_to_playlist(5, 99).unwrap();
    assert!(ack.success);
    fetch.assert();
    set.assert();
}

#[test]
fn add_song_to_playlist_fails_when_the_fetch_yields_nothing() {
    let mut server = Server::new();
    server
        .mock("POST", "/")
        .match_query(Matcher::Any)
        .match_body(Matcher::Json(json!({
            "method": "getPlaylistSongs",
            "parameters": { "playlistID": 5 },
            "header": { "wsKey": KEY, "sessionID": "sess" },
        })))
        .with_body(r#"{"result":{}}"#)
        .create();
    let set = server
        .mock("POST", "/")
        .match_query(Matcher::Any)
        .match_body(Matcher::PartialJson(json!({ "method": "setPlaylistSongs" })))
        .expect(0)
        .create();

    let client = client_for(&server);
    let ack = client.add_song_to_playlist(5, 99).unwrap();
    assert!(!ack.success);
    set.assert();
}

#[test]
fn stream_descriptor_gains_the_server_hostname() {
    let mut server = Server::new();
    server
        .mock("POST", "/")
        .match_query(Matcher::Any)
        .with_body(
            r#"{"result":{"StreamKey":"k123","url":"http://stream17.example.com/stream.php?key=k123","StreamServerID":17,"uSecs":215000000}}"#,
        )
        .create();

    let mut client = client_for(&server);
    client.set_country("US");
    let stream = client.get_stream_key_stream_server(42, false).unwrap().unwrap();
    assert_eq!(stream.stream_key, "k123");
    assert_eq!(stream.stream_server_id, 17);
    assert_eq!(stream.usecs, 215_000_000);
    assert_eq!(stream.stream_server_hostname, "stream17.example.com");
}

#[test]
fn stream_descriptor_without_a_key_is_no_data() {
    let mut server = Server::new();
    server
        .mock("POST", "/")
        .match_query(Matcher::Any)
        .with_body(r#"{"result":{"url":"http://stream17.example.com/x"}}"#)
        .create();

    let mut client = client_for(&server);
    client.set_country("US");
    assert!(client.get_stream_key_stream_server(42, false).unwrap().is_none());
}

#[test]
fn stream_key_without_a_country_is_a_config_error() {
    let mut server = Server::new();
    let mock = server
        .mock("POST", "/")
        .match_query(Matcher::Any)
        .expect(0)
        .create();

    let client = client_for(&server);
    assert!(matches!(
        client.get_stream_key_stream_server(42, false),
        Err(Error::Config(_))
    ));
    mock.assert();
}

#[test]
fn stream_key_for_song_id_zero_is_no_data_without_network() {
    let mut server = Server::new();
    let mock = server
        .mock("POST", "/")
        .match_query(Matcher::Any)
        .expect(0)
        .create();

    // The zero guard fires even before the country check.
    let client = client_for(&server);
    assert!(client.get_stream_key_stream_server(0, false).unwrap().is_none());
    mock.assert();
}

#[test]
fn playback_reports_guard_their_inputs() {
    let mut server = Server::new();
    let mock = server
        .mock("POST", "/")
        .match_query(Matcher::Any)
        .expect(0)
        .create();

    let client = client_for(&server);
    assert!(!client.mark_stream_key_over_30_secs("", 17).unwrap().success);
    assert!(!client.mark_song_complete(42, "", 17).unwrap().success);
    mock.assert();
}

#[test]
fn logout_returns_the_success_flag() {
    let mut server = Server::new();
    server
        .mock("POST", "/")
        .match_query(Matcher::Any)
        .with_body(r#"{"result":{"success":true}}"#)
        .create();

    let client = client_for(&server);
    assert!(client.logout().unwrap());
}

#[test]
fn exists_lookup_reads_the_bare_result_value() {
    let mut server = Server::new();
    server
        .mock("POST", "/")
        .match_query(Matcher::Any)
        .with_body(r#"{"result":true}"#)
        .create();

    let client = client_for(&server);
    assert!(client.get_does_song_exist(7).unwrap());
}

#[test]
fn exists_lookup_treats_the_false_sentinel_as_absent() {
    let mut server = Server::new();
    server
        .mock("POST", "/")
        .match_query(Matcher::Any)
        .with_body(r#"{"result":false}"#)
        .create();

    let client = client_for(&server);
    assert!(!client.get_does_album_exist(7).unwrap());
}

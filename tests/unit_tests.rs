// Unit tests for the RooMatch client

use reqwest::header::{ACCEPT, CONTENT_TYPE};
use reqwest::StatusCode;
use roomatch_client::core::{
    escape_path_segment, interpret_response, next_match_path, prepare_next_match, NEXT_MATCH_PATH,
};
use roomatch_client::{ClientConfig, Match, MatchOutcome, MatchingError, ServerSelection};
use serde_json::json;

#[test]
fn test_path_template() {
    assert_eq!(NEXT_MATCH_PATH, "/match/{seekerId}");
    assert_eq!(next_match_path("abc123"), "/match/abc123");
}

#[test]
fn test_escaping_never_introduces_separators() {
    for id in ["a/b", "../etc", "x?y=1", "frag#1", "sp ace", "semi;colon"] {
        let escaped = escape_path_segment(id);
        assert!(!escaped.contains('/'), "{} -> {}", id, escaped);
        assert!(!escaped.contains('?'), "{} -> {}", id, escaped);
        assert!(!escaped.contains('#'), "{} -> {}", id, escaped);
        assert!(!escaped.contains(' '), "{} -> {}", id, escaped);
    }
}

#[test]
fn test_prepared_request_shape() {
    let config = ClientConfig::new("https://api.roomatch.test");
    let req = prepare_next_match(&config, "abc123").unwrap();

    assert_eq!(req.url, "https://api.roomatch.test/match/abc123");
    assert_eq!(req.headers.len(), 1);
    assert_eq!(req.headers.get(ACCEPT).unwrap(), "application/json");
    assert!(req.headers.get(CONTENT_TYPE).is_none());
}

#[test]
fn test_empty_id_rejected_before_base_url_resolution() {
    // an unusable server selection must not mask the argument error
    let config = ClientConfig::default()
        .with_servers(ServerSelection::default().with_servers(["https://a.test"]))
        .with_host_index(9);

    assert!(matches!(
        prepare_next_match(&config, ""),
        Err(MatchingError::InvalidArgument(_))
    ));
}

#[test]
fn test_servers_trailing_slash_trimmed() {
    let config = ClientConfig::default()
        .with_servers(ServerSelection::default().with_servers(["https://eu.roomatch.test/v1/"]));
    let req = prepare_next_match(&config, "s1").unwrap();
    assert_eq!(req.url, "https://eu.roomatch.test/v1/match/s1");
}

#[test]
fn test_three_way_outcome() {
    let found = interpret_response(StatusCode::OK, br#"{"matchId":"m1"}"#).unwrap();
    let expected: Match = serde_json::from_value(json!({"matchId": "m1"})).unwrap();
    assert_eq!(found, MatchOutcome::Match(expected));

    assert_eq!(
        interpret_response(StatusCode::NO_CONTENT, b"").unwrap(),
        MatchOutcome::NoMatch
    );

    assert!(matches!(
        interpret_response(StatusCode::BAD_REQUEST, b""),
        Err(MatchingError::BadRequest(_))
    ));
}

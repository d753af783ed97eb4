//! Tests for identifier wrappers

use super::*;

#[test]
fn test_game_id_keeps_leading_zeros() {
    let game_id: GameId = "0022300061".parse().unwrap();
    assert_eq!(game_id.as_str(), "0022300061");
    assert_eq!(game_id.to_string(), "0022300061");
}

#[test]
fn test_ids_trim_surrounding_whitespace() {
    let team: TeamId = "  BOS ".parse().unwrap();
    assert_eq!(team, TeamId::new("BOS"));

    let season: SeasonId = "2023-24\n".parse().unwrap();
    assert_eq!(season.as_str(), "2023-24");
}

#[test]
fn test_empty_identifier_rejected() {
    let result = "   ".parse::<GameId>();
    match result.unwrap_err() {
        StatsError::InvalidIdentifier { kind, .. } => assert_eq!(kind, "game id"),
        other => panic!("Expected InvalidIdentifier, got {:?}", other),
    }
}

#[test]
fn test_inner_whitespace_rejected() {
    assert!("LA L".parse::<TeamId>().is_err());
}

#[test]
fn test_game_id_ordering_is_lexicographic() {
    let mut ids = vec![GameId::new("0022300100"), GameId::new("0022300002")];
    ids.sort();
    assert_eq!(ids[0].as_str(), "0022300002");
}

#[test]
fn test_serde_is_transparent_string() {
    let season = SeasonId::new("2023-24");
    let json = serde_json::to_string(&season).unwrap();
    assert_eq!(json, "\"2023-24\"");
}

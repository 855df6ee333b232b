#![cfg(feature = "serde")]

use movetext::{Annotation, Game, Move, Outcome, Square};

#[test]
fn test_notation_as_strings() {
    let m: Move = "Nbxd7+!".parse().expect("valid move");
    assert_eq!(serde_json::to_string(&m).expect("serialize"), "\"Nbxd7+!\"");
    assert_eq!(serde_json::from_str::<Move>("\"Nbxd7+!\"").expect("deserialize"), m);

    assert_eq!(serde_json::to_string(&Annotation::Dubious).expect("serialize"), "\"?!\"");
    assert_eq!(serde_json::to_string(&Outcome::Draw).expect("serialize"), "\"1/2-1/2\"");
    assert_eq!(
        serde_json::from_str::<Square>("\"h8\"").expect("deserialize").to_string(),
        "h8"
    );
    assert!(serde_json::from_str::<Move>("\"Nbxd7+!!!\"").is_err());
}

#[test]
fn test_game() {
    let game: Game = "[Event \"x\"]\n1. e4 e5 2. Nf3 1-0".parse().expect("valid game");
    let json = serde_json::to_value(&game).expect("serialize");
    assert_eq!(json["tags"][0]["key"], "Event");
    assert_eq!(json["rounds"][1]["white"], "Nf3");
    assert_eq!(json["rounds"][1]["black"], serde_json::Value::Null);
    assert_eq!(json["result"], "1-0");

    let back: Game = serde_json::from_value(json).expect("deserialize");
    assert_eq!(back, game);
}

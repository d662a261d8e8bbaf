//! Tests for move content validation.

use mancala_plugin::{InvalidContent, Validation, check};
use serde_json::{Value, json};

fn candidate() -> Value {
    json!({
        "gameId": "0xabc",
        "selectedPit": 3,
        "opponentPits": [4, 4, 4, 4, 4, 4],
        "opponentMancala": 10,
    })
}

#[test]
fn accepts_well_formed_candidate() {
    let content = check(&candidate(), Validation::Shallow).unwrap();
    assert_eq!(content.game_id, "0xabc");
    assert_eq!(content.selected_pit, 3.into());
    assert_eq!(content.opponent_pits.len(), 6);
    assert_eq!(content.opponent_mancala, 10.into());
}

#[test]
fn shallow_ignores_value_ranges() {
    let candidate = json!({
        "gameId": "",
        "selectedPit": 42.5,
        "opponentPits": [-1, "x", null, 4, 4, 4],
        "opponentMancala": -10,
    });
    assert!(check(&candidate, Validation::Shallow).is_ok());
}

#[test]
fn pit_count_must_be_six() {
    for len in [5, 7] {
        let mut candidate = candidate();
        candidate["opponentPits"] = json!(vec![4; len]);
        assert_eq!(
            check(&candidate, Validation::Shallow),
            Err(InvalidContent::PitCount(len))
        );
    }
}

#[test]
fn missing_game_id_fails() {
    let mut candidate = candidate();
    candidate.as_object_mut().unwrap().remove("gameId");
    assert!(check(&candidate, Validation::Shallow).is_err());
}

#[test]
fn wrong_types_fail() {
    let cases = [
        ("gameId", json!(123)),
        ("selectedPit", json!("3")),
        ("opponentPits", json!("4,4,4,4,4,4")),
        ("opponentMancala", json!(null)),
    ];
    for (key, value) in cases {
        let mut candidate = candidate();
        candidate[key] = value;
        assert!(
            check(&candidate, Validation::Shallow).is_err(),
            "{key} should be rejected"
        );
    }
}

#[test]
fn non_objects_fail() {
    for value in [Value::Null, json!([]), json!("move 3")] {
        assert_eq!(
            check(&value, Validation::Shallow),
            Err(InvalidContent::NotAnObject)
        );
    }
}

#[test]
fn strict_checks_pit_range() {
    for pit in [json!(0), json!(7), json!(2.5), json!(-1)] {
        let mut candidate = candidate();
        candidate["selectedPit"] = pit;
        assert!(matches!(
            check(&candidate, Validation::Strict),
            Err(InvalidContent::PitOutOfRange(_))
        ));
    }
    let mut candidate = candidate();
    candidate["selectedPit"] = json!(6.0);
    assert!(check(&candidate, Validation::Strict).is_ok());
}

#[test]
fn strict_checks_seed_counts() {
    let mut candidate = candidate();
    candidate["opponentPits"] = json!([4, 4, -1, 4, 4, 4]);
    assert!(matches!(
        check(&candidate, Validation::Strict),
        Err(InvalidContent::NegativeCount { field: "opponentPits", .. })
    ));

    let mut candidate = self::candidate();
    candidate["opponentMancala"] = json!(-3);
    assert!(matches!(
        check(&candidate, Validation::Strict),
        Err(InvalidContent::NegativeCount { field: "opponentMancala", .. })
    ));
}

#[test]
fn content_serializes_with_wire_names() {
    let content = check(&candidate(), Validation::Shallow).unwrap();
    assert_eq!(serde_json::to_value(&content).unwrap(), candidate());
}

//! Move proposals extracted by the model, and the checks that gate them.

use serde::Serialize;
use serde_json::{Map, Number, Value};

/// How much of a candidate is checked before submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Validation {
    /// Field presence, JSON types and the pit count only.
    #[default]
    Shallow,
    /// Shallow, plus a selected pit in `1..=6` and non-negative integral
    /// seed counts.
    Strict,
}

/// A structurally valid move proposal.
///
/// Numbers keep the exact JSON representation the model produced so they
/// are echoed back unchanged.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MoveGameContent {
    /// On-chain game id.
    pub game_id: String,
    /// Pit to sow from, intended to be 1-6.
    pub selected_pit: Number,
    /// Seed counts of the opponent's six pits.
    pub opponent_pits: Vec<Value>,
    /// Seeds in the opponent's store.
    pub opponent_mancala: Number,
}

/// Why a candidate was rejected.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum InvalidContent {
    #[error("move content is not a JSON object")]
    NotAnObject,
    #[error("`{field}` must be {expected}")]
    Field {
        field: &'static str,
        expected: &'static str,
    },
    #[error("`opponentPits` must hold exactly 6 pits, got {0}")]
    PitCount(usize),
    #[error("`selectedPit` must be a whole number from 1 to 6, got {0}")]
    PitOutOfRange(Number),
    #[error("`{field}` must be a non-negative whole number, got {value}")]
    NegativeCount { field: &'static str, value: Value },
}

/// Check a generated candidate.
///
/// With [`Validation::Shallow`] a candidate passes iff `gameId` is a string,
/// `selectedPit` is a number, `opponentPits` is an array of exactly six
/// entries and `opponentMancala` is a number.
pub fn check(candidate: &Value, mode: Validation) -> Result<MoveGameContent, InvalidContent> {
    let object = candidate.as_object().ok_or(InvalidContent::NotAnObject)?;

    let game_id = match object.get("gameId") {
        Some(Value::String(id)) => id.clone(),
        _ => return Err(field("gameId", "a string")),
    };
    let selected_pit = number(object, "selectedPit")?;
    let opponent_pits = match object.get("opponentPits") {
        Some(Value::Array(pits)) if pits.len() == 6 => pits.clone(),
        Some(Value::Array(pits)) => return Err(InvalidContent::PitCount(pits.len())),
        _ => return Err(field("opponentPits", "an array")),
    };
    let opponent_mancala = number(object, "opponentMancala")?;

    if mode == Validation::Strict {
        if !matches!(count(&selected_pit), Some(1..=6)) {
            return Err(InvalidContent::PitOutOfRange(selected_pit));
        }
        for pit in &opponent_pits {
            let valid = match pit {
                Value::Number(n) => count(n).is_some(),
                _ => false,
            };
            if !valid {
                return Err(InvalidContent::NegativeCount {
                    field: "opponentPits",
                    value: pit.clone(),
                });
            }
        }
        if count(&opponent_mancala).is_none() {
            return Err(InvalidContent::NegativeCount {
                field: "opponentMancala",
                value: Value::Number(opponent_mancala),
            });
        }
    }

    Ok(MoveGameContent {
        game_id,
        selected_pit,
        opponent_pits,
        opponent_mancala,
    })
}

fn field(field: &'static str, expected: &'static str) -> InvalidContent {
    InvalidContent::Field { field, expected }
}

fn number(object: &Map<String, Value>, key: &'static str) -> Result<Number, InvalidContent> {
    match object.get(key) {
        Some(Value::Number(n)) => Ok(n.clone()),
        _ => Err(field(key, "a number")),
    }
}

/// The value of `n` as a seed count, if it is a non-negative whole number.
fn count(n: &Number) -> Option<u64> {
    if let Some(u) = n.as_u64() {
        return Some(u);
    }
    match n.as_f64() {
        Some(f) if f >= 0.0 && f.fract() == 0.0 && f <= u64::MAX as f64 => Some(f as u64),
        _ => None,
    }
}

/// Payload reported after a successful submission.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionResult {
    /// Always `true`.
    pub success: bool,
    /// Hash of the submitted transaction.
    pub tx_hash: String,
    /// Echoed game id.
    pub game_id: String,
    /// Echoed pit.
    pub selected_pit: Number,
}

impl TransactionResult {
    /// A successful result for `content`.
    pub fn new(tx_hash: String, content: &MoveGameContent) -> Self {
        Self {
            success: true,
            tx_hash,
            game_id: content.game_id.clone(),
            selected_pit: content.selected_pit.clone(),
        }
    }
}

// Per-player stats: player name -> optional stats record.
//
// Decoding is deliberately forgiving. A field that is missing, null, or of
// the wrong type is recorded as absent rather than failing the dataset.

use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use tracing::warn;

use super::{parse_object, DatasetError};

const RESOURCE: &str = "stats";

/// Stats for one player. Every field is independently optional; `None`
/// means "unknown", never zero.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StatsRecord {
    /// Minutes per game.
    #[serde(default, deserialize_with = "lenient_number", skip_serializing_if = "Option::is_none")]
    pub minutes: Option<f64>,
    /// Usage rate in percentage points.
    #[serde(default, deserialize_with = "lenient_number", skip_serializing_if = "Option::is_none")]
    pub usage: Option<f64>,
    /// Fraction of recent games the prop line was hit, in [0, 1].
    #[serde(
        rename = "hitRate",
        default,
        deserialize_with = "lenient_number",
        skip_serializing_if = "Option::is_none"
    )]
    pub hit_rate: Option<f64>,
    #[serde(
        rename = "backToBack",
        default,
        deserialize_with = "lenient_bool",
        skip_serializing_if = "Option::is_none"
    )]
    pub back_to_back: Option<bool>,
}

/// Mapping from player name to stats. An empty table is a normal state: it is
/// what callers substitute when the stats dataset could not be loaded.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StatsTable {
    players: BTreeMap<String, StatsRecord>,
}

impl StatsTable {
    pub fn new(players: BTreeMap<String, StatsRecord>) -> Self {
        Self { players }
    }

    /// Stats for `player`, if the dataset carries any.
    pub fn get(&self, player: &str) -> Option<&StatsRecord> {
        self.players.get(player)
    }

    pub fn len(&self) -> usize {
        self.players.len()
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }
}

impl FromIterator<(String, StatsRecord)> for StatsTable {
    fn from_iter<I: IntoIterator<Item = (String, StatsRecord)>>(iter: I) -> Self {
        Self {
            players: iter.into_iter().collect(),
        }
    }
}

/// Decode the stats dataset: `{ "<player>": { minutes?, usage?, hitRate?, backToBack? } }`.
///
/// Per-player values:
/// - `null` -> no record (the player is scored on the placeholder path)
/// - object -> record with leniently decoded fields
/// - anything else -> a record with every field absent
pub fn parse_stats(text: &str) -> Result<StatsTable, DatasetError> {
    let map = parse_object(RESOURCE, text)?;
    let mut players = BTreeMap::new();
    for (name, value) in map {
        match value {
            Value::Null => continue,
            Value::Object(_) => {
                let record = match serde_json::from_value::<StatsRecord>(value) {
                    Ok(r) => r,
                    Err(e) => {
                        warn!("stats for '{}' could not be decoded, treating fields as unknown: {}", name, e);
                        StatsRecord::default()
                    }
                };
                players.insert(name, record);
            }
            _ => {
                players.insert(name, StatsRecord::default());
            }
        }
    }
    Ok(StatsTable { players })
}

// ---------------------------------------------------------------------------
// Lenient field decoders
// ---------------------------------------------------------------------------

fn lenient_number<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(number_from_value(&value))
}

fn lenient_bool<'de, D>(deserializer: D) -> Result<Option<bool>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(value.as_bool())
}

/// Finite numbers, or strings holding one. Everything else is absent.
fn number_from_value(value: &Value) -> Option<f64> {
    let n = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    }?;
    n.is_finite().then_some(n)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_record_decodes() {
        let table = parse_stats(
            r#"{"Jayson Tatum": {"minutes": 36, "usage": 29.5, "hitRate": 0.65, "backToBack": false}}"#,
        )
        .unwrap();
        let rec = table.get("Jayson Tatum").unwrap();
        assert_eq!(rec.minutes, Some(36.0));
        assert_eq!(rec.usage, Some(29.5));
        assert_eq!(rec.hit_rate, Some(0.65));
        assert_eq!(rec.back_to_back, Some(false));
    }

    #[test]
    fn missing_fields_are_absent_not_zero() {
        let table = parse_stats(r#"{"Jrue Holiday": {"minutes": 31}}"#).unwrap();
        let rec = table.get("Jrue Holiday").unwrap();
        assert_eq!(rec.minutes, Some(31.0));
        assert_eq!(rec.usage, None);
        assert_eq!(rec.hit_rate, None);
        assert_eq!(rec.back_to_back, None);
    }

    #[test]
    fn wrong_typed_fields_are_absent() {
        let table = parse_stats(
            r#"{"P": {"minutes": "lots", "usage": [1], "hitRate": {}, "backToBack": "yes"}}"#,
        )
        .unwrap();
        assert_eq!(table.get("P"), Some(&StatsRecord::default()));
    }

    #[test]
    fn numeric_strings_are_accepted() {
        let table = parse_stats(r#"{"P": {"minutes": "32", "usage": " 27.5 "}}"#).unwrap();
        let rec = table.get("P").unwrap();
        assert_eq!(rec.minutes, Some(32.0));
        assert_eq!(rec.usage, Some(27.5));
    }

    #[test]
    fn non_finite_strings_are_absent() {
        let table = parse_stats(r#"{"P": {"minutes": "NaN", "usage": "inf"}}"#).unwrap();
        let rec = table.get("P").unwrap();
        assert_eq!(rec.minutes, None);
        assert_eq!(rec.usage, None);
    }

    #[test]
    fn null_player_value_has_no_record() {
        let table = parse_stats(r#"{"P": null, "Q": {}}"#).unwrap();
        assert!(table.get("P").is_none());
        assert_eq!(table.get("Q"), Some(&StatsRecord::default()));
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn scalar_player_value_is_an_empty_record() {
        let table = parse_stats(r#"{"P": 5}"#).unwrap();
        assert_eq!(table.get("P"), Some(&StatsRecord::default()));
    }

    #[test]
    fn unknown_fields_are_ignored() {
        let table = parse_stats(r#"{"P": {"minutes": 30, "rebounds": 9}}"#).unwrap();
        assert_eq!(table.get("P").unwrap().minutes, Some(30.0));
    }

    #[test]
    fn unknown_player_has_no_record() {
        let table = parse_stats("{}").unwrap();
        assert!(table.is_empty());
        assert!(table.get("Nobody").is_none());
    }
}

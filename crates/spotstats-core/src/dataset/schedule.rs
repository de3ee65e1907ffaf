// Game schedule: date key (YYYY-MM-DD) -> ordered games.

use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer, Serialize};

use super::{parse_object, DatasetError};

const RESOURCE: &str = "schedule";

/// One scheduled game. Immutable once decoded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Game {
    pub home_team: String,
    pub away_team: String,
    /// Display-only tip-off label (Eastern time in the published feed).
    /// Empty when the feed omits it.
    #[serde(rename = "time_et", default, deserialize_with = "string_or_empty")]
    pub time_label: String,
}

impl Game {
    pub fn new(away_team: &str, home_team: &str, time_label: &str) -> Self {
        Self {
            home_team: home_team.to_string(),
            away_team: away_team.to_string(),
            time_label: time_label.to_string(),
        }
    }

    /// Whether `team` plays in this game, compared case-insensitively.
    pub fn involves(&self, team: &str) -> bool {
        self.home_team.eq_ignore_ascii_case(team) || self.away_team.eq_ignore_ascii_case(team)
    }
}

/// Mapping from date key to that day's games. A missing date simply means
/// no games were published for it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ScheduleTable {
    days: BTreeMap<String, Vec<Game>>,
}

impl ScheduleTable {
    pub fn new(days: BTreeMap<String, Vec<Game>>) -> Self {
        Self { days }
    }

    /// Games on `date` in published order; empty when the date is absent.
    pub fn games_on(&self, date: &str) -> &[Game] {
        self.days.get(date).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Date keys in sorted order.
    pub fn dates(&self) -> impl Iterator<Item = &str> {
        self.days.keys().map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }
}

/// Decode the schedule dataset:
/// `{ "<YYYY-MM-DD>": [{ "home_team", "away_team", "time_et"? }, ...], ... }`.
///
/// Date keys are not validated; a malformed key is just a date nobody asks for.
pub fn parse_schedule(text: &str) -> Result<ScheduleTable, DatasetError> {
    let map = parse_object(RESOURCE, text)?;
    let mut days = BTreeMap::new();
    for (date, games) in map {
        let games: Vec<Game> = serde_json::from_value(games).map_err(|e| DatasetError::Shape {
            resource: RESOURCE,
            message: format!("date '{date}' must map to an array of games: {e}"),
        })?;
        days.insert(date, games);
    }
    Ok(ScheduleTable { days })
}

fn string_or_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"{
        "2025-01-15": [
            {"home_team": "Celtics", "away_team": "Knicks", "time_et": "7:30 PM"},
            {"home_team": "Lakers", "away_team": "Warriors"}
        ],
        "2025-01-16": []
    }"#;

    #[test]
    fn games_decode_in_published_order() {
        let schedule = parse_schedule(SAMPLE).unwrap();
        let games = schedule.games_on("2025-01-15");
        assert_eq!(games.len(), 2);
        assert_eq!(games[0], Game::new("Knicks", "Celtics", "7:30 PM"));
        assert_eq!(games[1].home_team, "Lakers");
        assert_eq!(games[1].away_team, "Warriors");
    }

    #[test]
    fn missing_time_is_empty_label() {
        let schedule = parse_schedule(SAMPLE).unwrap();
        assert_eq!(schedule.games_on("2025-01-15")[1].time_label, "");
    }

    #[test]
    fn null_time_is_empty_label() {
        let schedule = parse_schedule(
            r#"{"2025-01-15": [{"home_team": "A", "away_team": "B", "time_et": null}]}"#,
        )
        .unwrap();
        assert_eq!(schedule.games_on("2025-01-15")[0].time_label, "");
    }

    #[test]
    fn absent_date_means_no_games() {
        let schedule = parse_schedule(SAMPLE).unwrap();
        assert!(schedule.games_on("2031-07-04").is_empty());
        assert!(schedule.games_on("2025-01-16").is_empty());
    }

    #[test]
    fn game_missing_team_is_rejected() {
        let err = parse_schedule(r#"{"2025-01-15": [{"home_team": "Celtics"}]}"#).unwrap_err();
        match err {
            DatasetError::Shape { message, .. } => assert!(message.contains("2025-01-15")),
            other => panic!("expected Shape, got: {other}"),
        }
    }

    #[test]
    fn involves_matches_either_side_ignoring_case() {
        let game = Game::new("Knicks", "Celtics", "");
        assert!(game.involves("celtics"));
        assert!(game.involves("KNICKS"));
        assert!(!game.involves("Lakers"));
    }

    #[test]
    fn dates_are_sorted() {
        let schedule = parse_schedule(SAMPLE).unwrap();
        let dates: Vec<&str> = schedule.dates().collect();
        assert_eq!(dates, ["2025-01-15", "2025-01-16"]);
    }
}

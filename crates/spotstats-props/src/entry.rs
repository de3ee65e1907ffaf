// Prop entries: one scored, tiered row per player in a game.

use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

use spotstats_core::dataset::{Game, RosterTable, StatsTable};

use crate::scoring::score;
use crate::summary::summarize;
use crate::tier::{classify, Tier};

/// Which side of the game a player's team is on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Side {
    Home,
    Away,
}

impl Side {
    pub fn label(&self) -> &'static str {
        match self {
            Side::Home => "HOME",
            Side::Away => "AWAY",
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.label())
    }
}

/// A single player's prop assessment.
///
/// Built fresh by [`assemble`] and never modified afterwards; fields are
/// read-only outside this module.
///
/// Serialize-only: the score/tier pairing holds because [`build_entry`] is the
/// sole constructor.
///
/// ```compile_fail
/// let _: spotstats_props::PropEntry =
///     serde_json::from_str(r#"{"score": 7.5, "tier": "RED"}"#).unwrap();
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PropEntry {
    name: String,
    team: String,
    side: Side,
    score: f64,
    tier: Tier,
    #[serde(rename = "statsSummary")]
    stats_summary: String,
}

impl PropEntry {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn team(&self) -> &str {
        &self.team
    }

    pub fn side(&self) -> Side {
        self.side
    }

    /// Always within [0, 1].
    pub fn score(&self) -> f64 {
        self.score
    }

    /// Always `classify(self.score())`.
    pub fn tier(&self) -> Tier {
        self.tier
    }

    pub fn stats_summary(&self) -> &str {
        &self.stats_summary
    }
}

/// Build the entry for one player: look up stats, score, classify, summarize.
/// A player with no stats record is scored on the placeholder path.
pub fn build_entry(name: &str, team: &str, side: Side, stats: &StatsTable) -> PropEntry {
    let record = stats.get(name);
    let value = score(name, record);
    PropEntry {
        name: name.to_string(),
        team: team.to_string(),
        side,
        score: value,
        tier: classify(value),
        stats_summary: summarize(record),
    }
}

/// Build every entry for `game`: all away players in roster order, then all
/// home players in roster order. A team missing from `rosters` contributes
/// no entries.
pub fn assemble(game: &Game, rosters: &RosterTable, stats: &StatsTable) -> Vec<PropEntry> {
    let away = rosters.players(&game.away_team);
    let home = rosters.players(&game.home_team);

    if away.is_empty() {
        debug!(team = %game.away_team, "no roster for away team");
    }
    if home.is_empty() {
        debug!(team = %game.home_team, "no roster for home team");
    }

    let mut entries = Vec::with_capacity(away.len() + home.len());
    entries.extend(
        away.iter()
            .map(|p| build_entry(p, &game.away_team, Side::Away, stats)),
    );
    entries.extend(
        home.iter()
            .map(|p| build_entry(p, &game.home_team, Side::Home, stats)),
    );

    debug!(
        away = %game.away_team,
        home = %game.home_team,
        entries = entries.len(),
        "assembled props"
    );
    entries
}

#[cfg(test)]
mod tests {
    use super::*;
    use spotstats_core::dataset::StatsRecord;

    fn rosters() -> RosterTable {
        [
            ("Celtics".to_string(), vec!["Tatum".to_string(), "Brown".to_string()]),
            (
                "Knicks".to_string(),
                vec!["Brunson".to_string(), "Hart".to_string(), "Anunoby".to_string()],
            ),
        ]
        .into_iter()
        .collect()
    }

    fn stats() -> StatsTable {
        [(
            "Tatum".to_string(),
            StatsRecord {
                minutes: Some(32.0),
                usage: Some(28.0),
                hit_rate: Some(0.65),
                back_to_back: Some(false),
            },
        )]
        .into_iter()
        .collect()
    }

    // -- Builder --

    #[test]
    fn build_with_stats() {
        let e = build_entry("Tatum", "Celtics", Side::Home, &stats());
        assert_eq!(e.name(), "Tatum");
        assert_eq!(e.team(), "Celtics");
        assert_eq!(e.side(), Side::Home);
        assert!((e.score() - 0.85).abs() < 1e-9);
        assert_eq!(e.tier(), Tier::Green);
        assert_eq!(e.stats_summary(), "Min: 32 · USG: 28 · Hit: 65%");
    }

    #[test]
    fn build_without_stats_uses_placeholder() {
        let e = build_entry("Al", "Celtics", Side::Away, &StatsTable::default());
        assert!((e.score() - 0.45).abs() < 1e-9);
        assert_eq!(e.tier(), Tier::Red);
        assert_eq!(e.stats_summary(), "No stats – placeholder tier");
    }

    #[test]
    fn tier_matches_score() {
        for name in ["Tatum", "Brown", "Al", "BB", "AA"] {
            let e = build_entry(name, "T", Side::Home, &stats());
            assert_eq!(e.tier(), classify(e.score()));
        }
    }

    #[test]
    fn serialized_entries_keep_score_and_tier_paired() {
        let game = Game::new("Knicks", "Celtics", "");
        for e in assemble(&game, &rosters(), &stats()) {
            let value = serde_json::to_value(&e).unwrap();
            let score = value["score"].as_f64().unwrap();
            assert!((0.0..=1.0).contains(&score));
            assert_eq!(value["tier"], classify(score).label());
        }
    }

    // -- Assembler --

    #[test]
    fn away_block_then_home_block_in_roster_order() {
        let game = Game::new("Knicks", "Celtics", "7:30 PM");
        let entries = assemble(&game, &rosters(), &stats());
        let names: Vec<&str> = entries.iter().map(|e| e.name()).collect();
        assert_eq!(names, ["Brunson", "Hart", "Anunoby", "Tatum", "Brown"]);

        assert!(entries[..3].iter().all(|e| e.side() == Side::Away && e.team() == "Knicks"));
        assert!(entries[3..].iter().all(|e| e.side() == Side::Home && e.team() == "Celtics"));
    }

    #[test]
    fn missing_team_contributes_nothing() {
        let game = Game::new("Expansion", "Celtics", "");
        let entries = assemble(&game, &rosters(), &stats());
        assert_eq!(entries.len(), 2);
        assert!(entries.iter().all(|e| e.side() == Side::Home));
    }

    #[test]
    fn both_teams_missing_is_empty() {
        let game = Game::new("Nobody", "Noone", "");
        assert!(assemble(&game, &rosters(), &stats()).is_empty());
    }

    #[test]
    fn serializes_with_camel_case_summary() {
        let e = build_entry("Al", "Celtics", Side::Away, &StatsTable::default());
        let json = serde_json::to_value(&e).unwrap();
        assert_eq!(json["side"], "AWAY");
        assert_eq!(json["tier"], "RED");
        assert_eq!(json["statsSummary"], "No stats – placeholder tier");
    }
}

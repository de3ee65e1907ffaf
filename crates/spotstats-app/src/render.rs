// Plain-text rendering of the data summary, game list and prop board.

use std::fmt::Write;

use spotstats_core::dataset::Game;
use spotstats_props::{FilteredView, PropEntry, TierFilter};

use crate::loader::DatasetSummary;

/// "Knicks @ Celtics (7:30 PM)", or without the parenthetical when the
/// schedule has no time.
pub fn game_label(game: &Game) -> String {
    if game.time_label.trim().is_empty() {
        format!("{} @ {}", game.away_team, game.home_team)
    } else {
        format!(
            "{} @ {} ({})",
            game.away_team, game.home_team, game.time_label
        )
    }
}

/// Banner describing what was loaded for `date`.
pub fn render_summary(summary: &DatasetSummary, date: &str) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Data loaded for {date}");
    let _ = writeln!(
        out,
        "  Teams ({}): {}",
        summary.teams.len(),
        summary.teams.join(", ")
    );
    let _ = writeln!(out, "  Games: {}", summary.games_on_date.len());
    if summary.stats_loaded {
        let _ = writeln!(out, "  Stats: {} players", summary.stats_players);
    } else {
        let _ = writeln!(out, "  Stats: unavailable (placeholder tiers)");
    }
    out
}

/// Numbered list of the day's games.
pub fn render_games(games: &[Game]) -> String {
    if games.is_empty() {
        return "No games scheduled.\n".to_string();
    }
    let mut out = String::new();
    for (i, game) in games.iter().enumerate() {
        let _ = writeln!(out, "{:>3}. {}", i + 1, game_label(game));
    }
    out
}

/// The prop board for one game under `filter`.
pub fn render_board(game: &Game, view: &FilteredView<'_>, filter: TierFilter) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{} [{}]", game_label(game), filter);

    match view {
        FilteredView::NoMatches => {
            let _ = writeln!(out, "No props match the {filter} filter.");
        }
        FilteredView::Ranked(entries) => {
            let name_w = column_width(entries, "Player", |e| e.name());
            let team_w = column_width(entries, "Team", |e| e.team());
            let _ = writeln!(
                out,
                "{:>3}  {:<name_w$}  {:<team_w$}  {:<4}  {:>5}  {:<6}  Stats",
                "#", "Player", "Team", "Side", "Score", "Tier"
            );
            for (i, e) in entries.iter().enumerate() {
                let _ = writeln!(
                    out,
                    "{:>3}  {:<name_w$}  {:<team_w$}  {:<4}  {:>5.2}  {:<6}  {}",
                    i + 1,
                    e.name(),
                    e.team(),
                    e.side(),
                    e.score(),
                    e.tier(),
                    e.stats_summary()
                );
            }
        }
    }
    out
}

/// Ranked entries as a pretty-printed JSON array.
pub fn render_json(view: &FilteredView<'_>) -> serde_json::Result<String> {
    serde_json::to_string_pretty(view.entries())
}

/// The data summary as a pretty-printed JSON object.
pub fn render_summary_json(summary: &DatasetSummary) -> serde_json::Result<String> {
    serde_json::to_string_pretty(summary)
}

fn column_width<F>(entries: &[&PropEntry], header: &str, field: F) -> usize
where
    F: Fn(&PropEntry) -> &str,
{
    entries
        .iter()
        .map(|e| field(*e).chars().count())
        .chain(std::iter::once(header.len()))
        .max()
        .unwrap_or(0)
}

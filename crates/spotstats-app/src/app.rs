// One CLI invocation: resolve the date, load data, select a game, render.

use anyhow::Context;
use chrono::{DateTime, Utc};
use tracing::info;

use spotstats_core::config::Config;
use spotstats_props::TierFilter;

use crate::cli::Cli;
use crate::date::resolve_date_key;
use crate::loader::load_datasets;
use crate::render;
use crate::session::Session;
use crate::source::DatasetSource;

/// Run the command described by `cli` and return what should be printed.
///
/// `now` is injected so the "today" lookup is deterministic under test.
pub async fn run<S>(
    cli: &Cli,
    config: &Config,
    source: &S,
    now: DateTime<Utc>,
) -> anyhow::Result<String>
where
    S: DatasetSource + ?Sized,
{
    let date = resolve_date_key(cli.date.as_deref(), now, config.schedule.utc_offset_hours)
        .context("failed to resolve schedule date")?;
    info!("Using schedule date {}", date);

    let datasets = load_datasets(source, &config.sources)
        .await
        .context("failed to load datasets")?;

    let filter_name = cli
        .filter
        .as_deref()
        .unwrap_or(&config.display.default_filter);
    let filter = TierFilter::from_name(filter_name);

    let mut session = Session::new(datasets, date, filter);
    let summary = session.datasets().summary(session.date());

    if cli.json {
        if cli.list {
            let mut json =
                render::render_summary_json(&summary).context("failed to serialize summary")?;
            json.push('\n');
            return Ok(json);
        }
        if session.games().is_empty() {
            return Ok("[]\n".to_string());
        }
    }

    let mut out = String::new();
    if !cli.json {
        out.push_str(&render::render_summary(&summary, session.date()));
        out.push('\n');
    }

    if cli.list || session.games().is_empty() {
        out.push_str(&render::render_games(session.games()));
        return Ok(out);
    }

    let game = match cli.team.as_deref() {
        Some(team) => session.select_team(team),
        None => session.select_game(cli.game.unwrap_or(1)),
    }
    .context("failed to select a game")?
    .clone();

    let view = session.view();
    if cli.json {
        let mut json = render::render_json(&view).context("failed to serialize props")?;
        json.push('\n');
        return Ok(json);
    }

    out.push_str(&render::render_board(&game, &view, session.filter()));
    Ok(out)
}

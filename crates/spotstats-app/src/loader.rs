// Dataset loading: fetch rosters, schedule and stats concurrently.
//
// Rosters and schedule are required. Stats are best-effort: any failure is
// logged and replaced with an empty table so every player falls back to
// placeholder scoring.

use serde::Serialize;
use tracing::{info, warn};

use spotstats_core::config::SourcesConfig;
use spotstats_core::dataset::{
    parse_rosters, parse_schedule, parse_stats, DatasetError, Game, RosterTable, ScheduleTable,
    StatsTable,
};

use crate::source::{DatasetSource, FetchError};

// ---------------------------------------------------------------------------
// Error type
// ---------------------------------------------------------------------------

#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error(transparent)]
    Dataset(#[from] DatasetError),
}

// ---------------------------------------------------------------------------
// Loaded data
// ---------------------------------------------------------------------------

/// Everything the prop engine needs, resident in memory.
#[derive(Debug, Clone, Default)]
pub struct Datasets {
    pub rosters: RosterTable,
    pub schedule: ScheduleTable,
    pub stats: StatsTable,
    /// False when the stats dataset was not configured or failed to load.
    pub stats_loaded: bool,
}

/// Overview of what was loaded, for the "data loaded" banner.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DatasetSummary {
    pub teams: Vec<String>,
    pub games_on_date: Vec<Game>,
    pub stats_players: usize,
    pub stats_loaded: bool,
}

impl Datasets {
    /// Games scheduled on `date`; empty when the schedule has none.
    pub fn games_on(&self, date: &str) -> &[Game] {
        self.schedule.games_on(date)
    }

    pub fn summary(&self, date: &str) -> DatasetSummary {
        DatasetSummary {
            teams: self.rosters.teams().map(str::to_string).collect(),
            games_on_date: self.games_on(date).to_vec(),
            stats_players: self.stats.len(),
            stats_loaded: self.stats_loaded,
        }
    }
}

// ---------------------------------------------------------------------------
// Loading
// ---------------------------------------------------------------------------

/// Fetch and decode all datasets. All fetches run concurrently; only a
/// rosters or schedule failure is returned as an error.
pub async fn load_datasets<S>(source: &S, sources: &SourcesConfig) -> Result<Datasets, LoadError>
where
    S: DatasetSource + ?Sized,
{
    let stats_fetch = async {
        match sources.stats.as_deref() {
            Some(location) => Some(source.fetch(location).await),
            None => None,
        }
    };

    let (rosters_text, schedule_text, stats_text) = tokio::join!(
        source.fetch(&sources.rosters),
        source.fetch(&sources.schedule),
        stats_fetch,
    );

    let rosters = parse_rosters(&rosters_text?)?;
    let schedule = parse_schedule(&schedule_text?)?;
    info!(
        "Loaded {} rosters and {} schedule dates",
        rosters.len(),
        schedule.dates().count()
    );

    let (stats, stats_loaded) = match stats_text {
        None => {
            info!("No stats source configured; using placeholder scoring");
            (StatsTable::default(), false)
        }
        Some(Err(e)) => {
            warn!("Stats unavailable, using placeholder scoring: {}", e);
            (StatsTable::default(), false)
        }
        Some(Ok(text)) => match parse_stats(&text) {
            Ok(table) => {
                info!("Loaded stats for {} players", table.len());
                (table, true)
            }
            Err(e) => {
                warn!("Stats unreadable, using placeholder scoring: {}", e);
                (StatsTable::default(), false)
            }
        },
    };

    Ok(Datasets {
        rosters,
        schedule,
        stats,
        stats_loaded,
    })
}

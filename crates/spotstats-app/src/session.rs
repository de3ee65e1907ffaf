// Session state: the loaded datasets plus the user's current selections.
//
// The prop engine is stateless; this is where the chosen date, game, tier
// filter and the last assembled entry set live between renders.

use tracing::info;

use spotstats_core::dataset::Game;
use spotstats_props::{assemble, view, FilteredView, PropEntry, TierFilter};

use crate::loader::Datasets;

#[derive(Debug, thiserror::Error, PartialEq)]
pub enum SelectionError {
    #[error("no games scheduled on {date}")]
    NoGames { date: String },

    #[error("game {index} does not exist; {count} game(s) scheduled")]
    GameIndexOutOfRange { index: usize, count: usize },

    #[error("{team} is not playing on {date}")]
    TeamNotScheduled { team: String, date: String },
}

pub struct Session {
    datasets: Datasets,
    date: String,
    filter: TierFilter,
    selected: Option<usize>,
    entries: Vec<PropEntry>,
}

impl Session {
    pub fn new(datasets: Datasets, date: String, filter: TierFilter) -> Self {
        Self {
            datasets,
            date,
            filter,
            selected: None,
            entries: Vec::new(),
        }
    }

    pub fn date(&self) -> &str {
        &self.date
    }

    pub fn datasets(&self) -> &Datasets {
        &self.datasets
    }

    /// Games on the session date, in schedule order.
    pub fn games(&self) -> &[Game] {
        self.datasets.games_on(&self.date)
    }

    pub fn filter(&self) -> TierFilter {
        self.filter
    }

    /// Change the tier filter. The assembled entries are kept as-is.
    pub fn set_filter(&mut self, filter: TierFilter) {
        self.filter = filter;
    }

    /// The currently selected game, if any.
    pub fn selected_game(&self) -> Option<&Game> {
        self.selected.and_then(|i| self.games().get(i))
    }

    /// Entries assembled for the selected game, in away-then-home order.
    pub fn entries(&self) -> &[PropEntry] {
        &self.entries
    }

    /// Select a game by its 1-based position in the day's schedule and
    /// assemble its props.
    pub fn select_game(&mut self, number: usize) -> Result<&Game, SelectionError> {
        let count = self.games().len();
        if count == 0 {
            return Err(SelectionError::NoGames {
                date: self.date.clone(),
            });
        }
        if number == 0 || number > count {
            return Err(SelectionError::GameIndexOutOfRange {
                index: number,
                count,
            });
        }
        self.select_index(number - 1)
    }

    /// Select the first game on the session date that `team` plays in
    /// (case-insensitive, either side) and assemble its props.
    pub fn select_team(&mut self, team: &str) -> Result<&Game, SelectionError> {
        let Some(index) = self.games().iter().position(|g| g.involves(team)) else {
            return Err(SelectionError::TeamNotScheduled {
                team: team.to_string(),
                date: self.date.clone(),
            });
        };
        self.select_index(index)
    }

    /// Filtered, ranked view of the current entries.
    pub fn view(&self) -> FilteredView<'_> {
        view(&self.entries, self.filter)
    }

    fn select_index(&mut self, index: usize) -> Result<&Game, SelectionError> {
        let game = &self.datasets.schedule.games_on(&self.date)[index];
        self.entries = assemble(game, &self.datasets.rosters, &self.datasets.stats);
        self.selected = Some(index);
        info!(
            "Selected {} @ {}: {} props",
            game.away_team,
            game.home_team,
            self.entries.len()
        );
        Ok(game)
    }
}

// Team rosters: team name -> ordered player names.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::{parse_object, DatasetError};

const RESOURCE: &str = "rosters";

/// Mapping from team identifier to its players, in published order.
///
/// Keyed by a `BTreeMap` so team listings come out sorted and stable.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RosterTable {
    teams: BTreeMap<String, Vec<String>>,
}

impl RosterTable {
    pub fn new(teams: BTreeMap<String, Vec<String>>) -> Self {
        Self { teams }
    }

    /// Players for `team` in roster order. Unknown teams have no players.
    pub fn players(&self, team: &str) -> &[String] {
        self.teams.get(team).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Team names in sorted order.
    pub fn teams(&self) -> impl Iterator<Item = &str> {
        self.teams.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.teams.len()
    }

    pub fn is_empty(&self) -> bool {
        self.teams.is_empty()
    }
}

impl FromIterator<(String, Vec<String>)> for RosterTable {
    fn from_iter<I: IntoIterator<Item = (String, Vec<String>)>>(iter: I) -> Self {
        Self {
            teams: iter.into_iter().collect(),
        }
    }
}

/// Decode the rosters dataset: `{ "<team>": ["<player>", ...], ... }`.
pub fn parse_rosters(text: &str) -> Result<RosterTable, DatasetError> {
    let map = parse_object(RESOURCE, text)?;
    let mut teams = BTreeMap::new();
    for (team, players) in map {
        let players: Vec<String> = serde_json::from_value(players).map_err(|e| {
            DatasetError::Shape {
                resource: RESOURCE,
                message: format!("team '{team}' must map to an array of player names: {e}"),
            }
        })?;
        teams.insert(team, players);
    }
    Ok(RosterTable { teams })
}

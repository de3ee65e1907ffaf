// Input datasets: rosters, schedule, per-player stats.
//
// Each dataset arrives as a JSON object. Rosters and schedule are required
// and decode strictly; stats are best-effort and decode leniently.

pub mod roster;
pub mod schedule;
pub mod stats;

pub use roster::{parse_rosters, RosterTable};
pub use schedule::{parse_schedule, Game, ScheduleTable};
pub use stats::{parse_stats, StatsRecord, StatsTable};

use serde_json::{Map, Value};

// ---------------------------------------------------------------------------
// Error type
// ---------------------------------------------------------------------------

#[derive(Debug, thiserror::Error)]
pub enum DatasetError {
    #[error("invalid JSON in {resource} dataset: {source}")]
    Json {
        resource: &'static str,
        source: serde_json::Error,
    },

    #[error("unexpected shape in {resource} dataset: {message}")]
    Shape {
        resource: &'static str,
        message: String,
    },
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Parse `text` and require a JSON object at the top level.
fn parse_object(resource: &'static str, text: &str) -> Result<Map<String, Value>, DatasetError> {
    let value: Value =
        serde_json::from_str(text).map_err(|source| DatasetError::Json { resource, source })?;
    match value {
        Value::Object(map) => Ok(map),
        other => Err(DatasetError::Shape {
            resource,
            message: format!(
                "expected an object at the top level, found {}",
                json_kind(&other)
            ),
        }),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

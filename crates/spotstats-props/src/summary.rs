// One-line human-readable stats summary for a prop row.

use spotstats_core::dataset::StatsRecord;

/// Shown in place of a summary when the player has no stats record.
pub const NO_STATS_MARKER: &str = "No stats – placeholder tier";

const SEPARATOR: &str = " · ";

/// Summarize a stats record as e.g. `Min: 32 · USG: 28 · Hit: 65%`.
///
/// Fields are listed in fixed order (minutes, usage, hit rate) and only when
/// truthy: a field that is absent *or zero* is left out. `backToBack` is never
/// shown. A record with nothing to show yields an empty string.
///
/// Truthiness is checked on the decoded number, so a feed value of `"0"` is
/// dropped like `0`, and a non-numeric string (already decoded as absent) is
/// not shown at all.
pub fn summarize(stats: Option<&StatsRecord>) -> String {
    let Some(stats) = stats else {
        return NO_STATS_MARKER.to_string();
    };

    let mut parts: Vec<String> = Vec::with_capacity(3);
    if let Some(m) = truthy(stats.minutes) {
        parts.push(format!("Min: {m}"));
    }
    if let Some(u) = truthy(stats.usage) {
        parts.push(format!("USG: {u}"));
    }
    if let Some(h) = truthy(stats.hit_rate) {
        parts.push(format!("Hit: {}%", whole_percent(h)));
    }
    parts.join(SEPARATOR)
}

/// Zero and NaN count as "not there", same as an absent field.
fn truthy(value: Option<f64>) -> Option<f64> {
    value.filter(|v| *v != 0.0 && !v.is_nan())
}

/// Fraction -> whole percent, halves rounding up (0.125 -> 13).
fn whole_percent(fraction: f64) -> i64 {
    (fraction * 100.0 + 0.5).floor() as i64
}

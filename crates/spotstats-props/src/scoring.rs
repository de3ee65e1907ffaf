// Relevance scoring for a single player.
//
// Two paths:
// - stats available: base 0.5 plus fixed threshold adjustments, clamped to [0, 1]
// - no stats: a deterministic placeholder derived from the player's name

use spotstats_core::dataset::StatsRecord;

// ---------------------------------------------------------------------------
// Stats-path constants
// ---------------------------------------------------------------------------

const BASE_SCORE: f64 = 0.5;

const MINUTES_THRESHOLD: f64 = 30.0;
const MINUTES_BONUS: f64 = 0.10;

const USAGE_THRESHOLD: f64 = 25.0;
const USAGE_BONUS: f64 = 0.15;

const HIT_RATE_THRESHOLD: f64 = 0.6;
const HIT_RATE_BONUS: f64 = 0.10;

const BACK_TO_BACK_PENALTY: f64 = 0.10;

/// Placeholder scores indexed by `(first + last UTF-16 unit) % 3`.
const PLACEHOLDER_SCORES: [f64; 3] = [0.8, 0.6, 0.45];

/// Placeholder for a name with no characters at all.
const EMPTY_NAME_SCORE: f64 = 0.45;

// ---------------------------------------------------------------------------
// Scoring
// ---------------------------------------------------------------------------

/// Score a player in [0, 1]. `stats` of `None` selects the placeholder path.
pub fn score(name: &str, stats: Option<&StatsRecord>) -> f64 {
    match stats {
        Some(s) => stats_score(s),
        None => placeholder_score(name),
    }
}

/// Additive heuristic over the present stats fields. Adjustments apply in a
/// fixed order and are cumulative; absent fields never contribute.
pub fn stats_score(stats: &StatsRecord) -> f64 {
    let mut s = BASE_SCORE;

    if stats.minutes.is_some_and(|m| m >= MINUTES_THRESHOLD) {
        s += MINUTES_BONUS;
    }
    if stats.usage.is_some_and(|u| u >= USAGE_THRESHOLD) {
        s += USAGE_BONUS;
    }
    if stats.hit_rate.is_some_and(|h| h >= HIT_RATE_THRESHOLD) {
        s += HIT_RATE_BONUS;
    }
    if stats.back_to_back == Some(true) {
        s -= BACK_TO_BACK_PENALTY;
    }

    s.clamp(0.0, 1.0)
}

/// Name-derived stand-in score. Same name, same score, every time.
///
/// Sums the UTF-16 code units of the first and last character. A
/// one-character name counts that unit twice.
pub fn placeholder_score(name: &str) -> f64 {
    let (Some(first), Some(last)) = (name.encode_utf16().next(), name.encode_utf16().last())
    else {
        return EMPTY_NAME_SCORE;
    };
    let code = u32::from(first) + u32::from(last);
    PLACEHOLDER_SCORES[(code % 3) as usize]
}

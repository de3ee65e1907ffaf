// Tier classification: score -> GREEN / YELLOW / RED.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Scores at or above this are GREEN.
pub const GREEN_THRESHOLD: f64 = 0.75;
/// Scores at or above this (and below GREEN) are YELLOW.
pub const YELLOW_THRESHOLD: f64 = 0.55;

/// Coarse relevance bucket.
///
/// Variants are declared low to high so the derived ordering gives
/// `Green > Yellow > Red`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Tier {
    Red,
    Yellow,
    Green,
}

impl Tier {
    pub const ALL: [Tier; 3] = [Tier::Green, Tier::Yellow, Tier::Red];

    /// Return a human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            Tier::Green => "GREEN",
            Tier::Yellow => "YELLOW",
            Tier::Red => "RED",
        }
    }

    /// Parse a tier name, ignoring case and surrounding whitespace.
    pub fn from_name(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "green" => Some(Tier::Green),
            "yellow" => Some(Tier::Yellow),
            "red" => Some(Tier::Red),
            _ => None,
        }
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.label())
    }
}

/// Map a score to its tier. Lower bounds are inclusive, so exactly 0.75 is
/// GREEN and exactly 0.55 is YELLOW.
pub fn classify(score: f64) -> Tier {
    if score >= GREEN_THRESHOLD {
        Tier::Green
    } else if score >= YELLOW_THRESHOLD {
        Tier::Yellow
    } else {
        Tier::Red
    }
}

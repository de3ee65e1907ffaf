// Filter/sort: the ranked, tier-filtered view of an assembled prop set.

use serde::Serialize;
use std::fmt;

use crate::entry::PropEntry;
use crate::tier::Tier;

/// Which tiers to show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum TierFilter {
    #[default]
    All,
    Only(Tier),
}

impl TierFilter {
    /// Parse a filter name. Anything that is not a tier name, including
    /// garbage, selects `All`.
    pub fn from_name(s: &str) -> Self {
        match Tier::from_name(s) {
            Some(tier) => TierFilter::Only(tier),
            None => TierFilter::All,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            TierFilter::All => "ALL",
            TierFilter::Only(tier) => tier.label(),
        }
    }

    pub fn matches(&self, entry: &PropEntry) -> bool {
        match self {
            TierFilter::All => true,
            TierFilter::Only(tier) => entry.tier() == *tier,
        }
    }
}

impl fmt::Display for TierFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.label())
    }
}

/// Result of filtering. `NoMatches` is a normal outcome that callers render
/// as an empty state.
#[derive(Debug, Clone, PartialEq)]
pub enum FilteredView<'a> {
    Ranked(Vec<&'a PropEntry>),
    NoMatches,
}

impl<'a> FilteredView<'a> {
    /// Entries in rank order; empty for `NoMatches`.
    pub fn entries(&self) -> &[&'a PropEntry] {
        match self {
            FilteredView::Ranked(entries) => entries.as_slice(),
            FilteredView::NoMatches => &[],
        }
    }

    pub fn len(&self) -> usize {
        self.entries().len()
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, FilteredView::NoMatches)
    }
}

/// Keep the entries `filter` selects and rank them by score, highest first.
///
/// Entries with equal scores have no guaranteed relative order.
pub fn view<'a>(entries: &'a [PropEntry], filter: TierFilter) -> FilteredView<'a> {
    let mut kept: Vec<&PropEntry> = entries.iter().filter(|e| filter.matches(e)).collect();
    if kept.is_empty() {
        return FilteredView::NoMatches;
    }

    kept.sort_by(|a, b| {
        b.score()
            .partial_cmp(&a.score())
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    FilteredView::Ranked(kept)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entry::{build_entry, Side};
    use spotstats_core::dataset::{StatsRecord, StatsTable};

    /// Five players spanning all tiers:
    /// Star 0.85 GREEN, Solid 0.75 GREEN, Mid 0.6 YELLOW, Tired 0.4 RED, BB 0.8 GREEN (placeholder)
    fn sample() -> Vec<PropEntry> {
        let rec = |m: f64, u: f64, h: f64, b: bool| StatsRecord {
            minutes: Some(m),
            usage: Some(u),
            hit_rate: Some(h),
            back_to_back: Some(b),
        };
        let stats: StatsTable = [
            ("Star".to_string(), rec(36.0, 30.0, 0.7, false)),
            ("Solid".to_string(), rec(34.0, 26.0, 0.2, false)),
            ("Mid".to_string(), rec(31.0, 10.0, 0.2, false)),
            ("Tired".to_string(), rec(20.0, 10.0, 0.2, true)),
        ]
        .into_iter()
        .collect();

        vec![
            build_entry("Tired", "A", Side::Away, &stats),
            build_entry("Mid", "A", Side::Away, &stats),
            build_entry("Star", "H", Side::Home, &stats),
            build_entry("BB", "H", Side::Home, &stats),
            build_entry("Solid", "H", Side::Home, &stats),
        ]
    }

    fn names<'a>(v: &FilteredView<'a>) -> Vec<&'a str> {
        v.entries().iter().map(|e| e.name()).collect()
    }

    // -- Filter parsing --

    #[test]
    fn filter_names_parse() {
        assert_eq!(TierFilter::from_name("green"), TierFilter::Only(Tier::Green));
        assert_eq!(TierFilter::from_name("YELLOW"), TierFilter::Only(Tier::Yellow));
        assert_eq!(TierFilter::from_name("red"), TierFilter::Only(Tier::Red));
        assert_eq!(TierFilter::from_name("all"), TierFilter::All);
    }

    #[test]
    fn unknown_filter_is_all() {
        assert_eq!(TierFilter::from_name("purple"), TierFilter::All);
        assert_eq!(TierFilter::from_name(""), TierFilter::All);
    }

    // -- Filtering and ranking --

    #[test]
    fn all_keeps_everything_ranked() {
        let entries = sample();
        let v = view(&entries, TierFilter::All);
        assert_eq!(v.len(), entries.len());
        assert_eq!(names(&v), ["Star", "BB", "Solid", "Mid", "Tired"]);
    }

    #[test]
    fn unknown_filter_keeps_everything() {
        let entries = sample();
        let v = view(&entries, TierFilter::from_name("bogus"));
        assert_eq!(v.len(), entries.len());
    }

    #[test]
    fn green_only() {
        let entries = sample();
        let v = view(&entries, TierFilter::Only(Tier::Green));
        assert_eq!(names(&v), ["Star", "BB", "Solid"]);
        assert!(v.entries().iter().all(|e| e.tier() == Tier::Green));
    }

    #[test]
    fn each_tier_filter_keeps_only_that_tier() {
        let entries = sample();
        for tier in Tier::ALL {
            let v = view(&entries, TierFilter::Only(tier));
            assert!(v.entries().iter().all(|e| e.tier() == tier));
            let expected = entries.iter().filter(|e| e.tier() == tier).count();
            assert_eq!(v.len(), expected);
        }
    }

    #[test]
    fn ranked_scores_never_increase() {
        let entries = sample();
        let v = view(&entries, TierFilter::All);
        for pair in v.entries().windows(2) {
            assert!(pair[0].score() >= pair[1].score());
        }
    }

    #[test]
    fn no_matching_tier_is_explicit_empty_state() {
        let entries: Vec<PropEntry> = sample()
            .into_iter()
            .filter(|e| e.tier() != Tier::Red)
            .collect();
        let v = view(&entries, TierFilter::Only(Tier::Red));
        assert_eq!(v, FilteredView::NoMatches);
        assert!(v.is_empty());
        assert!(v.entries().is_empty());
    }

    #[test]
    fn empty_input_is_no_matches() {
        assert_eq!(view(&[], TierFilter::All), FilteredView::NoMatches);
    }

    #[test]
    fn input_is_left_untouched() {
        let entries = sample();
        let before = entries.clone();
        let _ = view(&entries, TierFilter::Only(Tier::Green));
        assert_eq!(entries, before);
    }
}

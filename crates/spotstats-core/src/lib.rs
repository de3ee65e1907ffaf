// Shared foundation: configuration loading and the three input datasets
// (rosters, schedule, per-player stats) with their JSON decoding.

pub mod config;
pub mod dataset;

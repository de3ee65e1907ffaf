// Command-line arguments.

use std::path::PathBuf;

use clap::Parser;

#[derive(Debug, Clone, Default, Parser)]
#[command(name = "spotstats")]
#[command(about = "Ranked, tiered player props for a scheduled game")]
#[command(version)]
pub struct Cli {
    /// Directory holding config/ and defaults/ (defaults to the current directory)
    #[arg(long, value_name = "DIR")]
    pub config_dir: Option<PathBuf>,

    /// Schedule date to use instead of today
    #[arg(long, value_name = "YYYY-MM-DD")]
    pub date: Option<String>,

    /// Game number from the day's list (starting at 1)
    #[arg(long, conflicts_with = "team")]
    pub game: Option<usize>,

    /// Pick the game this team plays in
    #[arg(long)]
    pub team: Option<String>,

    /// Tier filter: all, green, yellow or red (anything else shows all)
    #[arg(long)]
    pub filter: Option<String>,

    /// Only print the data summary and the day's games
    #[arg(long)]
    pub list: bool,

    /// Print JSON instead of text (the ranked board, or the summary with --list)
    #[arg(long)]
    pub json: bool,
}

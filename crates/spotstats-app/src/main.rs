// spotstats entry point.
//
// Startup sequence:
// 1. Parse arguments
// 2. Initialize tracing (log to file, stdout is for the board)
// 3. Load config (seeding config/ from defaults/ on first run)
// 4. Build the dataset source
// 5. Run the command and print its output

use std::path::Path;
use std::time::Duration;

use anyhow::Context;
use clap::Parser;
use tracing::info;

use spotstats_app::app;
use spotstats_app::cli::Cli;
use spotstats_app::source::RoutedSource;
use spotstats_core::config;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let base_dir = match &cli.config_dir {
        Some(dir) => dir.clone(),
        None => std::env::current_dir().context("failed to read current directory")?,
    };

    init_tracing(&base_dir)?;
    info!("spotstats starting up");

    let config = config::load_config_in(&base_dir).context("failed to load configuration")?;
    info!(
        "Config loaded: rosters={}, schedule={}, stats={}",
        config.sources.rosters,
        config.sources.schedule,
        config.sources.stats.as_deref().unwrap_or("<none>")
    );

    let source = RoutedSource::new(
        Duration::from_secs(config.fetch.timeout_secs),
        &config.base_dir,
    )
    .context("failed to set up dataset source")?;

    let output = app::run(&cli, &config, &source, chrono::Utc::now()).await?;
    print!("{output}");

    info!("spotstats finished");
    Ok(())
}

/// Initialize tracing to log to a file (not the terminal, which shows the board).
fn init_tracing(base_dir: &Path) -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::EnvFilter;

    let log_dir = base_dir.join("logs");
    std::fs::create_dir_all(&log_dir)?;

    let log_file = std::fs::File::create(log_dir.join("spotstats.log"))?;

    let subscriber = fmt::Subscriber::builder()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("spotstats=info,warn")),
        )
        .with_writer(log_file)
        .with_ansi(false)
        .with_target(true)
        .with_line_number(true)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .context("failed to set tracing subscriber")?;

    Ok(())
}

// Configuration loading and parsing (spotstats.toml).

use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::info;

/// Name of the single configuration file inside `config/`.
pub const CONFIG_FILE: &str = "spotstats.toml";

// ---------------------------------------------------------------------------
// Error types
// ---------------------------------------------------------------------------

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config file not found: {path}")]
    FileNotFound { path: PathBuf },

    #[error("failed to parse config file {path}: {source}")]
    ParseError {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("validation error for field `{field}`: {message}")]
    ValidationError { field: String, message: String },

    #[error("failed to initialize config from defaults: {message}")]
    DefaultsCopyError { message: String },
}

// ---------------------------------------------------------------------------
// Top-level assembled Config
// ---------------------------------------------------------------------------

#[derive(Debug, Clone)]
pub struct Config {
    pub sources: SourcesConfig,
    pub fetch: FetchConfig,
    pub schedule: ScheduleConfig,
    pub display: DisplayConfig,
    /// Directory the config was loaded from. Relative file sources resolve
    /// against it.
    pub base_dir: PathBuf,
}

// ---------------------------------------------------------------------------
// spotstats.toml structs
// ---------------------------------------------------------------------------

/// Raw deserialization target for the entire spotstats.toml file.
#[derive(Debug, Clone, Deserialize)]
struct ConfigFile {
    sources: SourcesConfig,
    #[serde(default)]
    fetch: FetchConfig,
    #[serde(default)]
    schedule: ScheduleConfig,
    #[serde(default)]
    display: DisplayConfig,
}

/// Where each dataset lives. A location is either an `http(s)://` URL or a
/// file path.
#[derive(Debug, Clone, Deserialize)]
pub struct SourcesConfig {
    pub rosters: String,
    pub schedule: String,
    /// Optional. When omitted no stats fetch is attempted and every player
    /// is scored on the placeholder path.
    #[serde(default)]
    pub stats: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct FetchConfig {
    pub timeout_secs: u64,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self { timeout_secs: 10 }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ScheduleConfig {
    /// Offset from UTC of the clock used to decide what "today" is.
    pub utc_offset_hours: i32,
}

impl Default for ScheduleConfig {
    fn default() -> Self {
        Self {
            utc_offset_hours: -5,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct DisplayConfig {
    /// Tier filter applied when none is given on the command line. Unknown
    /// values behave like "all".
    pub default_filter: String,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            default_filter: "all".into(),
        }
    }
}

// ---------------------------------------------------------------------------
// Loading logic
// ---------------------------------------------------------------------------

/// Load and validate configuration from `config/spotstats.toml` relative to
/// the given `base_dir`.
///
/// This is the lower-level loading primitive that does not auto-copy defaults.
/// Prefer `load_config()` which handles default initialization automatically.
pub fn load_config_from(base_dir: &Path) -> Result<Config, ConfigError> {
    let path = base_dir.join("config").join(CONFIG_FILE);
    let text = read_file(&path)?;
    let file: ConfigFile = toml::from_str(&text).map_err(|e| ConfigError::ParseError {
        path: path.clone(),
        source: e,
    })?;

    let config = Config {
        sources: file.sources,
        fetch: file.fetch,
        schedule: file.schedule,
        display: file.display,
        base_dir: base_dir.to_path_buf(),
    };

    validate(&config)?;

    Ok(config)
}

/// Seed `config/spotstats.toml` from `defaults/spotstats.toml` on first run.
///
/// Returns the path written, or `None` when a config file is already in
/// place. An existing file is never overwritten.
pub fn seed_config_file(base_dir: &Path) -> Result<Option<PathBuf>, ConfigError> {
    let target = base_dir.join("config").join(CONFIG_FILE);
    if target.is_file() {
        return Ok(None);
    }

    let template = base_dir.join("defaults").join(CONFIG_FILE);
    if !template.is_file() {
        return Err(ConfigError::DefaultsCopyError {
            message: format!(
                "no config/{CONFIG_FILE} or defaults/{CONFIG_FILE} under {}",
                base_dir.display()
            ),
        });
    }

    let seed_err = |e: std::io::Error| ConfigError::DefaultsCopyError {
        message: format!("failed to seed {}: {e}", target.display()),
    };
    if let Some(dir) = target.parent() {
        std::fs::create_dir_all(dir).map_err(seed_err)?;
    }
    std::fs::copy(&template, &target).map_err(seed_err)?;

    info!("Seeded {} from {}", target.display(), template.display());
    Ok(Some(target))
}

/// Convenience wrapper: loads config relative to the current working directory.
/// Ensures default config files are copied before loading.
pub fn load_config() -> Result<Config, ConfigError> {
    let cwd = std::env::current_dir().map_err(|_| ConfigError::FileNotFound {
        path: PathBuf::from("."),
    })?;
    load_config_in(&cwd)
}

/// Same as `load_config()` but rooted at an explicit directory.
pub fn load_config_in(base_dir: &Path) -> Result<Config, ConfigError> {
    seed_config_file(base_dir)?;
    load_config_from(base_dir)
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn read_file(path: &Path) -> Result<String, ConfigError> {
    std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
        path: path.to_path_buf(),
    })
}

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

fn validate(config: &Config) -> Result<(), ConfigError> {
    let required: &[(&str, &str)] = &[
        ("sources.rosters", &config.sources.rosters),
        ("sources.schedule", &config.sources.schedule),
    ];
    for (name, val) in required {
        if val.trim().is_empty() {
            return Err(ConfigError::ValidationError {
                field: name.to_string(),
                message: "must not be empty".into(),
            });
        }
    }

    if config
        .sources
        .stats
        .as_deref()
        .is_some_and(|s| s.trim().is_empty())
    {
        return Err(ConfigError::ValidationError {
            field: "sources.stats".into(),
            message: "must not be empty when present; omit the key to disable stats".into(),
        });
    }

    if config.fetch.timeout_secs == 0 {
        return Err(ConfigError::ValidationError {
            field: "fetch.timeout_secs".into(),
            message: "must be greater than 0".into(),
        });
    }

    let offset = config.schedule.utc_offset_hours;
    if !(-12..=14).contains(&offset) {
        return Err(ConfigError::ValidationError {
            field: "schedule.utc_offset_hours".into(),
            message: format!("must be between -12 and 14 inclusive, got {offset}"),
        });
    }

    Ok(())
}

// ---------------------------------------------------------------------------
// Unit tests
// ---------------------------------------------------------------------------

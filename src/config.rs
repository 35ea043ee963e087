use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;
use tracing::debug;

/// Configuration file read when `--config` is not given.
pub const DEFAULT_CONFIG: &str = "almanac.toml";

/// Top-level almanac configuration.
#[derive(Debug, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct AlmanacConfig {
    /// Calendar settings.
    #[serde(default)]
    pub calendar: CalendarToml,

    /// Event sources.
    #[serde(default)]
    pub sources: SourcesToml,

    /// Output settings.
    #[serde(default)]
    pub output: OutputToml,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CalendarToml {
    #[serde(default)]
    pub year: Option<i32>,
    #[serde(default = "default_locale")]
    pub locale: String,
    #[serde(default)]
    pub weekday_cutoff: usize,
}

impl Default for CalendarToml {
    fn default() -> Self {
        Self {
            year: None,
            locale: default_locale(),
            weekday_cutoff: 0,
        }
    }
}

fn default_locale() -> String {
    "en_US".to_string()
}

#[derive(Debug, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct SourcesToml {
    pub events: Option<PathBuf>,
    pub ics: Option<PathBuf>,
}

#[derive(Debug, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct OutputToml {
    pub path: Option<PathBuf>,
    #[serde(default)]
    pub keep_scratch: bool,
}

/// Loads the configuration.
///
/// An explicit `path` must exist. Without one, [`DEFAULT_CONFIG`] is read
/// when present and defaults are used otherwise.
pub fn load(path: Option<&Path>) -> Result<AlmanacConfig> {
    let path = match path {
        Some(p) => p,
        None if Path::new(DEFAULT_CONFIG).is_file() => Path::new(DEFAULT_CONFIG),
        None => {
            debug!("no configuration file, using defaults");
            return Ok(AlmanacConfig::default());
        }
    };
    let toml_str = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config file: {}", path.display()))?;
    parse(&toml_str).with_context(|| format!("failed to parse TOML config: {}", path.display()))
}

/// Parses configuration text.
pub fn parse(toml_str: &str) -> Result<AlmanacConfig> {
    Ok(toml::from_str(toml_str)?)
}

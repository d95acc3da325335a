//! User configuration.
//!
//! Stored as TOML at `<config dir>/threadreplay/config.toml`. Every field
//! has a default, so a missing file or a partial file is fine.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};

use crate::timeline::window::{
    choice_list, is_speed_choice, is_window_choice, DEFAULT_MIN_EXPOSURE, SPEED_CHOICES,
    WINDOW_CHOICES_MINUTES,
};
use crate::timeline::ReplayOptions;

/// Environment variable pointing at an alternative config file.
pub const CONFIG_ENV: &str = "THREADREPLAY_CONFIG";

/// Replay settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReplayConfig {
    /// Activity window in minutes. Unset means "pick from thread size".
    #[serde(skip_serializing_if = "Option::is_none")]
    pub window_minutes: Option<u32>,
    /// Frames a node must be shown before it may disappear. Must not exceed
    /// the window length in minutes.
    pub min_exposure: u32,
    /// Playback speed multiplier.
    pub speed: f64,
}

impl Default for ReplayConfig {
    fn default() -> Self {
        Self {
            window_minutes: None,
            min_exposure: DEFAULT_MIN_EXPOSURE,
            speed: 1.0,
        }
    }
}

/// Text listing settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Show the author column.
    pub show_author: bool,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self { show_author: true }
    }
}

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub replay: ReplayConfig,
    pub display: DisplayConfig,
}

impl Config {
    /// Path of the config file. `THREADREPLAY_CONFIG` overrides it.
    pub fn config_path() -> Result<PathBuf> {
        if let Some(path) = std::env::var_os(CONFIG_ENV) {
            return Ok(PathBuf::from(path));
        }
        let dir = dirs::config_dir().context("Could not determine config directory")?;
        Ok(dir.join("threadreplay").join("config.toml"))
    }

    /// Load the config file, or defaults if it does not exist.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    /// Load from an explicit path, or defaults if it does not exist.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;
        Self::parse(&content).with_context(|| format!("Invalid config file: {:?}", path))
    }

    /// Parse and check config TOML.
    pub fn parse(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Check values against the offered choices.
    pub fn validate(&self) -> Result<()> {
        let replay = &self.replay;
        if let Some(window) = replay.window_minutes {
            if !is_window_choice(window) {
                bail!(
                    "replay.window_minutes = {} is not one of {}",
                    window,
                    choice_list(WINDOW_CHOICES_MINUTES)
                );
            }
        }
        if !is_speed_choice(replay.speed) {
            bail!(
                "replay.speed = {} is not one of {}",
                replay.speed,
                choice_list(SPEED_CHOICES)
            );
        }
        if replay.min_exposure == 0 {
            bail!("replay.min_exposure must be at least 1");
        }
        Ok(())
    }

    /// Serialize as pretty TOML.
    pub fn to_toml(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Replay options for a thread of `node_count` items. An explicit
    /// window wins over the configured one, which wins over the size-based
    /// default.
    ///
    /// Fails when the exposure count exceeds the resulting window length.
    pub fn replay_options(
        &self,
        node_count: usize,
        window_override: Option<u32>,
    ) -> Result<ReplayOptions> {
        let mut options = ReplayOptions::for_thread(node_count);
        if let Some(window) = window_override.or(self.replay.window_minutes) {
            options.window_minutes = window;
        }
        options.min_exposure = self.replay.min_exposure;

        if options.min_exposure > options.window_minutes {
            bail!(
                "replay.min_exposure = {} exceeds the {}-minute window; lower it or use a longer --window",
                options.min_exposure,
                options.window_minutes
            );
        }
        Ok(options)
    }
}

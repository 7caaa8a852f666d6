//! Configuration file parser for ~/.config/feedsim/config.toml.
//!
//! The config file is optional: a missing file yields `Config::default()`.
//! Unknown keys are silently ignored by serde (with `deny_unknown_fields` off),
//! though we log a warning when the file contains potential typos.
use crate::counter::DEFAULT_READ_DELAY;
use crate::feed::{DEFAULT_CATEGORIES, DEFAULT_EMIT_INTERVAL, DEFAULT_WILDCARD, FRESHNESS_SUFFIX};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

// ============================================================================
// Error Types
// ============================================================================

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid TOML in config file: {0}")]
    Parse(#[from] toml::de::Error),

    /// Config file exceeds maximum allowed size.
    #[error("Config file too large: {0}")]
    TooLarge(String),

    /// A value parsed but is out of range.
    #[error("Invalid config value: {0}")]
    Invalid(String),
}

// ============================================================================
// Configuration Structs
// ============================================================================

/// Top-level application configuration.
///
/// All fields use `#[serde(default)]` so any subset of keys can be specified.
/// Missing keys fall back to `Default::default()`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Theme variant name ("dark" or "light").
    pub theme: String,

    /// Milliseconds between two generated items.
    pub emit_interval_ms: u64,

    /// Milliseconds between "mark as read" and the counter reflecting it.
    pub read_delay_ms: u64,

    /// The fixed category set, in display order.
    pub categories: Vec<String>,

    /// Selector label that disables filtering.
    pub wildcard: String,

    /// Phrase appended to every headline.
    pub freshness_suffix: String,

    /// Seed for the category picker. Unset = fresh entropy per subscription.
    pub seed: Option<u64>,

    /// Selector active when the UI starts.
    pub initial_category: String,

    /// How many recent headlines the UI keeps on screen.
    pub history_size: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            theme: "dark".to_string(),
            emit_interval_ms: DEFAULT_EMIT_INTERVAL.as_millis() as u64,
            read_delay_ms: DEFAULT_READ_DELAY.as_millis() as u64,
            categories: DEFAULT_CATEGORIES.iter().map(|c| c.to_string()).collect(),
            wildcard: DEFAULT_WILDCARD.to_string(),
            freshness_suffix: FRESHNESS_SUFFIX.to_string(),
            seed: None,
            initial_category: DEFAULT_WILDCARD.to_string(),
            history_size: 8,
        }
    }
}

impl Config {
    /// Maximum config file size (1 MB).
    const MAX_FILE_SIZE: u64 = 1_048_576;

    /// Upper bound on retained headlines.
    pub const MAX_HISTORY_SIZE: usize = 1000;

    const KNOWN_KEYS: [&'static str; 9] = [
        "theme",
        "emit_interval_ms",
        "read_delay_ms",
        "categories",
        "wildcard",
        "freshness_suffix",
        "seed",
        "initial_category",
        "history_size",
    ];

    /// Default config location: `$HOME/.config/feedsim/config.toml`.
    pub fn default_path() -> Option<PathBuf> {
        let home = std::env::var_os("HOME")?;
        Some(
            PathBuf::from(home)
                .join(".config")
                .join("feedsim")
                .join("config.toml"),
        )
    }

    /// Load configuration from a TOML file.
    ///
    /// - Missing file → `Ok(Config::default())`
    /// - Empty file → `Ok(Config::default())`
    /// - Invalid TOML → `Err(ConfigError::Parse)` with line number info
    /// - Unknown keys → silently accepted (serde default behavior), logged as warning
    /// - Out-of-range values → `Err(ConfigError::Invalid)`
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        // Check file size before reading to avoid slurping a huge or corrupted file.
        match std::fs::metadata(path) {
            Ok(meta) if meta.len() > Self::MAX_FILE_SIZE => {
                return Err(ConfigError::TooLarge(format!(
                    "Config file is {} bytes (max {} bytes)",
                    meta.len(),
                    Self::MAX_FILE_SIZE
                )));
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "No config file found, using defaults");
                return Ok(Self::default());
            }
            Err(e) => return Err(ConfigError::Io(e)),
            Ok(_) => {}
        }

        let content = match std::fs::read_to_string(path) {
            Ok(c) => c,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                // Race condition: file deleted between metadata and read
                tracing::debug!(path = %path.display(), "Config file disappeared, using defaults");
                return Ok(Self::default());
            }
            Err(e) => return Err(ConfigError::Io(e)),
        };

        let config = Self::parse(&content)?;
        tracing::info!(
            path = %path.display(),
            theme = %config.theme,
            interval_ms = config.emit_interval_ms,
            categories = config.categories.len(),
            "Loaded configuration"
        );
        Ok(config)
    }

    /// Parse and validate TOML text. Blank input yields the defaults.
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        if content.trim().is_empty() {
            tracing::debug!("Config file is empty, using defaults");
            return Ok(Self::default());
        }

        // Parse the TOML content first as a raw table to detect unknown keys
        if let Ok(raw) = content.parse::<toml::Table>() {
            for key in raw.keys() {
                if !Self::KNOWN_KEYS.contains(&key.as_str()) {
                    tracing::warn!(key = %key, "Unknown key in config file, ignoring");
                }
            }
        }

        let config: Config = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values the session cannot run with.
    ///
    /// Category-set rules (non-empty, unique, no wildcard collision) are
    /// enforced when the catalog is built.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.emit_interval_ms == 0 {
            return Err(ConfigError::Invalid(
                "emit_interval_ms must be greater than 0".to_string(),
            ));
        }
        if self.history_size == 0 || self.history_size > Self::MAX_HISTORY_SIZE {
            return Err(ConfigError::Invalid(format!(
                "history_size must be between 1 and {}",
                Self::MAX_HISTORY_SIZE
            )));
        }
        if self.freshness_suffix.trim().is_empty() {
            return Err(ConfigError::Invalid(
                "freshness_suffix must not be blank".to_string(),
            ));
        }
        if self.wildcard.trim().is_empty() {
            return Err(ConfigError::Invalid("wildcard must not be blank".to_string()));
        }
        Ok(())
    }

    pub fn emit_interval(&self) -> Duration {
        Duration::from_millis(self.emit_interval_ms)
    }

    pub fn read_delay(&self) -> Duration {
        Duration::from_millis(self.read_delay_ms)
    }
}

// ============================================================================
// Tests
// ============================================================================

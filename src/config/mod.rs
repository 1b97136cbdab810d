//! Configuration for the portfolio
//!
//! Configuration is loaded in order of precedence:
//! 1. Environment variables (highest priority)
//! 2. Config file (~/.config/folio/config.toml)
//! 3. Built-in defaults (lowest priority)

use serde::Deserialize;
use std::fmt;
use std::path::{Path, PathBuf};

// ─────────────────────────────────────────────────────────────────────────────
// Submodules
// ─────────────────────────────────────────────────────────────────────────────

mod observability;
mod relay;
mod serialization;


// ─────────────────────────────────────────────────────────────────────────────
// Re-exports
// ─────────────────────────────────────────────────────────────────────────────

pub use observability::{FileLogging, LogRotation, LoggingConfig};
pub use relay::{FileRelay, RelayConfig, RelayEnv, DEFAULT_ENDPOINT};

// ─────────────────────────────────────────────────────────────────────────────
// Constants
// ─────────────────────────────────────────────────────────────────────────────

/// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default theme name
pub const DEFAULT_THEME: &str = "neon";

// ─────────────────────────────────────────────────────────────────────────────
// Errors
// ─────────────────────────────────────────────────────────────────────────────

/// Config file could not be used
#[derive(Debug)]
pub enum ConfigError {
    /// File exists but cannot be read (permissions, etc.)
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    /// File was read but is not valid TOML for this schema
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Read { path, source } => {
                write!(f, "cannot read config file {}: {}", path.display(), source)
            }
            Self::Parse { path, source } => {
                write!(f, "invalid config file {}: {}", path.display(), source)
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Read { source, .. } => Some(source),
            Self::Parse { source, .. } => Some(source),
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Application Configuration
// ─────────────────────────────────────────────────────────────────────────────

/// Application configuration
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Theme name: "neon", "midnight", "paper"
    pub theme: String,

    /// Rows added to the scroll offset before resolving the active section.
    /// `None` uses the pinned nav bar height.
    pub scroll_offset: Option<usize>,

    /// Draw the drifting particle background
    pub particles: bool,

    /// Whether to run the TUI (false prints the page to stdout)
    pub enable_tui: bool,

    /// Contact form relay credentials
    pub relay: RelayConfig,

    /// Logging configuration
    pub logging: LoggingConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            theme: DEFAULT_THEME.to_string(),
            scroll_offset: None,
            particles: true,
            enable_tui: true,
            relay: RelayConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// File Configuration (deserialization layer)
// ─────────────────────────────────────────────────────────────────────────────

/// Config file structure
#[derive(Debug, Deserialize, Default)]
pub(crate) struct FileConfig {
    pub theme: Option<String>,
    pub scroll_offset: Option<usize>,
    pub particles: Option<bool>,

    /// Optional [relay] section
    pub relay: Option<FileRelay>,

    /// Optional [logging] section
    pub logging: Option<FileLogging>,
}

// ─────────────────────────────────────────────────────────────────────────────
// Configuration Loading
// ─────────────────────────────────────────────────────────────────────────────

impl Config {
    /// Get the config file path: ~/.config/folio/config.toml
    /// Uses Unix-style ~/.config on all platforms for consistency
    pub fn config_path() -> Option<PathBuf> {
        dirs::home_dir().map(|p| p.join(".config").join("folio").join("config.toml"))
    }

    /// Create config file with defaults if it doesn't exist
    /// Called during startup to help users discover configuration options
    pub fn ensure_config_exists() {
        let Some(path) = Self::config_path() else {
            return;
        };

        if path.exists() {
            return;
        }

        if let Some(parent) = path.parent() {
            if std::fs::create_dir_all(parent).is_err() {
                return; // Config is optional
            }
        }

        let _ = std::fs::write(&path, Self::default().to_toml());
    }

    /// Overwrite the config file with defaults
    pub fn reset() -> anyhow::Result<PathBuf> {
        use anyhow::Context;

        let path = Self::config_path().context("could not determine home directory")?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("failed to create {}", parent.display()))?;
        }
        std::fs::write(&path, Self::default().to_toml())
            .with_context(|| format!("failed to write {}", path.display()))?;
        Ok(path)
    }

    /// Read and parse a config file. A missing file yields defaults.
    pub(crate) fn load_file_config(path: &Path) -> Result<FileConfig, ConfigError> {
        match std::fs::read_to_string(path) {
            Ok(contents) => toml::from_str(&contents).map_err(|source| ConfigError::Parse {
                path: path.to_path_buf(),
                source,
            }),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(FileConfig::default()),
            Err(source) => Err(ConfigError::Read {
                path: path.to_path_buf(),
                source,
            }),
        }
    }

    /// Load configuration: env vars > file > defaults
    pub fn from_env() -> Result<Self, ConfigError> {
        let file = match Self::config_path() {
            Some(path) => Self::load_file_config(&path)?,
            None => FileConfig::default(),
        };
        Ok(Self::merge(file, |key| std::env::var(key).ok()))
    }

    /// Combine a parsed file with an environment lookup
    pub(crate) fn merge(file: FileConfig, env: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        // Theme: env > file > default
        let theme = env("FOLIO_THEME").or(file.theme).unwrap_or(defaults.theme);

        // TUI toggle: env only (runtime flag)
        let enable_tui = env("FOLIO_NO_TUI")
            .map(|v| v != "1" && v.to_lowercase() != "true")
            .unwrap_or(true);

        let relay_env = RelayEnv {
            service_id: env("FOLIO_RELAY_SERVICE_ID"),
            template_id: env("FOLIO_RELAY_TEMPLATE_ID"),
            public_key: env("FOLIO_RELAY_PUBLIC_KEY"),
            endpoint: env("FOLIO_RELAY_ENDPOINT"),
        };

        Self {
            theme,
            scroll_offset: file.scroll_offset,
            particles: file.particles.unwrap_or(defaults.particles),
            enable_tui,
            relay: RelayConfig::from_file(file.relay, relay_env),
            logging: LoggingConfig::from_file(file.logging),
        }
    }
}

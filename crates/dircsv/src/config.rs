//! Configuration handling for dircsv.

use anyhow::{Context, Result};
use dircsv_core::SortOrder;
use dircsv_scan::ScanOptions;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Name of the config file inside the config directory.
const CONFIG_FILE: &str = "config.toml";

/// Main configuration structure.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct Config {
    /// Scan configuration
    #[serde(default)]
    pub scan: ScanConfig,

    /// Output configuration
    #[serde(default)]
    pub output: OutputConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Scan-related configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ScanConfig {
    /// Follow symbolic links while walking
    #[serde(default = "default_follow_links")]
    pub follow_links: bool,

    /// Record order: "discovery" or "path"
    #[serde(default)]
    pub order: SortOrder,
}

fn default_follow_links() -> bool {
    true
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            follow_links: default_follow_links(),
            order: SortOrder::default(),
        }
    }
}

impl ScanConfig {
    pub fn options(&self) -> ScanOptions {
        ScanOptions {
            follow_links: self.follow_links,
            order: self.order,
        }
    }
}

/// Output-related configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct OutputConfig {
    /// Destination used when neither `-o` nor a remembered file is given
    #[serde(default = "default_output_file")]
    pub default_file: PathBuf,
}

fn default_output_file() -> PathBuf {
    PathBuf::from("scanresult.csv")
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            default_file: default_output_file(),
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LoggingConfig {
    /// Log level
    #[serde(default = "default_log_level")]
    pub level: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

impl Config {
    /// Load from the default location. A missing file yields the defaults.
    pub fn load() -> Result<Self> {
        Self::load_from(Self::config_path())
    }

    /// Load from `path`, or the defaults when `path` is `None` or absent.
    pub fn load_from(path: Option<PathBuf>) -> Result<Self> {
        match path {
            Some(path) if path.exists() => Self::read(&path),
            _ => Ok(Self::default()),
        }
    }

    fn read(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        toml::from_str(&raw).with_context(|| format!("Invalid config file {}", path.display()))
    }

    /// Default config file path.
    pub fn config_path() -> Option<PathBuf> {
        config_dir().map(|dir| dir.join(CONFIG_FILE))
    }

    /// Commented sample configuration.
    pub fn sample_toml() -> &'static str {
        r#"# dircsv configuration

[scan]
# Follow symbolic links; loops are reported and skipped
follow_links = true
# "discovery" keeps walker order, "path" sorts by relative path
order = "discovery"

[output]
# Used when no -o is given and nothing was remembered
default_file = "scanresult.csv"

[logging]
# trace, debug, info, warn or error
level = "info"
"#
    }
}

/// Get the config directory for dircsv.
pub fn config_dir() -> Option<PathBuf> {
    if let Ok(dir) = std::env::var("DIRCSV_CONFIG_DIR") {
        return Some(PathBuf::from(dir));
    }

    ProjectDirs::from("", "", "dircsv").map(|dirs| dirs.config_dir().to_path_buf())
}

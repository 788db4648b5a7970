//! Remembered scan inputs.
//!
//! `dircsv scan --remember` stores the folder and destination in
//! `<config_dir>/scanner_config.json` so the next run can omit them.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

const PREFS_FILE: &str = "scanner_config.json";

/// Last folder and CSV destination the user asked to keep.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "StoredInputs")]
pub struct Remembered {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub folder: Option<PathBuf>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub csv: Option<PathBuf>,
}

/// On-disk shape, including the keys written by older versions.
#[derive(Deserialize)]
struct StoredInputs {
    #[serde(default)]
    folder: Option<PathBuf>,
    #[serde(default)]
    csv: Option<PathBuf>,
    #[serde(default)]
    ordner: Option<PathBuf>,
    #[serde(default)]
    csv_datei: Option<PathBuf>,
}

impl From<StoredInputs> for Remembered {
    fn from(stored: StoredInputs) -> Self {
        Self {
            folder: stored.folder.or(stored.ordner),
            csv: stored.csv.or(stored.csv_datei),
        }
    }
}

impl Remembered {
    /// Prefs file inside `config_dir`.
    pub fn path_in(config_dir: &Path) -> PathBuf {
        config_dir.join(PREFS_FILE)
    }

    /// Read remembered inputs. Anything unreadable counts as nothing remembered.
    pub fn load(path: &Path) -> Self {
        let parsed = std::fs::read_to_string(path)
            .map_err(|e| e.to_string())
            .and_then(|raw| serde_json::from_str::<Self>(&raw).map_err(|e| e.to_string()));
        match parsed {
            Ok(remembered) => remembered,
            Err(e) => {
                debug!("No remembered inputs at {:?}: {}", path, e);
                Self::default()
            }
        }
    }

    /// Write to `path`, creating its directory.
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(dir) = path.parent() {
            std::fs::create_dir_all(dir)
                .with_context(|| format!("Failed to create {}", dir.display()))?;
        }
        let json = serde_json::to_string_pretty(self).context("Failed to serialize inputs")?;
        std::fs::write(path, json).with_context(|| format!("Failed to write {}", path.display()))
    }
}

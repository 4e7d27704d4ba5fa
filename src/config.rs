//! Exporter configuration.
//!
//! Loaded from `~/.mte-export/config.toml`. The details endpoint differs per
//! deployment, so there is no built-in default.

use std::fs;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Exporter configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Config {
    /// The MTE details endpoint. `?id=<mte-id>` is appended per lookup.
    pub details_url: String,

    /// Where `mte_closure.csv` is written when `--out` is not given.
    /// Defaults to the working directory.
    #[serde(default)]
    pub output_dir: Option<PathBuf>,
}

impl Config {
    /// Load config from `~/.mte-export/config.toml`.
    /// Returns an error if the file is missing or invalid.
    pub fn load() -> Result<Self, String> {
        let path = Self::path().ok_or("could not determine home directory")?;

        if !path.exists() {
            return Err(format!(
                "no config file found at {}\n\
                 Create one with at minimum:\n\n\
                 details-url = \"https://www.waze.com/Descartes/app/MajorTrafficEvents/details\"",
                path.display()
            ));
        }

        let contents = fs::read_to_string(&path)
            .map_err(|e| format!("failed to read {}: {e}", path.display()))?;

        let config: Self = toml::from_str(&contents)
            .map_err(|e| format!("invalid config at {}: {e}", path.display()))?;

        if config.details_url.is_empty() {
            return Err(format!(
                "details-url is empty in {}\n\
                 Set it to the MTE details endpoint.",
                path.display()
            ));
        }

        Ok(config)
    }

    /// The config file path: `~/.mte-export/config.toml`.
    pub fn path() -> Option<PathBuf> {
        dirs::home_dir().map(|h| h.join(".mte-export").join("config.toml"))
    }
}

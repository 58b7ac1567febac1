//! Optional user settings: `~/.config/gamelist-tools/settings.toml`.
//!
//! The file only supplies defaults; command-line flags always win, and the
//! tools never write it. Every key is optional:
//!
//! ```toml
//! [regions]
//! allow = ["en", "eu", "us", "wr"]
//!
//! [dups]
//! gamelist = "/roms/snes/gamelist.xml"
//! ```

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::regions::DEFAULT_ALLOWED_REGIONS;

/// Gamelist the duplicate resolver opens when none is given.
pub const DEFAULT_DUPS_GAMELIST: &str = "./gamelist.xml";

/// Canonical path to the settings file.
pub fn settings_path() -> PathBuf {
    let config = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
    config.join("gamelist-tools").join("settings.toml")
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub regions: RegionSettings,
    pub dups: DupSettings,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct RegionSettings {
    /// Region codes kept visible by `hide-regions`.
    pub allow: Option<Vec<String>>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct DupSettings {
    /// Gamelist opened by `dups` when `--gamelist` is not given.
    pub gamelist: Option<PathBuf>,
}

impl Settings {
    /// Load from the canonical path. Missing or broken files give defaults.
    pub fn load() -> Self {
        Self::load_from(&settings_path())
    }

    pub fn load_from(path: &Path) -> Self {
        let Ok(contents) = std::fs::read_to_string(path) else {
            log::debug!("No settings file at {}", path.display());
            return Self::default();
        };
        match Self::parse(&contents) {
            Ok(settings) => settings,
            Err(e) => {
                log::warn!("Ignoring settings file {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    pub fn parse(contents: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(contents)
    }

    /// Allow-list for the region hider: CLI flag, then settings, then
    /// [`DEFAULT_ALLOWED_REGIONS`].
    pub fn allowed_regions(&self, cli_override: Option<Vec<String>>) -> Vec<String> {
        cli_override
            .or_else(|| self.regions.allow.clone())
            .unwrap_or_else(|| {
                DEFAULT_ALLOWED_REGIONS
                    .iter()
                    .map(|s| s.to_string())
                    .collect()
            })
    }

    /// Gamelist for the duplicate resolver: CLI flag, then settings, then
    /// [`DEFAULT_DUPS_GAMELIST`].
    pub fn dups_gamelist(&self, cli_override: Option<PathBuf>) -> PathBuf {
        cli_override
            .or_else(|| self.dups.gamelist.clone())
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DUPS_GAMELIST))
    }
}

/// Load the settings file as a pretty-printed TOML string for display.
pub fn load_settings_string() -> Option<String> {
    let contents = std::fs::read_to_string(settings_path()).ok()?;
    let doc: toml::Value = contents.parse().ok()?;
    toml::to_string_pretty(&doc).ok()
}

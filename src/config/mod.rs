// Copyright (C) 2026  Caprica Software Limited
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

//! Application configuration.
//!
//! This module manages the user preferences file. Playback state itself is
//! never persisted, only preferences that a composition root applies to a
//! freshly constructed store.

use std::path::Path;

use log::warn;
use serde::{Deserialize, Serialize};

use crate::{error::Result, store::PlaybackState};

const CONFIG_NAME: &str = "playback-store";

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub version: u32,
    /// Whether shuffle was enabled when the preferences were last saved.
    pub randomize: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            version: 1,
            randomize: false,
        }
    }
}

impl AppConfig {
    /// Records the preferences held in a playback state.
    pub fn capture<S>(state: &PlaybackState<S>) -> Self {
        Self {
            randomize: state.randomize,
            ..Self::default()
        }
    }
}

/// Loads the configuration, falling back to defaults if it cannot be read.
pub fn load_config() -> AppConfig {
    or_default(try_load_config())
}

pub fn try_load_config() -> Result<AppConfig> {
    Ok(confy::load(CONFIG_NAME, None)?)
}

pub fn save_config(cfg: &AppConfig) -> Result<()> {
    Ok(confy::store(CONFIG_NAME, None, cfg)?)
}

/// Loads the configuration from an explicit file, falling back to defaults
/// if it cannot be read.
pub fn load_config_from(path: impl AsRef<Path>) -> AppConfig {
    or_default(try_load_config_from(path))
}

pub fn try_load_config_from(path: impl AsRef<Path>) -> Result<AppConfig> {
    Ok(confy::load_path(path)?)
}

pub fn save_config_to(path: impl AsRef<Path>, cfg: &AppConfig) -> Result<()> {
    Ok(confy::store_path(path, cfg)?)
}

fn or_default(loaded: Result<AppConfig>) -> AppConfig {
    loaded.unwrap_or_else(|err| {
        warn!("Using default configuration: {err}");
        AppConfig::default()
    })
}

#[cfg(test)]
mod tests {
    use std::{fs, path::PathBuf};

    use super::*;
    use crate::model::Song;

    fn temp_config(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!(
            "playback-store-{}-{name}.toml",
            std::process::id()
        ))
    }

    #[test]
    fn default_config_does_not_randomize() {
        let cfg = AppConfig::default();
        assert_eq!(cfg.version, 1);
        assert!(!cfg.randomize);
    }

    #[test]
    fn capture_records_randomize() {
        let mut state = PlaybackState::<Song>::default();
        state.randomize = true;

        let cfg = AppConfig::capture(&state);
        assert!(cfg.randomize);
        assert_eq!(cfg.version, AppConfig::default().version);
    }

    #[test]
    fn malformed_file_falls_back_to_defaults() {
        let _ = env_logger::builder().is_test(true).try_init();
        let path = temp_config("malformed");
        fs::write(&path, "version = [\n").unwrap();

        assert!(try_load_config_from(&path).is_err());
        assert_eq!(load_config_from(&path), AppConfig::default());

        fs::remove_file(&path).ok();
    }

    #[test]
    fn saved_preferences_are_loaded_back() {
        let path = temp_config("saved");
        let cfg = AppConfig {
            randomize: true,
            ..AppConfig::default()
        };

        save_config_to(&path, &cfg).unwrap();
        assert_eq!(load_config_from(&path), cfg);

        fs::remove_file(&path).ok();
    }
}

use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use tracing::debug;

use super::{Config, DEFAULT_LOCALE};
use crate::division::TimeDivision;
use crate::strings::StringTable;

/// On-disk form of [`Config`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConfigFile {
    #[serde(default = "default_locale")]
    pub locale: String,
    #[serde(default = "default_min_division")]
    pub min_division: TimeDivision,
    #[serde(default = "default_max_division")]
    pub max_division: TimeDivision,
    /// Directory of `<locale>.toml` files merged over the built-in tables.
    #[serde(default)]
    pub strings_dir: Option<PathBuf>,
    /// Per-locale template overrides, merged last.
    #[serde(default)]
    pub strings: BTreeMap<String, BTreeMap<String, String>>,
}

fn default_locale() -> String {
    DEFAULT_LOCALE.to_string()
}
fn default_min_division() -> TimeDivision {
    TimeDivision::Second
}
fn default_max_division() -> TimeDivision {
    TimeDivision::largest()
}

impl Default for ConfigFile {
    fn default() -> Self {
        Self {
            locale: default_locale(),
            min_division: default_min_division(),
            max_division: default_max_division(),
            strings_dir: None,
            strings: BTreeMap::new(),
        }
    }
}

impl ConfigFile {
    pub fn load(path: Option<&Path>) -> Result<Self> {
        if let Some(path) = path {
            return Self::read(path);
        }

        let mut candidates = Vec::new();

        if let Some(home) = std::env::var_os("HOME") {
            candidates.push(PathBuf::from(home).join(".config/elapsed/config.toml"));
        }

        if let Some(proj_dirs) = ProjectDirs::from("", "", "elapsed") {
            candidates.push(proj_dirs.config_dir().join("config.toml"));
        }

        for config_path in &candidates {
            if config_path.exists() {
                return Self::read(config_path);
            }
        }

        debug!("No config file found, using defaults");
        Ok(ConfigFile::default())
    }

    fn read(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        let config: ConfigFile =
            toml::from_str(&content).with_context(|| "Failed to parse config file")?;
        debug!(path = %path.display(), locale = %config.locale, "Loaded config file");
        Ok(config)
    }

    /// Assemble the string table and validate the result.
    pub fn into_config(self) -> Result<Config> {
        let mut strings = StringTable::builtin();
        if let Some(dir) = &self.strings_dir {
            strings.merge(StringTable::load_dir(dir)?);
        }
        for (locale, templates) in self.strings {
            for (key, template) in templates {
                strings.insert(locale.as_str(), key, template);
            }
        }

        let config = Config::builder()
            .locale(self.locale)
            .min_division(self.min_division)
            .max_division(self.max_division)
            .strings(strings)
            .build()
            .context("Invalid elapsed-time configuration")?;
        Ok(config)
    }
}

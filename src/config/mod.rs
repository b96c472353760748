mod file;

pub use file::ConfigFile;

use std::path::Path;
use std::sync::{Arc, LazyLock};

use crate::division::TimeDivision;
use crate::error::ElapsedError;
use crate::strings::StringTable;

pub const DEFAULT_LOCALE: &str = "en";

static BUILTIN_STRINGS: LazyLock<Arc<StringTable>> =
    LazyLock::new(|| Arc::new(StringTable::builtin()));

static DEFAULT_CONFIG: LazyLock<Config> = LazyLock::new(Config::default);

/// Settings for one or many formatting calls.
///
/// A `Config` is validated when built and never changes afterwards; clones
/// share the same string table.
#[derive(Debug, Clone)]
pub struct Config {
    locale: String,
    min_division: TimeDivision,
    max_division: TimeDivision,
    strings: Arc<StringTable>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            locale: DEFAULT_LOCALE.to_string(),
            min_division: TimeDivision::Second,
            max_division: TimeDivision::largest(),
            strings: Arc::clone(&BUILTIN_STRINGS),
        }
    }
}

impl Config {
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    /// The shared default configuration: English, seconds through years.
    pub fn shared_default() -> &'static Config {
        &DEFAULT_CONFIG
    }

    /// Load from a config file, see [`ConfigFile::load`].
    pub fn load(path: Option<&Path>) -> anyhow::Result<Self> {
        ConfigFile::load(path)?.into_config()
    }

    pub fn locale(&self) -> &str {
        &self.locale
    }

    /// Durations whose display division is below this render as the epsilon phrase.
    pub fn min_division(&self) -> TimeDivision {
        self.min_division
    }

    /// Decomposition starts here; nothing is displayed in a larger division.
    pub fn max_division(&self) -> TimeDivision {
        self.max_division
    }

    pub fn strings(&self) -> &StringTable {
        &self.strings
    }

    pub(crate) fn template(&self, key: &str) -> Result<&str, ElapsedError> {
        self.strings.lookup(&self.locale, key)
    }
}

#[derive(Debug, Clone)]
pub struct ConfigBuilder {
    locale: String,
    min_division: TimeDivision,
    max_division: TimeDivision,
    strings: Option<Arc<StringTable>>,
}

impl Default for ConfigBuilder {
    fn default() -> Self {
        let config = Config::default();
        Self {
            locale: config.locale,
            min_division: config.min_division,
            max_division: config.max_division,
            strings: None,
        }
    }
}

impl ConfigBuilder {
    pub fn locale(mut self, locale: impl Into<String>) -> Self {
        self.locale = locale.into();
        self
    }

    pub fn min_division(mut self, division: TimeDivision) -> Self {
        self.min_division = division;
        self
    }

    pub fn max_division(mut self, division: TimeDivision) -> Self {
        self.max_division = division;
        self
    }

    /// Replace the built-in tables entirely.
    pub fn strings(mut self, strings: StringTable) -> Self {
        self.strings = Some(Arc::new(strings));
        self
    }

    pub fn build(self) -> Result<Config, ElapsedError> {
        if self.min_division > self.max_division {
            return Err(ElapsedError::InvalidArgument(format!(
                "min_division ({}) is larger than max_division ({})",
                self.min_division, self.max_division
            )));
        }

        let strings = self
            .strings
            .unwrap_or_else(|| Arc::clone(&BUILTIN_STRINGS));
        strings.validate(&self.locale)?;

        Ok(Config {
            locale: self.locale,
            min_division: self.min_division,
            max_division: self.max_division,
            strings,
        })
    }
}

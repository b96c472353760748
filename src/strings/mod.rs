mod builtin;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;
use tracing::{debug, warn};

use crate::division::TimeDivision;
use crate::error::ElapsedError;

/// Key of the phrase used when a duration is too small to display.
pub const EPSILON_KEY: &str = "epsilon";

/// Token replaced by the displayed value in plural templates.
pub const PLACEHOLDER: &str = "{num}";

/// Locales shipped with the crate.
pub const BUILTIN_LOCALES: [&str; 3] = ["en", "fr", "es"];

/// Localized templates: locale id -> template key -> template.
///
/// In TOML form every locale is a table:
///
/// ```toml
/// [en]
/// epsilon = "Moments ago"
/// seconds_ago = "{num} seconds ago"
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StringTable {
    locales: BTreeMap<String, BTreeMap<String, String>>,
}

/// Every key a locale must define to render all durations.
pub fn required_keys() -> impl Iterator<Item = &'static str> {
    std::iter::once(EPSILON_KEY).chain(
        TimeDivision::ALL
            .into_iter()
            .flat_map(|division| [division.singular_key(), division.plural_key()]),
    )
}

impl StringTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// English, French and Spanish tables.
    pub fn builtin() -> Self {
        let mut table = Self::new();
        for (locale, templates) in builtin::LOCALES {
            for (key, template) in templates {
                table.insert(locale, *key, *template);
            }
        }
        table
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).context("Failed to parse string table")
    }

    /// Load a file holding one table per locale.
    pub fn load_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read strings file: {}", path.display()))?;
        let table = Self::from_toml_str(&content)
            .with_context(|| format!("Invalid strings file: {}", path.display()))?;
        debug!(path = %path.display(), locales = table.locales.len(), "Loaded strings file");
        Ok(table)
    }

    /// Load a flat `key = "template"` file as the templates of `locale`.
    pub fn load_locale_file(locale: &str, path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read strings file: {}", path.display()))?;
        let templates: BTreeMap<String, String> = toml::from_str(&content)
            .with_context(|| format!("Invalid strings file: {}", path.display()))?;
        debug!(locale, path = %path.display(), keys = templates.len(), "Loaded locale strings");

        let mut table = Self::new();
        table.locales.insert(locale.to_string(), templates);
        Ok(table)
    }

    /// Load every `<locale>.toml` in `dir`, named after its file stem.
    pub fn load_dir(dir: &Path) -> Result<Self> {
        let entries = std::fs::read_dir(dir)
            .with_context(|| format!("Failed to read strings directory: {}", dir.display()))?;

        let mut table = Self::new();
        for entry in entries {
            let path = entry?.path();
            if !path.extension().is_some_and(|ext| ext == "toml") {
                warn!(path = %path.display(), "Skipping non-TOML file in strings directory");
                continue;
            }
            let Some(locale) = path.file_stem().and_then(|stem| stem.to_str()) else {
                warn!(path = %path.display(), "Skipping strings file with unusable name");
                continue;
            };
            table.merge(Self::load_locale_file(locale, &path)?);
        }
        Ok(table)
    }

    pub fn insert(
        &mut self,
        locale: impl Into<String>,
        key: impl Into<String>,
        template: impl Into<String>,
    ) {
        self.locales
            .entry(locale.into())
            .or_default()
            .insert(key.into(), template.into());
    }

    /// Copy every template of `other` over this table, key by key.
    pub fn merge(&mut self, other: StringTable) {
        for (locale, templates) in other.locales {
            self.locales.entry(locale).or_default().extend(templates);
        }
    }

    pub fn lookup(&self, locale: &str, key: &str) -> Result<&str, ElapsedError> {
        self.locales
            .get(locale)
            .and_then(|templates| templates.get(key))
            .map(String::as_str)
            .ok_or_else(|| ElapsedError::missing(locale, key))
    }

    /// Fails on the first required key `locale` does not define.
    pub fn validate(&self, locale: &str) -> Result<(), ElapsedError> {
        match required_keys().find(|key| self.lookup(locale, key).is_err()) {
            Some(key) => Err(ElapsedError::missing(locale, key)),
            None => Ok(()),
        }
    }

    pub fn locales(&self) -> impl Iterator<Item = &str> {
        self.locales.keys().map(String::as_str)
    }

    pub fn has_locale(&self, locale: &str) -> bool {
        self.locales.contains_key(locale)
    }

    pub fn is_empty(&self) -> bool {
        self.locales.is_empty()
    }
}

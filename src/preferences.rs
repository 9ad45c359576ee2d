//! Persisted user preferences
//!
//! The only preference is the active theme id. It is read once at startup
//! and written back when the user changes it.

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::theme::{Catalog, Theme};

/// Default preference file name, relative to the working directory
pub const DEFAULT_PREFERENCES_FILE: &str = ".markfolio.toml";

#[derive(Error, Debug)]
pub enum PreferencesError {
    #[error("Failed to access preferences file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse preferences TOML: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("Failed to serialize preferences: {0}")]
    Serialize(#[from] toml::ser::Error),
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Preferences {
    /// Id of the last selected theme
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub theme: Option<String>,
}

impl Preferences {
    /// Load preferences; a missing file yields the defaults
    pub fn load(path: &Path) -> Result<Self, PreferencesError> {
        if !path.exists() {
            debug!(path = %path.display(), "no preferences file, using defaults");
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }

    /// Write preferences, replacing any existing file
    pub fn save(&self, path: &Path) -> Result<(), PreferencesError> {
        let content = toml::to_string(self)?;
        std::fs::write(path, content)?;
        debug!(path = %path.display(), theme = ?self.theme, "saved preferences");
        Ok(())
    }

    /// Pick the active theme: an explicit id wins over the stored one, and
    /// unknown ids fall back to the catalog's first theme
    pub fn resolve_theme<'a>(&self, catalog: &'a Catalog, explicit: Option<&str>) -> &'a Theme {
        match explicit.or(self.theme.as_deref()) {
            Some(id) => catalog.lookup(id),
            None => catalog.first(),
        }
    }
}

//! Theme catalog for rendered portfolios
//!
//! A theme is a named palette of seven colors. The built-in catalog is a
//! static table; custom themes can be loaded from TOML files and added to a
//! [`Catalog`]. Lookups by an unknown id fall back to the first catalog entry.

use std::borrow::Cow;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

/// Errors that can occur when loading themes or building a catalog
#[derive(Error, Debug)]
pub enum ThemeError {
    #[error("Failed to read theme file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse theme TOML: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("Invalid color for '{field}': {value:?} (expected #rgb, #rrggbb or #rrggbbaa)")]
    InvalidColor { field: &'static str, value: String },
    #[error("Theme catalog must contain at least one theme")]
    EmptyCatalog,
}

/// The seven colors of a theme, as CSS hex values
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThemeColors {
    pub primary: Cow<'static, str>,
    pub secondary: Cow<'static, str>,
    pub accent: Cow<'static, str>,
    pub background: Cow<'static, str>,
    pub surface: Cow<'static, str>,
    pub text: Cow<'static, str>,
    #[serde(alias = "text-secondary")]
    pub text_secondary: Cow<'static, str>,
}

impl ThemeColors {
    /// Colors paired with their CSS custom property names, in a fixed order
    pub fn entries(&self) -> [(&'static str, &str); 7] {
        [
            ("primary", self.primary.as_ref()),
            ("secondary", self.secondary.as_ref()),
            ("accent", self.accent.as_ref()),
            ("background", self.background.as_ref()),
            ("surface", self.surface.as_ref()),
            ("text", self.text.as_ref()),
            ("text-secondary", self.text_secondary.as_ref()),
        ]
    }

    /// Check that every color is a hex value
    pub fn validate(&self) -> Result<(), ThemeError> {
        for (field, value) in self.entries() {
            if !is_hex_color(value) {
                return Err(ThemeError::InvalidColor {
                    field,
                    value: value.to_string(),
                });
            }
        }
        Ok(())
    }
}

/// A named color palette
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Theme {
    pub id: Cow<'static, str>,
    pub name: Cow<'static, str>,
    pub description: Cow<'static, str>,
    pub colors: ThemeColors,
}

const fn builtin(
    id: &'static str,
    name: &'static str,
    description: &'static str,
    [primary, secondary, accent, background, surface, text, text_secondary]: [&'static str; 7],
) -> Theme {
    Theme {
        id: Cow::Borrowed(id),
        name: Cow::Borrowed(name),
        description: Cow::Borrowed(description),
        colors: ThemeColors {
            primary: Cow::Borrowed(primary),
            secondary: Cow::Borrowed(secondary),
            accent: Cow::Borrowed(accent),
            background: Cow::Borrowed(background),
            surface: Cow::Borrowed(surface),
            text: Cow::Borrowed(text),
            text_secondary: Cow::Borrowed(text_secondary),
        },
    }
}

/// Built-in themes; the first entry is the fallback
pub static BUILTIN_THEMES: [Theme; 4] = [
    builtin(
        "modern",
        "Modern",
        "Clean and contemporary design",
        [
            "#3B82F6", "#1E40AF", "#F59E0B", "#FFFFFF", "#F8FAFC", "#1F2937", "#6B7280",
        ],
    ),
    builtin(
        "classic",
        "Classic",
        "Timeless and professional",
        [
            "#1F2937", "#374151", "#DC2626", "#FFFFFF", "#F9FAFB", "#111827", "#4B5563",
        ],
    ),
    builtin(
        "minimal",
        "Minimal",
        "Simple and focused",
        [
            "#000000", "#404040", "#6366F1", "#FFFFFF", "#FAFAFA", "#000000", "#666666",
        ],
    ),
    builtin(
        "creative",
        "Creative",
        "Vibrant and expressive",
        [
            "#8B5CF6", "#7C3AED", "#F59E0B", "#FEFEFE", "#F3F4F6", "#1A202C", "#718096",
        ],
    ),
];

/// TOML structure for deserializing themes
#[derive(Deserialize)]
struct TomlTheme {
    metadata: TomlMetadata,
    colors: ThemeColors,
}

#[derive(Deserialize)]
struct TomlMetadata {
    id: String,
    name: Option<String>,
    description: Option<String>,
}

impl Theme {
    /// Load a theme from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, ThemeError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_str(&content)
    }

    /// Load a theme from a TOML string
    pub fn from_str(content: &str) -> Result<Self, ThemeError> {
        let parsed: TomlTheme = toml::from_str(content)?;
        parsed.colors.validate()?;

        let name = parsed.metadata.name.unwrap_or_else(|| parsed.metadata.id.clone());
        Ok(Theme {
            id: Cow::Owned(parsed.metadata.id),
            name: Cow::Owned(name),
            description: Cow::Owned(parsed.metadata.description.unwrap_or_default()),
            colors: parsed.colors,
        })
    }
}

impl Default for Theme {
    fn default() -> Self {
        BUILTIN_THEMES[0].clone()
    }
}

/// An ordered, non-empty list of themes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    themes: Vec<Theme>,
}

impl Catalog {
    /// The built-in themes
    pub fn builtin() -> Self {
        Self {
            themes: BUILTIN_THEMES.to_vec(),
        }
    }

    /// Build a catalog from a list of themes
    pub fn new(themes: Vec<Theme>) -> Result<Self, ThemeError> {
        if themes.is_empty() {
            return Err(ThemeError::EmptyCatalog);
        }
        Ok(Self { themes })
    }

    /// Add a theme, replacing any entry with the same id
    pub fn with_theme(mut self, theme: Theme) -> Self {
        match self.themes.iter_mut().find(|t| t.id == theme.id) {
            Some(existing) => *existing = theme,
            None => self.themes.push(theme),
        }
        self
    }

    /// Find a theme by exact id
    pub fn get(&self, id: &str) -> Option<&Theme> {
        self.themes.iter().find(|t| t.id == id)
    }

    /// The fallback theme
    pub fn first(&self) -> &Theme {
        &self.themes[0]
    }

    /// Find a theme by id, falling back to the first entry
    pub fn lookup(&self, id: &str) -> &Theme {
        self.get(id).unwrap_or_else(|| {
            let fallback = self.first();
            debug!(id, fallback = %fallback.id, "unknown theme, using fallback");
            fallback
        })
    }

    pub fn iter(&self) -> impl Iterator<Item = &Theme> {
        self.themes.iter()
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.themes.iter().map(|t| &*t.id)
    }

    pub fn len(&self) -> usize {
        self.themes.len()
    }

    /// Catalogs are never empty once built
    pub fn is_empty(&self) -> bool {
        self.themes.is_empty()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}

/// Look up a theme by id, falling back to the catalog's first entry
pub fn lookup_theme<'a>(id: &str, catalog: &'a Catalog) -> &'a Theme {
    catalog.lookup(id)
}

fn is_hex_color(value: &str) -> bool {
    match value.strip_prefix('#') {
        Some(hex) => {
            matches!(hex.len(), 3 | 6 | 8) && hex.chars().all(|c| c.is_ascii_hexdigit())
        }
        None => false,
    }
}

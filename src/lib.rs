//! Markfolio - Markdown portfolios rendered as themed HTML
//!
//! This library provides a line-oriented parser that turns a loosely
//! structured Markdown résumé into a typed [`Record`], and a renderer that
//! turns a record plus a [`Theme`] into a self-contained HTML page.
//!
//! # Example
//!
//! ```rust
//! use markfolio::render;
//!
//! let html = render("# Jane Doe\n## Skills\n- Rust\n");
//! assert!(html.contains("<h1>Jane Doe</h1>"));
//! ```

pub mod error;
pub mod parser;
pub mod preferences;
pub mod preview;
pub mod renderer;
pub mod sample;
pub mod theme;

pub use error::Error;
pub use parser::{parse, Education, Experience, PersonalInfo, Project, Record};
pub use preferences::Preferences;
pub use renderer::{export_filename, render_html, render_html_with_config, HtmlConfig};
pub use theme::{lookup_theme, Catalog, Theme, ThemeColors, ThemeError, BUILTIN_THEMES};

/// Configuration for the complete parse-and-render pipeline
#[derive(Debug, Clone, Default)]
pub struct RenderConfig {
    /// HTML output configuration
    pub html: HtmlConfig,
    /// Theme supplying the color palette
    pub theme: Theme,
}

impl RenderConfig {
    /// Create a new configuration with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the HTML configuration
    pub fn with_html(mut self, config: HtmlConfig) -> Self {
        self.html = config;
        self
    }

    /// Set the theme
    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }
}

/// Render a Markdown portfolio to a standalone HTML page with the default theme
///
/// # Example
///
/// ```rust
/// use markfolio::render;
///
/// let html = render("# Jane Doe\n## Experience\n### Engineer\nBuilt the thing.\n");
///
/// assert!(html.contains("<!DOCTYPE html>"));
/// assert!(html.contains("Built the thing."));
/// ```
pub fn render(source: &str) -> String {
    render_with_config(source, &RenderConfig::default())
}

/// Render a Markdown portfolio with a custom configuration
///
/// # Example
///
/// ```rust
/// use markfolio::{render_with_config, Catalog, HtmlConfig, RenderConfig};
///
/// let catalog = Catalog::builtin();
/// let config = RenderConfig::new()
///     .with_theme(catalog.lookup("classic").clone())
///     .with_html(HtmlConfig::fragment());
///
/// let html = render_with_config("# Jane", &config);
/// assert!(html.contains("--accent: #DC2626;"));
/// assert!(!html.contains("<!DOCTYPE html>"));
/// ```
pub fn render_with_config(source: &str, config: &RenderConfig) -> String {
    let record = parse(source);
    render_html_with_config(&record, &config.theme, &config.html)
}

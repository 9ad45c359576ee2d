//! Configuration for HTML rendering

/// Configuration options for HTML output
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HtmlConfig {
    /// Emit a complete page (doctype, head, body) rather than an embeddable
    /// fragment for an on-screen preview
    pub standalone: bool,

    /// Whether to format output with indentation
    pub pretty_print: bool,

    /// Prefix for CSS class names (e.g., "mf-" for "mf-section")
    pub class_prefix: Option<String>,
}

impl Default for HtmlConfig {
    fn default() -> Self {
        Self {
            standalone: true,
            pretty_print: true,
            class_prefix: None,
        }
    }
}

impl HtmlConfig {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Configuration for an embeddable preview fragment
    pub fn fragment() -> Self {
        Self::default().with_standalone(false)
    }

    /// Set whether output is a standalone page
    pub fn with_standalone(mut self, standalone: bool) -> Self {
        self.standalone = standalone;
        self
    }

    /// Set whether to pretty-print output
    pub fn with_pretty_print(mut self, pretty: bool) -> Self {
        self.pretty_print = pretty;
        self
    }

    /// Set the CSS class prefix
    pub fn with_class_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.class_prefix = Some(prefix.into());
        self
    }

    /// Remove the CSS class prefix
    pub fn without_class_prefix(mut self) -> Self {
        self.class_prefix = None;
        self
    }
}

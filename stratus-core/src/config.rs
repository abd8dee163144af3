//! Synthesis configuration

/// Template format version emitted by default
pub const DEFAULT_FORMAT_VERSION: &str = "2010-09-09";

/// Template synthesis options
#[derive(Debug, Clone)]
pub struct SynthConfig {
    /// Value of `AWSTemplateFormatVersion`; omitted when `None`
    pub format_version: Option<String>,

    /// Pretty-print the template (default: true)
    pub pretty: bool,

    /// Number of spaces for indentation when pretty-printing (default: 2)
    pub indent_size: usize,
}

impl Default for SynthConfig {
    fn default() -> Self {
        Self {
            format_version: Some(DEFAULT_FORMAT_VERSION.to_string()),
            pretty: true,
            indent_size: 2,
        }
    }
}

impl SynthConfig {
    /// Compact single-line output
    pub fn compact() -> Self {
        Self {
            pretty: false,
            ..Self::default()
        }
    }

    /// Get the string to use for a single level of indentation
    pub fn indent_string(&self) -> String {
        " ".repeat(self.indent_size)
    }
}

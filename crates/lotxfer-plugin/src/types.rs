//! Plugin interface types.
//!
//! A plugin receives the whole directive stream plus the ledger options and
//! its own configuration string, and hands back a (possibly extended)
//! directive stream together with any errors it found.

use lotxfer_core::Directive;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Input passed to a plugin.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PluginInput {
    /// All directives of the ledger, booked.
    pub directives: Vec<Directive>,
    /// Ledger options.
    pub options: PluginOptions,
    /// Configuration string from `plugin "name" "config"`.
    pub config: Option<String>,
}

/// Ledger options visible to plugins.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PluginOptions {
    /// Operating currencies of the ledger.
    pub operating_currencies: Vec<String>,
    /// Ledger title.
    pub title: Option<String>,
}

/// Output returned by a plugin.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PluginOutput {
    /// Directives after processing.
    pub directives: Vec<Directive>,
    /// Errors raised while processing.
    pub errors: Vec<PluginError>,
}

/// Severity of a plugin error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PluginErrorSeverity {
    /// Suspicious but the ledger is usable.
    Warning,
    /// The ledger is invalid.
    Error,
}

/// An error reported by a plugin.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PluginError {
    /// Human-readable message.
    pub message: String,
    /// Source file of the offending directive, if known.
    pub source_file: Option<String>,
    /// Line of the offending directive, if known.
    pub line_number: Option<u32>,
    /// Severity.
    pub severity: PluginErrorSeverity,
}

impl PluginError {
    /// Create an error.
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            source_file: None,
            line_number: None,
            severity: PluginErrorSeverity::Error,
        }
    }

    /// Attach a source location.
    #[must_use]
    pub fn at(mut self, source_file: Option<String>, line_number: Option<u32>) -> Self {
        self.source_file = source_file;
        self.line_number = line_number;
        self
    }

    /// Whether this is an error rather than a warning.
    pub const fn is_error(&self) -> bool {
        matches!(self.severity, PluginErrorSeverity::Error)
    }
}

impl fmt::Display for PluginError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (&self.source_file, self.line_number) {
            (Some(file), Some(line)) => write!(f, "{file}:{line}: ")?,
            (Some(file), None) => write!(f, "{file}: ")?,
            (None, Some(line)) => write!(f, "line {line}: ")?,
            (None, None) => {}
        }
        write!(f, "{}", self.message)
    }
}

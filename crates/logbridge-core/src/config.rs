//! Declarative logger configuration

use crate::error::LogResult;
use crate::kv::Fields;
use crate::level::LogLevel;
use crate::options::{self, LoggerOption};
use crate::output::Output;
use serde::{Deserialize, Serialize};

/// Standard stream a configured logger writes to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputTarget {
    Stdout,
    #[default]
    Stderr,
}

impl From<OutputTarget> for Output {
    fn from(target: OutputTarget) -> Self {
        match target {
            OutputTarget::Stdout => Output::Stdout,
            OutputTarget::Stderr => Output::Stderr,
        }
    }
}

/// Logger configuration loaded from JSON or TOML
///
/// ```toml
/// level = "debug"
/// format = "json"
/// output = "stdout"
///
/// [fields]
/// service = "billing"
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LoggerConfig {
    /// Minimum level (default: info)
    #[serde(default)]
    pub level: LogLevel,

    /// Output handler name, interpreted by the backend (e.g. "text", "json", "cli")
    #[serde(default)]
    pub format: Option<String>,

    /// Standard stream to write to (default: stderr)
    #[serde(default)]
    pub output: OutputTarget,

    /// Fields attached to every record
    #[serde(default)]
    pub fields: Fields,
}

impl LoggerConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create configuration from JSON bytes; empty input yields the defaults
    pub fn from_json(bytes: &[u8]) -> LogResult<Self> {
        if bytes.is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_json::from_slice(bytes)?)
    }

    /// Create configuration from a TOML document
    pub fn from_toml(text: &str) -> LogResult<Self> {
        Ok(toml::from_str(text)?)
    }

    /// Backend-independent options described by this configuration.
    ///
    /// `format` is left for the backend to translate.
    pub fn to_options(&self) -> Vec<LoggerOption> {
        let mut opts = vec![
            options::with_level(self.level),
            options::with_output(self.output),
        ];
        if !self.fields.is_empty() {
            opts.push(options::with_fields(self.fields.clone()));
        }
        opts
    }
}

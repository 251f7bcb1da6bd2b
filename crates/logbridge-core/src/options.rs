//! Logger options and the functional options that modify them

use crate::extensions::Extensions;
use crate::kv::Fields;
use crate::level::LogLevel;
use crate::output::Output;

/// Configuration shared by every [`Logger`](crate::Logger) implementation
#[derive(Debug, Clone, Default)]
pub struct Options {
    /// Minimum level that is forwarded to the backend
    pub level: LogLevel,

    /// Destination for formatted records
    pub output: Output,

    /// Fields attached to every record
    pub fields: Fields,

    /// Backend-specific settings, keyed by type
    pub context: Extensions,
}

impl Options {
    /// Default options with `opts` applied in order
    pub fn new(opts: impl IntoIterator<Item = LoggerOption>) -> Self {
        let mut options = Self::default();
        options.apply(opts);
        options
    }

    /// Apply `opts` in order; later options win
    pub fn apply(&mut self, opts: impl IntoIterator<Item = LoggerOption>) {
        for opt in opts {
            opt.apply(self);
        }
    }
}

/// A single deferred change to [`Options`]
pub struct LoggerOption(Box<dyn FnOnce(&mut Options) + Send>);

impl LoggerOption {
    pub fn new(f: impl FnOnce(&mut Options) + Send + 'static) -> Self {
        Self(Box::new(f))
    }

    pub fn apply(self, options: &mut Options) {
        (self.0)(options)
    }
}

impl std::fmt::Debug for LoggerOption {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("LoggerOption")
    }
}

/// Set the minimum level
pub fn with_level(level: LogLevel) -> LoggerOption {
    LoggerOption::new(move |o| o.level = level)
}

/// Set the output destination
pub fn with_output(output: impl Into<Output>) -> LoggerOption {
    let output = output.into();
    LoggerOption::new(move |o| o.output = output)
}

/// Merge `fields` into the fields attached to every record
pub fn with_fields(fields: impl Into<Fields>) -> LoggerOption {
    let fields = fields.into();
    LoggerOption::new(move |o| o.fields.merge(&fields))
}

/// Store a backend-specific value in [`Options::context`]
pub fn with_context_value<T: Send + Sync + 'static>(value: T) -> LoggerOption {
    LoggerOption::new(move |o| o.context.insert(value))
}

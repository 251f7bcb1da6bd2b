//! The logging facade

use crate::error::LogResult;
use crate::kv::Fields;
use crate::level::LogLevel;
use crate::options::{LoggerOption, Options};
use std::fmt::{Arguments, Display};

/// Logging interface that application code depends on.
///
/// Implementations translate calls into a concrete logging backend.
/// Logging methods never fail; a call below the configured level is dropped.
///
/// # Example
///
/// ```
/// use logbridge_core::{Logger, LogLevel, NoOpLogger, log_info};
///
/// let logger: Box<dyn Logger> = Box::new(NoOpLogger);
/// log_info!(logger, "listening on {}", 8080);
/// logger.log_values(LogLevel::Warn, &[&"retrying", &3]);
/// ```
pub trait Logger: Send + Sync {
    /// Apply options on top of the current ones
    fn init(&mut self, opts: Vec<LoggerOption>) -> LogResult<()>;

    /// Snapshot of the current options
    fn options(&self) -> Options;

    /// A logger that attaches `fields` to every record, in addition to the
    /// fields this logger already carries
    fn fields(&self, fields: Fields) -> Box<dyn Logger>;

    /// Whether a call at `level` would be forwarded
    fn v(&self, level: LogLevel) -> bool;

    /// Log a formatted message at `level`.
    ///
    /// This is the core method; the level shorthands delegate to it.
    fn log(&self, level: LogLevel, args: Arguments<'_>);

    /// Name of the backend
    fn name(&self) -> &str;

    /// Log `values` joined by single spaces
    fn log_values(&self, level: LogLevel, values: &[&dyn Display]) {
        if !self.v(level) {
            return;
        }
        let message = values
            .iter()
            .map(|v| v.to_string())
            .collect::<Vec<_>>()
            .join(" ");
        self.log(level, format_args!("{}", message));
    }

    fn trace(&self, args: Arguments<'_>) {
        self.log(LogLevel::Trace, args);
    }

    fn debug(&self, args: Arguments<'_>) {
        self.log(LogLevel::Debug, args);
    }

    fn info(&self, args: Arguments<'_>) {
        self.log(LogLevel::Info, args);
    }

    fn warn(&self, args: Arguments<'_>) {
        self.log(LogLevel::Warn, args);
    }

    fn error(&self, args: Arguments<'_>) {
        self.log(LogLevel::Error, args);
    }

    /// Log at fatal level. The process is not terminated.
    fn fatal(&self, args: Arguments<'_>) {
        self.log(LogLevel::Fatal, args);
    }
}

/// Format-string logging macros, one per level.
///
/// ```
/// # use logbridge_core::{Logger, NoOpLogger, log_debug};
/// let logger = NoOpLogger;
/// log_debug!(logger, "cache hit ratio {:.2}", 0.93);
/// ```
#[macro_export]
macro_rules! log_trace {
    ($logger:expr, $($arg:tt)*) => {
        $logger.log($crate::LogLevel::Trace, format_args!($($arg)*))
    };
}

#[macro_export]
macro_rules! log_debug {
    ($logger:expr, $($arg:tt)*) => {
        $logger.log($crate::LogLevel::Debug, format_args!($($arg)*))
    };
}

#[macro_export]
macro_rules! log_info {
    ($logger:expr, $($arg:tt)*) => {
        $logger.log($crate::LogLevel::Info, format_args!($($arg)*))
    };
}

#[macro_export]
macro_rules! log_warn {
    ($logger:expr, $($arg:tt)*) => {
        $logger.log($crate::LogLevel::Warn, format_args!($($arg)*))
    };
}

#[macro_export]
macro_rules! log_error {
    ($logger:expr, $($arg:tt)*) => {
        $logger.log($crate::LogLevel::Error, format_args!($($arg)*))
    };
}

#[macro_export]
macro_rules! log_fatal {
    ($logger:expr, $($arg:tt)*) => {
        $logger.log($crate::LogLevel::Fatal, format_args!($($arg)*))
    };
}

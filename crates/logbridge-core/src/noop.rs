//! No-operation logger implementation.

use crate::error::LogResult;
use crate::kv::Fields;
use crate::level::LogLevel;
use crate::logger::Logger;
use crate::options::{LoggerOption, Options};
use std::fmt::Arguments;

/// A logger that discards all messages.
///
/// Useful for:
/// - Unit tests where log output would be noise
/// - Components constructed before real logging is configured
///
/// # Example
///
/// ```
/// use logbridge_core::{Logger, NoOpLogger};
///
/// let logger: Box<dyn Logger> = Box::new(NoOpLogger);
/// logger.info(format_args!("This message is discarded"));
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct NoOpLogger;

impl Logger for NoOpLogger {
    fn init(&mut self, _opts: Vec<LoggerOption>) -> LogResult<()> {
        Ok(())
    }

    fn options(&self) -> Options {
        Options::default()
    }

    fn fields(&self, _fields: Fields) -> Box<dyn Logger> {
        Box::new(NoOpLogger)
    }

    fn v(&self, _level: LogLevel) -> bool {
        false
    }

    #[inline]
    fn log(&self, _level: LogLevel, _args: Arguments<'_>) {}

    fn name(&self) -> &str {
        "noop"
    }
}

//! Translation between facade levels and tracing levels

use logbridge_core::LogLevel;
use tracing::Level;
use tracing_subscriber::filter::LevelFilter;

/// Convert a facade level to the tracing level it is emitted at.
///
/// tracing has no fatal level; fatal calls are emitted as errors.
pub fn convert_level(level: LogLevel) -> Level {
    match level {
        LogLevel::Trace => Level::TRACE,
        LogLevel::Debug => Level::DEBUG,
        LogLevel::Info => Level::INFO,
        LogLevel::Warn => Level::WARN,
        LogLevel::Error | LogLevel::Fatal => Level::ERROR,
    }
}

/// Convert a facade level to the tracing filter that lets it and everything above it through
pub fn convert_level_to_filter(level: LogLevel) -> LevelFilter {
    LevelFilter::from_level(convert_level(level))
}

#[cfg(test)]
#[path = "level/level_tests.rs"]
mod level_tests;

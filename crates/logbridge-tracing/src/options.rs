//! tracing-specific logger options
//!
//! These travel inside [`Options::context`](logbridge_core::Options) and are
//! consumed by [`TracingLogger::init`](crate::TracingLogger).

use crate::handler::Handler;
use logbridge_core::{LogLevel, LogResult, LoggerConfig, LoggerOption, with_context_value};
use tracing::Dispatch;

#[derive(Debug, Clone, Copy)]
pub(crate) struct LevelOverride(pub(crate) LogLevel);

#[derive(Debug, Clone)]
pub(crate) struct HandlerOverride(pub(crate) Handler);

#[derive(Debug, Clone)]
pub(crate) struct DispatchOverride(pub(crate) Dispatch);

/// Set the level for log output; takes precedence over the generic level option.
///
/// Applied by [`TracingLogger::init`](crate::TracingLogger), which ignores it
/// when a dispatch is supplied.
pub fn with_level(level: LogLevel) -> LoggerOption {
    with_context_value(LevelOverride(level))
}

/// Use `handler` for log output
pub fn with_handler(handler: Handler) -> LoggerOption {
    with_context_value(HandlerOverride(handler))
}

/// Use the plain text handler for log output
pub fn with_text_handler() -> LoggerOption {
    with_handler(Handler::Text)
}

/// Use the JSON handler for log output
pub fn with_json_handler() -> LoggerOption {
    with_handler(Handler::Json)
}

/// Use the colourised CLI handler for log output
pub fn with_cli_handler() -> LoggerOption {
    with_handler(Handler::Cli)
}

/// Log through an existing dispatch instead of one built from the options.
///
/// Handler and level options in the same `init` call are then ignored.
pub fn with_dispatch(dispatch: Dispatch) -> LoggerOption {
    with_context_value(DispatchOverride(dispatch))
}

/// Translate a [`LoggerConfig`] into options, including its output format
pub fn options_from_config(config: &LoggerConfig) -> LogResult<Vec<LoggerOption>> {
    let mut opts = config.to_options();
    if let Some(format) = config.format.as_deref() {
        opts.push(with_handler(format.parse()?));
    }
    Ok(opts)
}

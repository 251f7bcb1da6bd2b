//! # logbridge
//!
//! A logging facade with a `tracing`-backed implementation.
//!
//! Application code logs against the [`Logger`] trait; [`TracingLogger`]
//! forwards those calls to `tracing` and formats them with one of
//! `tracing-subscriber`'s handlers:
//! - text: full single-line records
//! - JSON: one object per line
//! - CLI: compact, colourised records for terminals
//!
//! ## Quick Start
//!
//! ```
//! use logbridge::prelude::*;
//!
//! let buffer = SharedBuffer::new();
//! let logger = logbridge::new_logger([
//!     options::with_json_handler(),
//!     options::with_level(LogLevel::Debug),
//!     options::with_output(buffer.clone()),
//! ]);
//!
//! let requests = logger.fields(fields! { "component" => "http" });
//! log_debug!(requests, "accepted connection from {}", "10.0.0.7");
//!
//! assert!(buffer.contents().contains("accepted connection"));
//! ```
//!
//! ## Configuration
//!
//! ```
//! let config = logbridge::LoggerConfig::from_toml(r#"
//!     level = "warn"
//!     format = "cli"
//! "#).unwrap();
//! let logger = logbridge::TracingLogger::from_config(&config).unwrap();
//! assert_eq!(logger.level(), logbridge::LogLevel::Warn);
//! ```
//!
//! ## Crate Structure
//!
//! This is a facade crate that re-exports from:
//! - [`logbridge_core`] - The `Logger` trait, levels, fields, options and configuration
//! - [`logbridge_tracing`] - The `tracing` implementation and its handlers

use once_cell::sync::OnceCell;

// Re-export core types
pub use logbridge_core::{
    Extensions, Fields, LogError, LogLevel, LogResult, Logger, LoggerConfig, LoggerOption,
    NoOpLogger, Options, Output, OutputTarget, SharedBuffer,
};

// Re-export macros
pub use logbridge_core::{fields, log_debug, log_error, log_fatal, log_info, log_trace, log_warn};

// Re-export the tracing implementation
pub use logbridge_tracing::{Handler, OutputMakeWriter, TracingLogger};

// Re-export the backing libraries for hosts that build custom handlers or dispatches
pub use tracing;
pub use tracing_subscriber;

/// Every option understood by [`TracingLogger`].
///
/// `with_level` here is the backend's level option. It wins over any generic
/// level and is ignored when `with_dispatch` is in the same call.
pub mod options {
    pub use logbridge_core::{with_context_value, with_fields, with_output};
    pub use logbridge_tracing::{
        options_from_config, with_cli_handler, with_dispatch, with_handler, with_json_handler,
        with_level, with_text_handler,
    };
}

static DEFAULT_LOGGER: OnceCell<TracingLogger> = OnceCell::new();

/// Create a [`TracingLogger`] configured by `opts`
pub fn new_logger(opts: impl IntoIterator<Item = LoggerOption>) -> TracingLogger {
    TracingLogger::new(opts)
}

/// The process-wide logger.
///
/// Unless [`set_default_logger`] ran first, this is a text logger writing to
/// stderr at info level.
pub fn default_logger() -> &'static TracingLogger {
    DEFAULT_LOGGER.get_or_init(TracingLogger::default)
}

/// Install the process-wide logger.
///
/// Fails, handing the logger back, once [`default_logger`] has been used or
/// another logger was installed.
pub fn set_default_logger(logger: TracingLogger) -> Result<(), TracingLogger> {
    DEFAULT_LOGGER.set(logger)
}

/// Prelude module for convenient imports.
///
/// Use `use logbridge::prelude::*;` to import commonly used types.
///
/// This includes:
/// - The `Logger` trait and `TracingLogger`
/// - Core types: `Fields`, `LogLevel`, `Output`, `SharedBuffer`, `LoggerConfig`
/// - Handlers and the `options` module
/// - Macros: `fields!`, `log_trace!` through `log_fatal!`
pub mod prelude {
    pub use crate::options;
    pub use crate::{
        Fields, Handler, LogError, LogLevel, LogResult, Logger, LoggerConfig, LoggerOption,
        Output, SharedBuffer, TracingLogger,
    };
    pub use crate::{fields, log_debug, log_error, log_fatal, log_info, log_trace, log_warn};
}

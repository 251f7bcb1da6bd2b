//! logbridge-tracing - logbridge Logger backed by tracing
//!
//! This crate provides:
//! - [`TracingLogger`] implementing the [`Logger`] facade on top of `tracing`
//! - [`Handler`] selecting a `tracing-subscriber` output format (text, JSON, CLI or custom)
//! - Options for choosing the handler, overriding the level or supplying a dispatch
//! - Runtime level changes through [`TracingLogger::set_level`]

mod handler;
mod json;
mod level;
mod logger;
mod options;
mod reload;

pub use handler::{FilteredRegistry, Handler, HandlerLayer, LayerFactory, OutputMakeWriter};
pub use json::JsonFormat;
pub use level::{convert_level, convert_level_to_filter};
pub use logger::TracingLogger;
pub use logbridge_core::{LogLevel, Logger};
pub use options::{
    options_from_config, with_cli_handler, with_dispatch, with_handler, with_json_handler,
    with_level, with_text_handler,
};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        Handler, LogLevel, Logger, TracingLogger, with_cli_handler, with_dispatch, with_handler,
        with_json_handler, with_level, with_text_handler,
    };
}

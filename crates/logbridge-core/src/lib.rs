//! logbridge-core - Backend-agnostic logging facade
//!
//! This crate provides the types application code logs against:
//! - [`Logger`] trait with leveled and structured logging
//! - [`LogLevel`] severity levels
//! - [`Fields`] structured key/value fields
//! - [`Options`] and [`LoggerOption`] for configuring a logger
//! - [`LoggerConfig`] for loading configuration from JSON or TOML
//! - [`LogError`] for configuration errors

mod config;
mod error;
mod extensions;
mod kv;
mod level;
mod logger;
mod noop;
mod options;
mod output;

pub use config::{LoggerConfig, OutputTarget};
pub use error::{LogError, LogResult};
pub use extensions::Extensions;
pub use kv::Fields;
pub use level::LogLevel;
pub use logger::Logger;
pub use noop::NoOpLogger;
pub use options::{LoggerOption, Options, with_context_value, with_fields, with_level, with_output};
pub use output::{Output, OutputWriter, SharedBuffer};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        Fields, LogError, LogLevel, LogResult, Logger, LoggerConfig, LoggerOption, NoOpLogger,
        Options, Output, SharedBuffer,
    };
}

#[cfg(test)]
mod lib_tests;

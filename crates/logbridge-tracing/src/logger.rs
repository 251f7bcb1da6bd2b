//! [`Logger`] implementation that delegates to `tracing`

use crate::handler::Handler;
use crate::level::convert_level_to_filter;
use crate::options::{DispatchOverride, HandlerOverride, LevelOverride, options_from_config};
use crate::reload::LevelControl;
use logbridge_core::{Fields, LogLevel, LogResult, Logger, LoggerConfig, LoggerOption, Options};
use std::fmt::Arguments;
use std::sync::Arc;
use tracing::Dispatch;
use tracing_subscriber::prelude::*;
use tracing_subscriber::reload;

/// Emit one event at a constant tracing level, attaching the logger's fields
/// when it has any
macro_rules! emit {
    ($level:expr, $fields:expr, $args:expr $(, $extra:ident = $value:expr)?) => {
        if $fields.is_empty() {
            tracing::event!($level, $($extra = $value,)? "{}", $args)
        } else {
            tracing::event!($level, $($extra = $value,)? fields = %$fields, "{}", $args)
        }
    };
}

/// Logger backed by a `tracing` dispatch.
///
/// Each logger owns its dispatch (a registry, a reloadable level filter and
/// the selected [`Handler`]) unless one was supplied with
/// [`with_dispatch`](crate::with_dispatch). Calls run inside that dispatch, so
/// loggers with different outputs never interfere and no global subscriber is
/// needed.
///
/// # Example
///
/// ```
/// use logbridge_core::{Fields, Logger, SharedBuffer, with_output};
/// use logbridge_tracing::{TracingLogger, with_json_handler};
///
/// let buffer = SharedBuffer::new();
/// let logger = TracingLogger::new([with_json_handler(), with_output(buffer.clone())]);
///
/// logger
///     .fields(Fields::new().with("request_id", "r-42"))
///     .info(format_args!("request served"));
///
/// assert!(buffer.contents().contains("request served"));
/// ```
#[derive(Clone)]
pub struct TracingLogger {
    opts: Options,
    handler: Handler,
    dispatch: Dispatch,
    level: Arc<LevelControl>,
    external: bool,
}

impl TracingLogger {
    /// Create a logger from `opts`, starting from text output on stderr at
    /// info level
    pub fn new(opts: impl IntoIterator<Item = LoggerOption>) -> Self {
        let mut logger = Self::default();
        logger.configure(opts.into_iter().collect());
        logger
    }

    /// Create a logger described by `config`
    pub fn from_config(config: &LoggerConfig) -> LogResult<Self> {
        Ok(Self::new(options_from_config(config)?))
    }

    /// Change the minimum level of this logger and every logger derived from it
    pub fn set_level(&self, level: LogLevel) -> LogResult<()> {
        self.level.reload_level(level)
    }

    /// Current minimum level
    pub fn level(&self) -> LogLevel {
        self.level.level()
    }

    /// Handler the logger's dispatch was built with
    pub fn handler(&self) -> &Handler {
        &self.handler
    }

    /// The dispatch calls are routed through
    pub fn dispatch(&self) -> &Dispatch {
        &self.dispatch
    }

    /// A child logger carrying `fields` in addition to this logger's fields
    pub fn with_fields(&self, fields: &Fields) -> Self {
        let mut child = self.clone();
        child.opts.fields.merge(fields);
        child
    }

    fn configure(&mut self, opts: Vec<LoggerOption>) {
        let mut options = self.opts.clone();
        options.level = self.level.level();
        options.apply(opts);

        // Overrides apply to this call only
        let dispatch = options.context.get::<DispatchOverride>().cloned();
        let handler = options.context.get::<HandlerOverride>().cloned();
        let level = options.context.get::<LevelOverride>().copied();
        options.context.remove::<DispatchOverride>();
        options.context.remove::<HandlerOverride>();
        options.context.remove::<LevelOverride>();

        if let Some(DispatchOverride(dispatch)) = dispatch {
            self.dispatch = dispatch;
            self.level = Arc::new(LevelControl::new(options.level, None));
            self.external = true;
            self.opts = options;
            return;
        }

        if let Some(LevelOverride(level)) = level {
            options.level = level;
        }

        match handler {
            Some(HandlerOverride(handler)) => {
                self.handler = handler;
                self.rebuild(options);
            }
            // Keep logging through a dispatch supplied earlier
            None if self.external => {
                self.level.store(options.level);
                self.opts = options;
            }
            None => self.rebuild(options),
        }
    }

    fn rebuild(&mut self, options: Options) {
        let (dispatch, level) = build_dispatch(&self.handler, &options);
        self.dispatch = dispatch;
        self.level = level;
        self.external = false;
        self.opts = options;
    }
}

fn build_dispatch(handler: &Handler, options: &Options) -> (Dispatch, Arc<LevelControl>) {
    let (filter, handle) = reload::Layer::new(convert_level_to_filter(options.level));
    let subscriber = tracing_subscriber::registry()
        .with(filter)
        .with(handler.layer(&options.output));
    (
        Dispatch::new(subscriber),
        Arc::new(LevelControl::new(options.level, Some(handle))),
    )
}

impl Default for TracingLogger {
    fn default() -> Self {
        let opts = Options::default();
        let handler = Handler::default();
        let (dispatch, level) = build_dispatch(&handler, &opts);
        Self {
            opts,
            handler,
            dispatch,
            level,
            external: false,
        }
    }
}

impl Logger for TracingLogger {
    fn init(&mut self, opts: Vec<LoggerOption>) -> LogResult<()> {
        self.configure(opts);
        Ok(())
    }

    fn options(&self) -> Options {
        let mut options = self.opts.clone();
        options.level = self.level.level();
        options
    }

    fn fields(&self, fields: Fields) -> Box<dyn Logger> {
        Box::new(self.with_fields(&fields))
    }

    fn v(&self, level: LogLevel) -> bool {
        level.is_enabled_at(self.level.level())
    }

    fn log(&self, level: LogLevel, args: Arguments<'_>) {
        if !self.v(level) {
            return;
        }
        let fields = &self.opts.fields;
        tracing::dispatcher::with_default(&self.dispatch, || match level {
            LogLevel::Trace => emit!(tracing::Level::TRACE, fields, args),
            LogLevel::Debug => emit!(tracing::Level::DEBUG, fields, args),
            LogLevel::Info => emit!(tracing::Level::INFO, fields, args),
            LogLevel::Warn => emit!(tracing::Level::WARN, fields, args),
            LogLevel::Error => emit!(tracing::Level::ERROR, fields, args),
            LogLevel::Fatal => emit!(tracing::Level::ERROR, fields, args, fatal = true),
        });
    }

    fn name(&self) -> &str {
        "tracing"
    }
}

impl std::fmt::Debug for TracingLogger {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TracingLogger")
            .field("level", &self.level.level())
            .field("handler", &self.handler)
            .field("output", &self.opts.output)
            .field("fields", &self.opts.fields)
            .field("external", &self.external)
            .finish()
    }
}

//! Output handlers backed by tracing-subscriber's `fmt` layer

use crate::json::JsonFormat;
use logbridge_core::{LogError, Output, OutputWriter};
use std::str::FromStr;
use std::sync::Arc;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::fmt::{self, MakeWriter};
use tracing_subscriber::layer::{Layer, Layered};
use tracing_subscriber::{Registry, reload};

/// Subscriber stack every handler layer is attached to: the registry behind
/// a reloadable level filter
pub type FilteredRegistry = Layered<reload::Layer<LevelFilter, Registry>, Registry>;

/// A handler materialised as a tracing layer
pub type HandlerLayer = Box<dyn Layer<FilteredRegistry> + Send + Sync + 'static>;

/// Factory behind [`Handler::Custom`]
pub type LayerFactory = dyn Fn(OutputMakeWriter) -> HandlerLayer + Send + Sync;

/// [`MakeWriter`] over a facade [`Output`]
#[derive(Debug, Clone)]
pub struct OutputMakeWriter(Output);

impl OutputMakeWriter {
    pub fn new(output: Output) -> Self {
        Self(output)
    }
}

impl<'a> MakeWriter<'a> for OutputMakeWriter {
    type Writer = OutputWriter;

    fn make_writer(&'a self) -> Self::Writer {
        self.0.writer()
    }
}

/// Output formatter selected for a logger
#[derive(Clone, Default)]
pub enum Handler {
    /// Full single-line text with timestamp, no colours
    #[default]
    Text,
    /// One JSON object per line; logger fields as a nested `fields` object
    Json,
    /// Compact coloured output for terminals, no timestamp
    Cli,
    /// Any layer built by the caller around the logger's output
    Custom(Arc<LayerFactory>),
}

impl Handler {
    /// Build a handler from a layer factory.
    ///
    /// ```
    /// use logbridge_tracing::Handler;
    /// use tracing_subscriber::Layer;
    ///
    /// let handler = Handler::custom(|writer| {
    ///     tracing_subscriber::fmt::layer()
    ///         .pretty()
    ///         .with_writer(writer)
    ///         .boxed()
    /// });
    /// assert_eq!(handler.name(), "custom");
    /// ```
    pub fn custom<F>(factory: F) -> Self
    where
        F: Fn(OutputMakeWriter) -> HandlerLayer + Send + Sync + 'static,
    {
        Handler::Custom(Arc::new(factory))
    }

    pub fn name(&self) -> &'static str {
        match self {
            Handler::Text => "text",
            Handler::Json => "json",
            Handler::Cli => "cli",
            Handler::Custom(_) => "custom",
        }
    }

    /// Build the layer that writes to `output`
    pub fn layer(&self, output: &Output) -> HandlerLayer {
        let writer = OutputMakeWriter::new(output.clone());
        match self {
            Handler::Text => fmt::layer()
                .with_ansi(false)
                .with_target(false)
                .with_writer(writer)
                .boxed(),
            Handler::Json => fmt::layer()
                .event_format(JsonFormat::default())
                .with_writer(writer)
                .boxed(),
            Handler::Cli => fmt::layer()
                .compact()
                .without_time()
                .with_ansi(true)
                .with_target(false)
                .with_writer(writer)
                .boxed(),
            Handler::Custom(factory) => factory(writer),
        }
    }
}

impl std::fmt::Debug for Handler {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Handler({})", self.name())
    }
}

impl FromStr for Handler {
    type Err = LogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(Handler::Text),
            "json" => Ok(Handler::Json),
            "cli" => Ok(Handler::Cli),
            _ => Err(LogError::UnknownFormat(s.to_string())),
        }
    }
}

#[cfg(test)]
#[path = "handler/handler_tests.rs"]
mod handler_tests;

//! Output destinations for formatted log records

use parking_lot::Mutex;
use std::io::{self, Write};
use std::sync::Arc;

/// Where a logger writes its formatted records
#[derive(Clone, Default)]
pub enum Output {
    Stdout,
    #[default]
    Stderr,
    /// Any writer, shared between every logger configured with this output
    Shared(Arc<Mutex<dyn Write + Send>>),
}

impl Output {
    /// Wrap an arbitrary writer
    pub fn shared<W: Write + Send + 'static>(writer: W) -> Self {
        Output::Shared(Arc::new(Mutex::new(writer)))
    }

    /// Obtain a writer for one record
    pub fn writer(&self) -> OutputWriter {
        match self {
            Output::Stdout => OutputWriter::Stdout(io::stdout()),
            Output::Stderr => OutputWriter::Stderr(io::stderr()),
            Output::Shared(inner) => OutputWriter::Shared(Arc::clone(inner)),
        }
    }
}

impl std::fmt::Debug for Output {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Output::Stdout => write!(f, "Stdout"),
            Output::Stderr => write!(f, "Stderr"),
            Output::Shared(_) => write!(f, "Shared"),
        }
    }
}

impl From<SharedBuffer> for Output {
    fn from(buffer: SharedBuffer) -> Self {
        Output::shared(buffer)
    }
}

/// Writer handed out by [`Output::writer`].
///
/// Shared writers are locked per `write` call; backends that format a record
/// into memory and write it once keep records contiguous.
pub enum OutputWriter {
    Stdout(io::Stdout),
    Stderr(io::Stderr),
    Shared(Arc<Mutex<dyn Write + Send>>),
}

impl Write for OutputWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match self {
            OutputWriter::Stdout(w) => w.write(buf),
            OutputWriter::Stderr(w) => w.write(buf),
            OutputWriter::Shared(w) => w.lock().write(buf),
        }
    }

    fn write_all(&mut self, buf: &[u8]) -> io::Result<()> {
        match self {
            OutputWriter::Stdout(w) => w.write_all(buf),
            OutputWriter::Stderr(w) => w.write_all(buf),
            OutputWriter::Shared(w) => w.lock().write_all(buf),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        match self {
            OutputWriter::Stdout(w) => w.flush(),
            OutputWriter::Stderr(w) => w.flush(),
            OutputWriter::Shared(w) => w.lock().flush(),
        }
    }
}

/// In-memory sink whose clones all append to the same buffer.
///
/// Handy for capturing log output in tests.
#[derive(Debug, Clone, Default)]
pub struct SharedBuffer {
    inner: Arc<Mutex<Vec<u8>>>,
}

impl SharedBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything written so far, lossily decoded as UTF-8
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.inner.lock()).into_owned()
    }

    /// Non-empty lines written so far
    pub fn lines(&self) -> Vec<String> {
        self.contents()
            .lines()
            .filter(|l| !l.is_empty())
            .map(str::to_string)
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.lock().is_empty()
    }

    pub fn clear(&self) {
        self.inner.lock().clear();
    }
}

impl Write for SharedBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.inner.lock().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[cfg(test)]
#[path = "output/output_tests.rs"]
mod output_tests;

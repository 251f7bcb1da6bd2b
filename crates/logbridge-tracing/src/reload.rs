//! Runtime level changes

use crate::level::convert_level_to_filter;
use logbridge_core::{LogError, LogLevel, LogResult};
use std::sync::atomic::{AtomicU8, Ordering};
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::{Registry, reload};

/// Current level of a logger and, when the logger built its own dispatch,
/// the handle that reloads that dispatch's filter.
///
/// Shared by a logger and every child created from it with `fields`.
pub(crate) struct LevelControl {
    level: AtomicU8,
    handle: Option<reload::Handle<LevelFilter, Registry>>,
}

impl LevelControl {
    pub(crate) fn new(
        level: LogLevel,
        handle: Option<reload::Handle<LevelFilter, Registry>>,
    ) -> Self {
        Self {
            level: AtomicU8::new(level as u8),
            handle,
        }
    }

    pub(crate) fn level(&self) -> LogLevel {
        LogLevel::from_u8(self.level.load(Ordering::SeqCst))
    }

    /// Swap the filter to `level`
    pub(crate) fn reload_level(&self, level: LogLevel) -> LogResult<()> {
        if let Some(handle) = self.handle.as_ref() {
            handle
                .reload(convert_level_to_filter(level))
                .map_err(|e| LogError::Reload(e.to_string()))?;
        }
        self.store(level);
        Ok(())
    }

    /// Record `level` without touching any filter
    pub(crate) fn store(&self, level: LogLevel) {
        self.level.store(level as u8, Ordering::SeqCst);
    }
}

impl std::fmt::Debug for LevelControl {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LevelControl")
            .field("level", &self.level())
            .field("reloadable", &self.handle.is_some())
            .finish()
    }
}

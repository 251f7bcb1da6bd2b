#![allow(non_snake_case)]

use super::*;
use std::fmt::Arguments;
use std::sync::Mutex;

/// Records every forwarded call so the provided trait methods can be checked
#[derive(Default)]
struct RecordingLogger {
    min: LogLevel,
    records: Mutex<Vec<(LogLevel, String)>>,
}

impl Logger for RecordingLogger {
    fn init(&mut self, opts: Vec<LoggerOption>) -> LogResult<()> {
        self.min = Options::new(opts).level;
        Ok(())
    }

    fn options(&self) -> Options {
        Options {
            level: self.min,
            ..Options::default()
        }
    }

    fn fields(&self, _fields: Fields) -> Box<dyn Logger> {
        Box::new(NoOpLogger)
    }

    fn v(&self, level: LogLevel) -> bool {
        level.is_enabled_at(self.min)
    }

    fn log(&self, level: LogLevel, args: Arguments<'_>) {
        if self.v(level) {
            self.records.lock().unwrap().push((level, args.to_string()));
        }
    }

    fn name(&self) -> &str {
        "recording"
    }
}

#[test]
fn Logger___level_shorthands___forward_matching_level() {
    let mut logger = RecordingLogger::default();
    logger.init(vec![with_level(LogLevel::Trace)]).unwrap();

    logger.trace(format_args!("t"));
    logger.debug(format_args!("d"));
    logger.info(format_args!("i"));
    logger.warn(format_args!("w"));
    logger.error(format_args!("e"));
    logger.fatal(format_args!("f"));

    let levels: Vec<LogLevel> = logger.records.lock().unwrap().iter().map(|r| r.0).collect();
    assert_eq!(levels, LogLevel::ALL.to_vec());
}

#[test]
fn Logger___log_values___joins_with_single_space() {
    let logger = RecordingLogger::default();

    logger.log_values(LogLevel::Info, &[&"user", &42, &true]);

    let records = logger.records.lock().unwrap();
    assert_eq!(records[0].1, "user 42 true");
}

#[test]
fn Logger___log_values___skips_disabled_level() {
    let logger = RecordingLogger::default();

    logger.log_values(LogLevel::Debug, &[&"hidden"]);

    assert!(logger.records.lock().unwrap().is_empty());
}

#[test]
fn log_macros___format_arguments() {
    let logger = RecordingLogger::default();

    log_info!(logger, "listening on {}:{}", "0.0.0.0", 8080);
    log_error!(logger, "failed after {} attempts", 3);
    log_debug!(logger, "not recorded");

    let records = logger.records.lock().unwrap();
    assert_eq!(records.len(), 2);
    assert_eq!(records[0], (LogLevel::Info, "listening on 0.0.0.0:8080".to_string()));
    assert_eq!(records[1].0, LogLevel::Error);
}

#[test]
fn log_macros___work_through_trait_object() {
    let logger: Box<dyn Logger> = Box::new(NoOpLogger);

    log_trace!(logger, "{}", 1);
    log_warn!(logger, "{}", 2);
    log_fatal!(logger, "{}", 3);
}

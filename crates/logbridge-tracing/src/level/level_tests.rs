#![allow(non_snake_case)]

use super::*;
use test_case::test_case;

#[test_case(LogLevel::Trace, Level::TRACE)]
#[test_case(LogLevel::Debug, Level::DEBUG)]
#[test_case(LogLevel::Info, Level::INFO)]
#[test_case(LogLevel::Warn, Level::WARN)]
#[test_case(LogLevel::Error, Level::ERROR)]
#[test_case(LogLevel::Fatal, Level::ERROR)]
fn convert_level___maps_to_tracing_level(level: LogLevel, expected: Level) {
    assert_eq!(convert_level(level), expected);
}

#[test_case(LogLevel::Trace, LevelFilter::TRACE)]
#[test_case(LogLevel::Debug, LevelFilter::DEBUG)]
#[test_case(LogLevel::Info, LevelFilter::INFO)]
#[test_case(LogLevel::Warn, LevelFilter::WARN)]
#[test_case(LogLevel::Error, LevelFilter::ERROR)]
#[test_case(LogLevel::Fatal, LevelFilter::ERROR)]
fn convert_level_to_filter___maps_to_level_filter(level: LogLevel, expected: LevelFilter) {
    assert_eq!(convert_level_to_filter(level), expected);
}

#[test]
fn convert_level___preserves_ordering_up_to_error() {
    // tracing orders levels by verbosity: TRACE compares greatest
    let mapped: Vec<Level> = LogLevel::ALL[..5].iter().map(|l| convert_level(*l)).collect();

    assert!(mapped.windows(2).all(|w| w[0] > w[1]));
}

#[test]
fn convert_level_to_filter___enables_same_level() {
    for level in LogLevel::ALL {
        assert!(convert_level(level) <= convert_level_to_filter(level));
    }
}

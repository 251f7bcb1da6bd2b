#![allow(non_snake_case)]

use super::*;
use logbridge_core::SharedBuffer;
use test_case::test_case;

fn emit_with(handler: &Handler, buffer: &SharedBuffer) {
    use tracing_subscriber::prelude::*;

    let (filter, _handle) = reload::Layer::new(LevelFilter::TRACE);
    let subscriber = tracing_subscriber::registry()
        .with(filter)
        .with(handler.layer(&Output::from(buffer.clone())));

    tracing::subscriber::with_default(subscriber, || {
        tracing::info!(answer = 42, "handler output");
    });
}

#[test_case("text", "text")]
#[test_case("JSON", "json")]
#[test_case(" cli ", "cli")]
fn Handler___from_str___parses_known_names(input: &str, expected: &str) {
    let handler: Handler = input.parse().unwrap();

    assert_eq!(handler.name(), expected);
}

#[test]
fn Handler___from_str___rejects_unknown_name() {
    let result = "xml".parse::<Handler>();

    assert!(matches!(result, Err(LogError::UnknownFormat(name)) if name == "xml"));
}

#[test]
fn Handler___default___is_text() {
    assert_eq!(Handler::default().name(), "text");
}

#[test]
fn Handler___debug___shows_name() {
    assert_eq!(format!("{:?}", Handler::Json), "Handler(json)");
}

#[test]
fn Handler___text_layer___writes_plain_line() {
    let buffer = SharedBuffer::new();

    emit_with(&Handler::Text, &buffer);

    let out = buffer.contents();
    assert!(out.contains("handler output"), "unexpected output: {}", out);
    assert!(out.contains("answer=42"), "unexpected output: {}", out);
    assert!(!out.contains('\u{1b}'), "text output must not be colourised: {}", out);
}

#[test]
fn Handler___json_layer___writes_event_fields_at_top_level() {
    let buffer = SharedBuffer::new();

    emit_with(&Handler::Json, &buffer);

    let lines = buffer.lines();
    assert_eq!(lines.len(), 1);
    let record: serde_json::Value = serde_json::from_str(&lines[0]).unwrap();
    assert_eq!(record["level"], "INFO");
    assert_eq!(record["message"], "handler output");
    assert_eq!(record["answer"], 42);
}

#[test]
fn Handler___cli_layer___writes_ansi_colours() {
    let buffer = SharedBuffer::new();

    emit_with(&Handler::Cli, &buffer);

    let out = buffer.contents();
    assert!(out.contains("handler output"), "unexpected output: {}", out);
    assert!(out.contains("\u{1b}["), "cli output should be colourised: {}", out);
}

#[test]
fn Handler___custom_layer___receives_output_writer() {
    let buffer = SharedBuffer::new();
    let handler = Handler::custom(|writer| {
        fmt::layer()
            .with_ansi(false)
            .without_time()
            .with_level(false)
            .with_target(false)
            .with_writer(writer)
            .boxed()
    });

    emit_with(&handler, &buffer);

    let lines = buffer.lines();
    assert_eq!(lines.len(), 1);
    assert!(lines[0].contains("handler output answer=42"), "unexpected output: {}", lines[0]);
}

#[test]
fn OutputMakeWriter___make_writer___targets_output() {
    use std::io::Write;

    let buffer = SharedBuffer::new();
    let make = OutputMakeWriter::new(buffer.clone().into());

    make.make_writer().write_all(b"direct").unwrap();

    assert_eq!(buffer.contents(), "direct");
}

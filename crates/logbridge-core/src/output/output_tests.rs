#![allow(non_snake_case)]

use super::*;

#[test]
fn Output___default___is_stderr() {
    assert!(matches!(Output::default(), Output::Stderr));
}

#[test]
fn Output___from_shared_buffer___writes_into_buffer() {
    let buffer = SharedBuffer::new();
    let output = Output::from(buffer.clone());

    output.writer().write_all(b"hello\n").unwrap();

    assert_eq!(buffer.contents(), "hello\n");
}

#[test]
fn Output___writer___each_writer_appends_to_same_sink() {
    let buffer = SharedBuffer::new();
    let output = Output::from(buffer.clone());

    output.writer().write_all(b"one\n").unwrap();
    output.clone().writer().write_all(b"two\n").unwrap();

    assert_eq!(buffer.lines(), vec!["one", "two"]);
}

#[test]
fn Output___debug___hides_writer() {
    assert_eq!(format!("{:?}", Output::shared(Vec::<u8>::new())), "Shared");
}

#[test]
fn SharedBuffer___clear___empties_buffer() {
    let mut buffer = SharedBuffer::new();
    buffer.write_all(b"data").unwrap();

    buffer.clear();

    assert!(buffer.is_empty());
}

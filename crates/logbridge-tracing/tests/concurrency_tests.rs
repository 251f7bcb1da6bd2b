//! Concurrent logging tests
//!
//! Loggers are shared across threads and tasks; every record must arrive
//! whole and none may be lost.

use logbridge_core::{Fields, LogLevel, Logger, SharedBuffer, with_output};
use logbridge_tracing::{TracingLogger, with_json_handler, with_level};
use std::sync::{Arc, Barrier};
use std::thread;

fn shared_json_logger(buffer: &SharedBuffer) -> Arc<TracingLogger> {
    Arc::new(TracingLogger::new([
        with_json_handler(),
        with_level(LogLevel::Debug),
        with_output(buffer.clone()),
    ]))
}

#[test]
fn test_concurrent_threads_write_whole_records() {
    let buffer = SharedBuffer::new();
    let logger = shared_json_logger(&buffer);
    let num_threads = 8;
    let per_thread = 50;
    let barrier = Arc::new(Barrier::new(num_threads));

    let handles: Vec<_> = (0..num_threads)
        .map(|t| {
            let logger = Arc::clone(&logger);
            let barrier = Arc::clone(&barrier);
            thread::spawn(move || {
                let child = logger.fields(Fields::new().with("thread", t));
                barrier.wait();
                for i in 0..per_thread {
                    child.info(format_args!("thread {} record {}", t, i));
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().expect("logging thread panicked");
    }

    let lines = buffer.lines();
    assert_eq!(lines.len(), num_threads * per_thread);
    for line in lines {
        let record: serde_json::Value =
            serde_json::from_str(&line).expect("every line should be a complete JSON record");
        assert_eq!(record["level"], "INFO");
    }
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_tasks_share_logger() {
    let buffer = SharedBuffer::new();
    let logger = shared_json_logger(&buffer);

    let tasks: Vec<_> = (0..16)
        .map(|n| {
            let logger = Arc::clone(&logger);
            tokio::spawn(async move {
                logger.debug(format_args!("task {} started", n));
                tokio::task::yield_now().await;
                logger.debug(format_args!("task {} finished", n));
            })
        })
        .collect();

    for task in tasks {
        task.await.expect("logging task panicked");
    }

    assert_eq!(buffer.lines().len(), 32);
}

use std::io::{self, Write};
use std::panic::{self, AssertUnwindSafe};
use std::sync::{Arc, Mutex};

use result_or_error_core::{Error, ResultOrError};
use serde_json::{Value, json};
use tracing::Level;
use tracing_subscriber::fmt::writer::BoxMakeWriter;

/// In-memory sink shared between the subscriber and the test.
#[derive(Clone, Default)]
struct SharedBuffer {
    bytes: Arc<Mutex<Vec<u8>>>,
}

impl Write for SharedBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let mut bytes = self
            .bytes
            .lock()
            .map_err(|_| io::Error::new(io::ErrorKind::Other, "failed to lock log buffer"))?;
        bytes.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Run `f` under a JSON subscriber at `TRACE` and return the core's events.
fn capture_events<R>(f: impl FnOnce() -> R) -> (R, Vec<Value>) {
    let buffer = SharedBuffer::default();
    let writer = buffer.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(Level::TRACE)
        .json()
        .with_writer(BoxMakeWriter::new(move || writer.clone()))
        .finish();

    let outcome = tracing::subscriber::with_default(subscriber, f);

    let bytes = buffer.bytes.lock().unwrap().clone();
    let events = String::from_utf8(bytes)
        .unwrap()
        .lines()
        .map(|line| serde_json::from_str::<Value>(line).unwrap())
        .filter(|event| {
            event["target"]
                .as_str()
                .is_some_and(|target| target.starts_with("result_or_error_core"))
        })
        .collect();
    (outcome, events)
}

#[test]
fn contract_violation_logs_error_before_panicking() {
    let (outcome, events) = capture_events(|| {
        panic::catch_unwind(AssertUnwindSafe(|| {
            let failed: ResultOrError<u8> = Error::forbidden().into();
            let _ = failed.value();
        }))
    });

    assert!(outcome.is_err());
    assert_eq!(events.len(), 1);
    assert_eq!(events[0]["level"], "ERROR");
    assert_eq!(events[0]["fields"]["violation"], "ValueOnError");
}

#[test]
fn recovery_traces_error_count_and_primary_code() {
    let (recovered, events) = capture_events(|| {
        ResultOrError::<String>::from_errors([
            Error::not_found().with_code("User.NotFound"),
            Error::conflict(),
        ])
        .else_value_with(|errors| format!("count:{}", errors.len()))
    });

    assert_eq!(recovered.value(), "count:2");
    assert_eq!(events.len(), 1);
    assert_eq!(events[0]["level"], "TRACE");
    assert_eq!(events[0]["fields"]["handling"], "Recover");
    assert_eq!(events[0]["fields"]["error_count"], json!(2));
    assert_eq!(events[0]["fields"]["primary_code"], "User.NotFound");
}

#[test]
fn replacement_traces_as_replace() {
    let (replaced, events) = capture_events(|| {
        ResultOrError::<u8>::from_error(Error::not_found()).else_error(Error::unexpected())
    });

    assert_eq!(replaced.errors(), &[Error::unexpected()]);
    assert_eq!(events.len(), 1);
    assert_eq!(events[0]["fields"]["handling"], "Replace");
}

#[test]
fn fail_if_traces_injected_failure() {
    let (failed, events) = capture_events(|| {
        ResultOrError::from_value(5).fail_if(
            |n| *n > 3,
            Error::failure().with_code("Number.TooLarge"),
        )
    });

    assert!(failed.is_error());
    assert_eq!(events.len(), 1);
    assert_eq!(events[0]["level"], "TRACE");
    assert_eq!(events[0]["fields"]["code"], "Number.TooLarge");
    assert_eq!(events[0]["fields"]["error_type"], "Failure");
}

#[test]
fn value_path_emits_no_events() {
    let (kept, events) = capture_events(|| {
        ResultOrError::from_value(1)
            .else_value(2)
            .fail_if(|n| *n > 3, Error::failure())
            .then_map(|n| n + 1)
    });

    assert_eq!(*kept.value(), 2);
    assert!(events.is_empty());
}

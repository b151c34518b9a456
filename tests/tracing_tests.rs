#![cfg(feature = "tracing")]

//! Trace events emitted by the engines.

use std::io;
use std::sync::{Arc, Mutex, PoisonError};

use rstest::rstest;
use setwise::prelude::*;
use tracing_subscriber::EnvFilter;

/// Collects formatted events for inspection.
#[derive(Clone, Default)]
struct CapturedOutput(Arc<Mutex<Vec<u8>>>);

impl CapturedOutput {
    fn contents(&self) -> String {
        let buffer = self.0.lock().unwrap_or_else(PoisonError::into_inner);
        String::from_utf8_lossy(&buffer).into_owned()
    }
}

impl io::Write for CapturedOutput {
    fn write(&mut self, bytes: &[u8]) -> io::Result<usize> {
        self.0
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .extend_from_slice(bytes);
        Ok(bytes.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

fn capture(run: impl FnOnce()) -> String {
    let output = CapturedOutput::default();
    let writer = output.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new("setwise=trace"))
        .with_writer(move || writer.clone())
        .with_ansi(false)
        .finish();
    tracing::subscriber::with_default(subscriber, run);
    output.contents()
}

#[rstest]
fn test_reaching_the_end_is_traced() {
    let output = capture(|| {
        let _ = difference([1, 2], [2]).into_iter().count();
    });
    assert!(output.contains("reached end"));
    assert!(output.contains("difference"));
}

#[rstest]
fn test_fast_path_is_traced() {
    let output = capture(|| {
        let _ = symmetric_difference([1], [2, 3, 4]).into_iter().count();
    });
    assert!(output.contains("entered fast path"));
    assert!(output.contains("OnlySecond"));
}

#[rstest]
fn test_no_events_before_iteration() {
    let output = capture(|| {
        let _view = intersection([1, 2], [2, 3]);
    });
    assert!(output.is_empty());
}

//! Unit tests for the passthrough handler.

use std::sync::{Arc, Mutex};

use super::fixtures::{STATUS_TYPE, admin_context};
use crate::handler::adapters::memory::RecordingResponder;
use crate::handler::ports::MessageHandler;
use crate::handler::services::PassthroughHandler;
use tracing_subscriber::fmt::MakeWriter;

/// Collects formatted log output for assertions; clones share the buffer.
#[derive(Debug, Clone, Default)]
struct CapturedLog {
    buffer: Arc<Mutex<Vec<u8>>>,
}

impl CapturedLog {
    fn contents(&self) -> String {
        let buffer = self.buffer.lock().expect("log buffer lock");
        String::from_utf8_lossy(&buffer).into_owned()
    }
}

impl std::io::Write for CapturedLog {
    fn write(&mut self, data: &[u8]) -> std::io::Result<usize> {
        self.buffer
            .lock()
            .expect("log buffer lock")
            .extend_from_slice(data);
        Ok(data.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for CapturedLog {
    type Writer = Self;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

#[tokio::test]
async fn emits_one_debug_event_naming_the_wire_type() {
    let log = CapturedLog::default();
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .with_writer(log.clone())
        .finish();
    let _guard = tracing::subscriber::set_default(subscriber);

    let handler = PassthroughHandler::new();
    let responder = RecordingResponder::new();
    handler
        .handle(&admin_context(), &responder)
        .await
        .expect("passing through never fails");

    let output = log.contents();
    assert!(
        output.contains("pass: not handling message"),
        "missing event: {output}"
    );
    assert!(output.contains(STATUS_TYPE), "missing wire type: {output}");
}

#[tokio::test]
async fn sends_no_reply() {
    let handler = PassthroughHandler::new();
    let responder = RecordingResponder::new();

    handler
        .handle(&admin_context(), &responder)
        .await
        .expect("passing through never fails");

    assert!(responder.sent().expect("reply log").is_empty());
}

//! In-memory adapter implementations for the handler ports.

mod responder;

pub use responder::RecordingResponder;

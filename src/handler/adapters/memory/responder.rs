//! In-memory responder that records replies for inspection.

use crate::handler::domain::Reply;
use crate::handler::ports::{Responder, ResponderError, ResponderResult};
use async_trait::async_trait;
use std::sync::{Arc, RwLock};

/// Thread-safe responder that appends every reply to a shared log.
///
/// The test double hosts use to assert reply behaviour; clones share the
/// same log.
#[derive(Debug, Clone, Default)]
pub struct RecordingResponder {
    log: Arc<RwLock<Vec<Reply>>>,
}

impl RecordingResponder {
    /// Creates a responder with an empty log.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a snapshot of every reply sent so far, in send order.
    ///
    /// # Errors
    ///
    /// Returns `ResponderError::Transport` if the log lock was poisoned.
    pub fn sent(&self) -> ResponderResult<Vec<Reply>> {
        let log = self
            .log
            .read()
            .map_err(|err| ResponderError::transport(err.to_string()))?;
        Ok(log.clone())
    }
}

#[async_trait]
impl Responder for RecordingResponder {
    async fn send_reply(&self, reply: Reply) -> ResponderResult<()> {
        let mut log = self
            .log
            .write()
            .map_err(|err| ResponderError::transport(err.to_string()))?;
        log.push(reply);
        Ok(())
    }
}

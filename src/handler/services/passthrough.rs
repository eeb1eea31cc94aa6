//! Handler for messages that require no handling.

use crate::handler::domain::RequestContext;
use crate::handler::ports::{HandlerResult, MessageHandler, Responder};
use async_trait::async_trait;

/// Terminal handler for message types received purely for their payload.
///
/// Reply-style messages are registered against this handler so the
/// dispatcher has a route for them; it emits one debug event naming the
/// wire type and sends nothing back.
#[derive(Debug, Clone, Copy, Default)]
pub struct PassthroughHandler;

impl PassthroughHandler {
    /// Creates a passthrough handler.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

#[async_trait]
impl MessageHandler for PassthroughHandler {
    async fn handle(
        &self,
        context: &RequestContext,
        _responder: &dyn Responder,
    ) -> HandlerResult<()> {
        tracing::debug!(
            message_type = %context.message().message_type(),
            "pass: not handling message"
        );
        Ok(())
    }
}

//! Port implemented by every message handler the host dispatcher drives.

use super::responder::{Responder, ResponderError};
use crate::handler::domain::RequestContext;
use crate::protocol::error::WireError;
use async_trait::async_trait;
use thiserror::Error;

/// Result type for handler operations.
pub type HandlerResult<T> = Result<T, HandlerError>;

/// Port for handling one inbound message.
///
/// The host dispatcher resolves the handler registered for a message type,
/// builds the request context, and drives this trait. Handlers reply to the
/// remote party through the responder; returning an error signals the host,
/// never the remote party.
#[async_trait]
pub trait MessageHandler: Send + Sync {
    /// Handles one inbound message.
    ///
    /// # Errors
    ///
    /// Returns `HandlerError` if the message could not be processed or a
    /// reply could not be sent.
    async fn handle(
        &self,
        context: &RequestContext,
        responder: &dyn Responder,
    ) -> HandlerResult<()>;
}

/// Errors surfaced to the host by message handlers.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum HandlerError {
    /// Encoding or decoding a wire payload failed.
    #[error(transparent)]
    Wire(#[from] WireError),

    /// A reply could not be handed to the transport.
    #[error(transparent)]
    Responder(#[from] ResponderError),
}

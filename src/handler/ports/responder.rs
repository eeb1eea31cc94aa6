//! Port through which handlers send replies to the remote party.

use crate::handler::domain::Reply;
use async_trait::async_trait;
use thiserror::Error;

/// Result type for responder operations.
pub type ResponderResult<T> = Result<T, ResponderError>;

/// Port for sending replies over the connection a message arrived on.
///
/// Implementations belong to the host transport layer; handlers only ever
/// see the trait. A reply handed to the responder is owned by the transport
/// from that point on.
#[async_trait]
pub trait Responder: Send + Sync {
    /// Sends one reply to the remote party.
    ///
    /// # Errors
    ///
    /// Returns `ResponderError` if the reply could not be handed to the
    /// transport.
    async fn send_reply(&self, reply: Reply) -> ResponderResult<()>;
}

/// Errors that can occur while sending a reply.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ResponderError {
    /// The connection was closed before the reply could be sent.
    #[error("connection closed before the reply could be sent")]
    ConnectionClosed,

    /// The transport rejected or failed to deliver the reply.
    #[error("transport failure: {detail}")]
    Transport {
        /// Description of the underlying transport failure.
        detail: String,
    },
}

impl ResponderError {
    /// Creates a transport error from a failure description.
    #[must_use]
    pub fn transport(detail: impl Into<String>) -> Self {
        Self::Transport {
            detail: detail.into(),
        }
    }
}

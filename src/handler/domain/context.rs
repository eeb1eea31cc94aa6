//! Per-request context handed to message handlers.

use super::PeerRole;
use crate::protocol::domain::MessageModel;

/// Metadata about the connection an inbound message arrived on.
///
/// The host transport layer establishes connections and assigns roles; this
/// crate only reads the record. A connection starts with no role.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConnectionRecord {
    label: String,
    their_role: Option<PeerRole>,
}

impl ConnectionRecord {
    /// Creates a record for a connection with no assigned role.
    #[must_use]
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            their_role: None,
        }
    }

    /// Grants the remote party a role.
    #[must_use]
    pub fn with_role(mut self, role: PeerRole) -> Self {
        self.their_role = Some(role);
        self
    }

    /// Returns the host-assigned connection label.
    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Returns the role granted to the remote party, when one was assigned.
    #[must_use]
    pub const fn their_role(&self) -> Option<&PeerRole> {
        self.their_role.as_ref()
    }
}

/// Everything a handler learns about one inbound message.
///
/// Built by the host dispatcher per invocation: the decoded message plus
/// the connection it arrived on. Messages that arrive outside an
/// established connection carry no connection record.
#[derive(Debug, Clone, PartialEq)]
pub struct RequestContext {
    message: MessageModel,
    connection: Option<ConnectionRecord>,
}

impl RequestContext {
    /// Creates a context for a message with no connection attached.
    #[must_use]
    pub const fn new(message: MessageModel) -> Self {
        Self {
            message,
            connection: None,
        }
    }

    /// Attaches the connection the message arrived on.
    #[must_use]
    pub fn with_connection(mut self, connection: ConnectionRecord) -> Self {
        self.connection = Some(connection);
        self
    }

    /// Returns the decoded inbound message.
    #[must_use]
    pub const fn message(&self) -> &MessageModel {
        &self.message
    }

    /// Returns the connection the message arrived on, when known.
    #[must_use]
    pub const fn connection(&self) -> Option<&ConnectionRecord> {
        self.connection.as_ref()
    }
}

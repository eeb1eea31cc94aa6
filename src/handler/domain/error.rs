//! Error types for handler domain validation and parsing.

use thiserror::Error;

/// Errors returned while constructing handler domain values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum HandlerDomainError {
    /// The peer role is empty after trimming.
    #[error("peer role must not be empty")]
    EmptyPeerRole,
}

/// Error returned while parsing a retry party from its wire spelling.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown retry party: {0}")]
pub struct ParseRetryPartyError(pub String);

//! Validated peer role type.

use super::HandlerDomainError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Role label granted to connections trusted with admin protocols.
const ADMIN_ROLE: &str = "admin";

/// Validated role label assigned to the remote party of a connection.
///
/// Roles are opaque labels the host assigns when a connection is
/// established. They are compared verbatim: `"Admin"` and `"admin"` are
/// different roles.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PeerRole(String);

impl PeerRole {
    /// Creates a validated peer role.
    ///
    /// The label is stored verbatim; only blank labels are rejected.
    ///
    /// # Errors
    ///
    /// Returns [`HandlerDomainError::EmptyPeerRole`] when the label is empty
    /// after trimming.
    pub fn new(value: impl Into<String>) -> Result<Self, HandlerDomainError> {
        let label = value.into();
        if label.trim().is_empty() {
            return Err(HandlerDomainError::EmptyPeerRole);
        }
        Ok(Self(label))
    }

    /// Returns the role granted to connections trusted with admin protocols.
    #[must_use]
    pub fn admin() -> Self {
        Self(ADMIN_ROLE.to_owned())
    }

    /// Returns the role label as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for PeerRole {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for PeerRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

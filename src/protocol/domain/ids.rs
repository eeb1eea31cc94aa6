//! Identifier newtypes for messages, wire types, and handler routing.
//!
//! These wrap raw UUIDs and strings to prevent accidental mixing of the
//! different identifier spaces and to centralise their validation.

use crate::protocol::error::ConfigurationError;
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Unique identifier for a single message instance.
///
/// # Examples
///
/// ```
/// use herald::protocol::domain::MessageId;
///
/// let id = MessageId::new();
/// assert!(!id.as_ref().is_nil());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MessageId(Uuid);

impl MessageId {
    /// Creates a new random message identifier.
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Creates a message identifier from an existing UUID.
    #[must_use]
    pub const fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Returns the inner UUID value.
    #[must_use]
    pub const fn into_inner(self) -> Uuid {
        self.0
    }
}

/// Note: This implementation generates a new random UUID on each call,
/// which is non-standard behaviour for `Default`. Use `MessageId::new()`
/// if the intent to generate a random ID should be explicit.
impl Default for MessageId {
    fn default() -> Self {
        Self::new()
    }
}

impl AsRef<Uuid> for MessageId {
    fn as_ref(&self) -> &Uuid {
        &self.0
    }
}

impl fmt::Display for MessageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Verbatim wire identifier of a message type.
///
/// The identifier is stored exactly as given: it is never trimmed, cased,
/// or prefixed, and the serialiser writes it into `@type` untouched. Hosts
/// that version or namespace their protocols do so in this string.
///
/// # Examples
///
/// ```
/// use herald::protocol::domain::MessageTypeUri;
///
/// let uri = MessageTypeUri::new("test-protocol/1.0/ping").expect("non-empty");
/// assert_eq!(uri.as_str(), "test-protocol/1.0/ping");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MessageTypeUri(String);

impl MessageTypeUri {
    /// Creates a wire identifier, stored verbatim.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigurationError::EmptyMessageType`] when the value is
    /// empty or whitespace.
    pub fn new(value: impl Into<String>) -> Result<Self, ConfigurationError> {
        let raw = value.into();
        if raw.trim().is_empty() {
            return Err(ConfigurationError::EmptyMessageType);
        }
        Ok(Self(raw))
    }

    /// Returns the identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for MessageTypeUri {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for MessageTypeUri {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Opaque locator for the handler a message type routes to.
///
/// The core never interprets this value; it is carried through generation
/// and registration so the host dispatcher can wire each message type to
/// its handling unit.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HandlerLocator(String);

impl HandlerLocator {
    /// Creates a handler locator.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigurationError::EmptyHandlerLocator`] when the value is
    /// empty or whitespace.
    pub fn new(value: impl Into<String>) -> Result<Self, ConfigurationError> {
        let raw = value.into();
        if raw.trim().is_empty() {
            return Err(ConfigurationError::EmptyHandlerLocator);
        }
        Ok(Self(raw))
    }

    /// Returns the locator as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for HandlerLocator {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for HandlerLocator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

//! Error types for message-type generation and wire (de)serialisation.
//!
//! Uses `thiserror` for ergonomic error handling with typed variants
//! that can be inspected by callers.

use crate::timestamp::TimestampParseError;
use thiserror::Error;

/// Errors raised while generating or registering message types.
///
/// These are load-time failures: a protocol module that hits one aborts its
/// whole registration rather than continuing with a partial type set.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigurationError {
    /// The descriptor's model name is empty or whitespace.
    #[error("message type name must not be empty")]
    EmptyName,

    /// The wire message-type identifier is empty or whitespace.
    #[error("message type identifier must not be empty")]
    EmptyMessageType,

    /// The handler locator is empty or whitespace.
    #[error("handler locator must not be empty")]
    EmptyHandlerLocator,

    /// A declared payload field has an empty name.
    #[error("field names must not be empty")]
    EmptyFieldName,

    /// A declared payload field collides with the envelope key space.
    #[error("field name '{0}' is reserved; '@' and '~' prefixes belong to the envelope")]
    ReservedFieldName(String),

    /// The same payload field was declared twice.
    #[error("duplicate field '{0}' in message type declaration")]
    DuplicateField(String),

    /// The descriptor's field source is not a shape the factory understands.
    #[error("field source must be a JSON object of codec specs, got {found}")]
    UnsupportedFieldSource {
        /// JSON type of the rejected source.
        found: String,
    },

    /// A manifest entry did not parse as a codec spec.
    #[error("field '{field}' has an invalid codec spec: {detail}")]
    InvalidCodecSpec {
        /// The field whose spec was rejected.
        field: String,
        /// Parser description of the failure.
        detail: String,
    },

    /// A message type with this wire identifier is already registered.
    #[error("message type '{0}' is already registered")]
    DuplicateMessageType(String),
}

/// Errors raised while building, encoding, or decoding message instances.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WireError {
    /// The payload is not a JSON object.
    #[error("message payload must be a JSON object")]
    NotAnObject,

    /// The payload carries no `@type` property.
    #[error("message payload is missing '@type'")]
    MissingType,

    /// The payload's `@type` does not match the generated type decoding it.
    #[error("payload declares type '{found}' where '{expected}' was required")]
    TypeMismatch {
        /// The wire identifier of the decoding type.
        expected: String,
        /// The wire identifier the payload declared.
        found: String,
    },

    /// An envelope key (`@id`, `~thread`) has the wrong shape.
    #[error("invalid message envelope: {0}")]
    InvalidEnvelope(String),

    /// A payload key does not name a declared field.
    #[error("unknown field '{0}' for this message type")]
    UnknownField(String),

    /// A required field is absent (or null) where a value was needed.
    #[error("required field '{0}' is missing")]
    MissingField(String),

    /// A field value does not match its declared codec.
    #[error("field '{field}' must be {expected}")]
    InvalidFieldValue {
        /// The offending field.
        field: String,
        /// Description of the shape the codec accepts.
        expected: String,
    },

    /// A timestamp field holds text the timestamp codec rejects.
    #[error("field '{field}' holds an invalid timestamp: {source}")]
    InvalidTimestamp {
        /// The offending field.
        field: String,
        /// The underlying parse failure.
        source: TimestampParseError,
    },
}

impl WireError {
    /// Creates an envelope-shape error.
    #[must_use]
    pub fn invalid_envelope(detail: impl Into<String>) -> Self {
        Self::InvalidEnvelope(detail.into())
    }

    /// Creates an unknown-field error.
    #[must_use]
    pub fn unknown_field(field: impl Into<String>) -> Self {
        Self::UnknownField(field.into())
    }

    /// Creates a missing-required-field error.
    #[must_use]
    pub fn missing_field(field: impl Into<String>) -> Self {
        Self::MissingField(field.into())
    }

    /// Creates a codec-shape error.
    #[must_use]
    pub fn invalid_field_value(field: impl Into<String>, expected: impl Into<String>) -> Self {
        Self::InvalidFieldValue {
            field: field.into(),
            expected: expected.into(),
        }
    }
}

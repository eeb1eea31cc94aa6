//! Declarative message type descriptors.
//!
//! A descriptor is the load-time input to the factory: a model name, a
//! handler locator, the verbatim wire identifier, and a source for the
//! declared payload fields.

use super::codec::FieldCodec;
use super::generated::SchemaTypeDef;
use super::ids::{HandlerLocator, MessageTypeUri};
use serde_json::Value;
use std::sync::Arc;

/// Where a descriptor's payload fields come from.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldSource {
    /// Ordered `(name, codec)` pairs declared in code.
    Inline(Vec<(String, FieldCodec)>),
    /// The declared fields of a previously generated schema.
    Schema(Arc<SchemaTypeDef>),
    /// A JSON object of codec specs, as found in a plugin manifest.
    ///
    /// Field order follows the JSON parser's object ordering. Anything other
    /// than an object is rejected at generation time.
    Manifest(Value),
}

impl FieldSource {
    /// An inline source with no declared fields.
    #[must_use]
    pub const fn empty() -> Self {
        Self::Inline(Vec::new())
    }

    /// Builds an inline source from `(name, codec)` pairs.
    #[must_use]
    pub fn inline<N>(pairs: impl IntoIterator<Item = (N, FieldCodec)>) -> Self
    where
        N: Into<String>,
    {
        Self::Inline(
            pairs
                .into_iter()
                .map(|(name, codec)| (name.into(), codec))
                .collect(),
        )
    }
}

/// Declarative description of one message type.
///
/// # Examples
///
/// ```
/// use herald::protocol::domain::{
///     FieldCodec, FieldSource, HandlerLocator, MessageDescriptor, MessageTypeUri,
/// };
///
/// let descriptor = MessageDescriptor::new(
///     "Ping",
///     HandlerLocator::new("pings.PingHandler").expect("non-empty"),
///     MessageTypeUri::new("test-protocol/1.0/ping").expect("non-empty"),
///     FieldSource::inline([("comment", FieldCodec::text().optional())]),
/// );
/// assert_eq!(descriptor.name(), "Ping");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct MessageDescriptor {
    name: String,
    handler: HandlerLocator,
    message_type: MessageTypeUri,
    fields: FieldSource,
}

impl MessageDescriptor {
    /// Creates a descriptor.
    ///
    /// Construction is infallible; the factory validates the parts that can
    /// only be judged together (name emptiness, field name uniqueness, the
    /// field source's shape).
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        handler: HandlerLocator,
        message_type: MessageTypeUri,
        fields: FieldSource,
    ) -> Self {
        Self {
            name: name.into(),
            handler,
            message_type,
            fields,
        }
    }

    /// Returns the model name the generated pair will carry.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the handler locator.
    #[must_use]
    pub const fn handler(&self) -> &HandlerLocator {
        &self.handler
    }

    /// Returns the verbatim wire identifier.
    #[must_use]
    pub const fn message_type(&self) -> &MessageTypeUri {
        &self.message_type
    }

    /// Returns the payload field source.
    #[must_use]
    pub const fn fields(&self) -> &FieldSource {
        &self.fields
    }
}

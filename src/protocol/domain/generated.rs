//! Generated message type definitions.
//!
//! The factory turns each descriptor into a model/schema pair. Both halves
//! are immutable after generation and shared as `Arc`s, so unbounded
//! concurrent readers need no further synchronisation.

use super::codec::FieldCodec;
use super::ids::{HandlerLocator, MessageTypeUri};
use std::sync::Arc;

/// One declared payload field of a generated schema.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldDef {
    name: String,
    codec: FieldCodec,
}

impl FieldDef {
    /// Creates a field definition.
    #[must_use]
    pub fn new(name: impl Into<String>, codec: FieldCodec) -> Self {
        Self {
            name: name.into(),
            codec,
        }
    }

    /// Returns the field name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the field's codec.
    #[must_use]
    pub const fn codec(&self) -> &FieldCodec {
        &self.codec
    }

    /// Returns whether the field must be present on the wire.
    #[must_use]
    pub const fn is_required(&self) -> bool {
        self.codec.is_required()
    }
}

/// The schema half of a generated pair: the ordered declared fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchemaTypeDef {
    name: String,
    model_name: String,
    fields: Vec<FieldDef>,
}

impl SchemaTypeDef {
    pub(crate) fn new(
        name: impl Into<String>,
        model_name: impl Into<String>,
        fields: Vec<FieldDef>,
    ) -> Self {
        Self {
            name: name.into(),
            model_name: model_name.into(),
            fields,
        }
    }

    /// Returns the schema name (`<model>Schema`).
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the name of the paired model type.
    #[must_use]
    pub fn model_name(&self) -> &str {
        &self.model_name
    }

    /// Returns the declared fields in declaration order.
    #[must_use]
    pub fn fields(&self) -> &[FieldDef] {
        &self.fields
    }

    /// Looks up a declared field by name.
    #[must_use]
    pub fn field(&self, name: &str) -> Option<&FieldDef> {
        self.fields.iter().find(|field| field.name() == name)
    }
}

/// The model half of a generated pair: routing and identity metadata.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelTypeDef {
    name: String,
    handler: HandlerLocator,
    message_type: MessageTypeUri,
    schema_name: String,
}

impl ModelTypeDef {
    pub(crate) fn new(
        name: impl Into<String>,
        handler: HandlerLocator,
        message_type: MessageTypeUri,
        schema_name: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            handler,
            message_type,
            schema_name: schema_name.into(),
        }
    }

    /// Returns the model name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the handler locator the host dispatcher routes to.
    #[must_use]
    pub const fn handler(&self) -> &HandlerLocator {
        &self.handler
    }

    /// Returns the verbatim wire identifier the serialiser writes.
    #[must_use]
    pub const fn message_type(&self) -> &MessageTypeUri {
        &self.message_type
    }

    /// Returns the name of the paired schema type.
    #[must_use]
    pub fn schema_name(&self) -> &str {
        &self.schema_name
    }
}

/// A generated model/schema pair.
///
/// Hosts hold these as `Arc<GeneratedMessageType>`: one shared definition
/// per message type, minted at load time and read-only afterwards. Message
/// instances keep a handle to their definition, which is what makes
/// decoding produce instances of exactly the type that was registered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedMessageType {
    model: ModelTypeDef,
    schema: Arc<SchemaTypeDef>,
}

impl GeneratedMessageType {
    pub(crate) const fn new(model: ModelTypeDef, schema: Arc<SchemaTypeDef>) -> Self {
        Self { model, schema }
    }

    /// Returns the model metadata.
    #[must_use]
    pub const fn model(&self) -> &ModelTypeDef {
        &self.model
    }

    /// Returns the schema definition.
    #[must_use]
    pub fn schema(&self) -> &SchemaTypeDef {
        &self.schema
    }

    /// Returns a shareable handle to the schema, for composing descriptors
    /// from previously generated types.
    #[must_use]
    pub fn schema_handle(&self) -> Arc<SchemaTypeDef> {
        Arc::clone(&self.schema)
    }

    /// Returns the verbatim wire identifier.
    #[must_use]
    pub const fn message_type(&self) -> &MessageTypeUri {
        self.model.message_type()
    }

    /// Returns the handler locator.
    #[must_use]
    pub const fn handler(&self) -> &HandlerLocator {
        self.model.handler()
    }
}

//! Message type generation.
//!
//! Turns one [`MessageDescriptor`] into a [`GeneratedMessageType`]: the
//! model/schema pair hosts register and hand out. Every call mints a fresh,
//! independent pair; generation has no side effects and no shared state, so
//! registration is entirely the caller's concern.

use crate::protocol::domain::{
    FieldCodec, FieldDef, FieldSource, GeneratedMessageType, MessageDescriptor, ModelTypeDef,
    SchemaTypeDef,
};
use crate::protocol::error::ConfigurationError;
use serde_json::Value;
use std::collections::HashSet;
use std::sync::Arc;

/// Generates the model/schema pair for one descriptor.
///
/// The schema is named `<name>Schema` and carries the resolved fields in
/// declaration order; the model carries the handler locator, the verbatim
/// wire identifier, and the paired schema name.
///
/// # Errors
///
/// Returns a [`ConfigurationError`] when the descriptor's name is empty,
/// the field source is not a supported shape, a codec spec fails to parse,
/// or the resolved field names are empty, reserved, or duplicated.
///
/// # Examples
///
/// ```
/// use herald::protocol::domain::{
///     FieldCodec, FieldSource, HandlerLocator, MessageDescriptor, MessageTypeUri,
/// };
/// use herald::protocol::generate_message_type;
///
/// let descriptor = MessageDescriptor::new(
///     "Status",
///     HandlerLocator::new("status.StatusHandler").expect("non-empty"),
///     MessageTypeUri::new("admin/1.0/status").expect("non-empty"),
///     FieldSource::inline([
///         ("queued", FieldCodec::integer()),
///         ("updated_at", FieldCodec::timestamp().optional()),
///     ]),
/// );
///
/// let generated = generate_message_type(&descriptor).expect("valid descriptor");
/// assert_eq!(generated.model().schema_name(), "StatusSchema");
/// assert_eq!(generated.schema().fields().len(), 2);
/// ```
pub fn generate_message_type(
    descriptor: &MessageDescriptor,
) -> Result<GeneratedMessageType, ConfigurationError> {
    let name = descriptor.name().trim();
    if name.is_empty() {
        return Err(ConfigurationError::EmptyName);
    }

    let fields = resolve_fields(descriptor.fields())?;
    validate_fields(&fields)?;

    let schema_name = format!("{name}Schema");
    let model = ModelTypeDef::new(
        name,
        descriptor.handler().clone(),
        descriptor.message_type().clone(),
        schema_name.clone(),
    );
    let schema = SchemaTypeDef::new(schema_name, name, fields);
    Ok(GeneratedMessageType::new(model, Arc::new(schema)))
}

/// Resolves a field source into concrete field definitions.
fn resolve_fields(source: &FieldSource) -> Result<Vec<FieldDef>, ConfigurationError> {
    match source {
        FieldSource::Inline(pairs) => Ok(pairs
            .iter()
            .map(|(name, codec)| FieldDef::new(name.clone(), codec.clone()))
            .collect()),
        FieldSource::Schema(schema) => Ok(schema.fields().to_vec()),
        FieldSource::Manifest(manifest) => manifest_fields(manifest),
    }
}

/// Parses a manifest object of codec specs into field definitions.
fn manifest_fields(manifest: &Value) -> Result<Vec<FieldDef>, ConfigurationError> {
    let object = manifest
        .as_object()
        .ok_or_else(|| ConfigurationError::UnsupportedFieldSource {
            found: json_type_name(manifest).to_owned(),
        })?;
    let mut fields = Vec::with_capacity(object.len());
    for (name, spec) in object {
        let codec: FieldCodec = serde_json::from_value(spec.clone()).map_err(|error| {
            ConfigurationError::InvalidCodecSpec {
                field: name.clone(),
                detail: error.to_string(),
            }
        })?;
        fields.push(FieldDef::new(name.clone(), codec));
    }
    Ok(fields)
}

/// Enforces the field name invariants: non-empty, outside the reserved
/// envelope prefixes, and unique.
fn validate_fields(fields: &[FieldDef]) -> Result<(), ConfigurationError> {
    let mut seen = HashSet::with_capacity(fields.len());
    for field in fields {
        let name = field.name();
        if name.trim().is_empty() {
            return Err(ConfigurationError::EmptyFieldName);
        }
        if name.starts_with('@') || name.starts_with('~') {
            return Err(ConfigurationError::ReservedFieldName(name.to_owned()));
        }
        if !seen.insert(name) {
            return Err(ConfigurationError::DuplicateField(name.to_owned()));
        }
    }
    Ok(())
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

//! Message instances of generated types.
//!
//! A [`MessageModel`] binds payload values to one generated definition and
//! owns the wire contract: `to_wire` emits the `@type`/`@id`/`~thread`
//! envelope followed by the declared fields, and `from_wire` only accepts
//! payloads whose `@type` matches the definition verbatim.

use super::envelope::{MessageEnvelope, ThreadInfo};
use super::generated::GeneratedMessageType;
use super::ids::{MessageId, MessageTypeUri};
use crate::protocol::error::WireError;
use serde_json::{Map, Value};
use std::collections::BTreeMap;
use std::sync::Arc;
use uuid::Uuid;

/// Reserved envelope keys; payload fields may not use them.
pub(crate) const TYPE_KEY: &str = "@type";
pub(crate) const ID_KEY: &str = "@id";
pub(crate) const THREAD_KEY: &str = "~thread";

/// One message instance, bound to its generated definition.
///
/// # Examples
///
/// ```
/// use herald::protocol::domain::{
///     FieldCodec, FieldSource, HandlerLocator, MessageDescriptor, MessageModel, MessageTypeUri,
/// };
/// use herald::protocol::generate_message_type;
/// use std::sync::Arc;
///
/// let descriptor = MessageDescriptor::new(
///     "Ping",
///     HandlerLocator::new("pings.PingHandler").expect("non-empty"),
///     MessageTypeUri::new("test-protocol/1.0/ping").expect("non-empty"),
///     FieldSource::inline([("comment", FieldCodec::text().optional())]),
/// );
/// let ping = Arc::new(generate_message_type(&descriptor).expect("valid descriptor"));
///
/// let message = MessageModel::builder(Arc::clone(&ping))
///     .with_value("comment", "still here?")
///     .build()
///     .expect("declared field");
/// let wire = message.to_wire().expect("complete message");
/// assert_eq!(wire["@type"], "test-protocol/1.0/ping");
///
/// let decoded = MessageModel::from_wire(ping, &wire).expect("round trip");
/// assert_eq!(decoded.value("comment"), message.value("comment"));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct MessageModel {
    def: Arc<GeneratedMessageType>,
    envelope: MessageEnvelope,
    values: BTreeMap<String, Value>,
}

impl MessageModel {
    /// Creates an empty instance with a fresh envelope.
    #[must_use]
    pub fn new(def: Arc<GeneratedMessageType>) -> Self {
        Self {
            def,
            envelope: MessageEnvelope::new(),
            values: BTreeMap::new(),
        }
    }

    /// Returns a builder for constructing an instance field by field.
    #[must_use]
    pub fn builder(def: Arc<GeneratedMessageType>) -> MessageModelBuilder {
        MessageModelBuilder::new(def)
    }

    /// Returns the generated definition this instance is bound to.
    #[must_use]
    pub const fn definition(&self) -> &Arc<GeneratedMessageType> {
        &self.def
    }

    /// Returns the verbatim wire identifier of this instance's type.
    #[must_use]
    pub fn message_type(&self) -> &MessageTypeUri {
        self.def.message_type()
    }

    /// Returns the envelope.
    #[must_use]
    pub const fn envelope(&self) -> &MessageEnvelope {
        &self.envelope
    }

    /// Returns the message identifier.
    #[must_use]
    pub const fn id(&self) -> MessageId {
        self.envelope.id()
    }

    /// Returns the effective thread identifier (thid, else the own id).
    #[must_use]
    pub fn thread_id(&self) -> MessageId {
        self.envelope.thread_id()
    }

    /// Returns the value of a declared field, when set.
    #[must_use]
    pub fn value(&self, field: &str) -> Option<&Value> {
        self.values.get(field)
    }

    /// Sets a declared field to a codec-checked value.
    ///
    /// # Errors
    ///
    /// Returns [`WireError::UnknownField`] for an undeclared name, or the
    /// codec's shape error for an ill-shaped value.
    pub fn set_value(&mut self, field: &str, value: impl Into<Value>) -> Result<(), WireError> {
        let resolved = value.into();
        let declared = self
            .def
            .schema()
            .field(field)
            .ok_or_else(|| WireError::unknown_field(field))?;
        declared.codec().check(field, &resolved)?;
        self.values.insert(field.to_owned(), resolved);
        Ok(())
    }

    /// Adopts the thread of the message this one answers; see
    /// [`MessageEnvelope::assign_thread_from`].
    pub fn assign_thread_from(&mut self, source: &Self) {
        self.envelope.assign_thread_from(source.envelope());
    }

    /// Serialises this instance to its wire form.
    ///
    /// Emits `@type` (the definition's identifier, verbatim), `@id`,
    /// `~thread` when the message is threaded, and every declared field
    /// holding a value. Absent optional fields are omitted.
    ///
    /// # Errors
    ///
    /// Returns [`WireError::MissingField`] when a required field holds no
    /// value.
    pub fn to_wire(&self) -> Result<Value, WireError> {
        let mut wire = Map::new();
        wire.insert(
            TYPE_KEY.to_owned(),
            Value::String(self.message_type().as_str().to_owned()),
        );
        wire.insert(ID_KEY.to_owned(), Value::String(self.id().to_string()));
        if let Some(thread) = self.envelope.thread() {
            wire.insert(THREAD_KEY.to_owned(), thread_to_wire(thread));
        }
        for field in self.def.schema().fields() {
            match self.values.get(field.name()) {
                Some(value) => {
                    wire.insert(field.name().to_owned(), value.clone());
                }
                None if field.is_required() => {
                    return Err(WireError::missing_field(field.name()));
                }
                None => {}
            }
        }
        Ok(Value::Object(wire))
    }

    /// Deserialises a wire payload into an instance of `def`.
    ///
    /// The payload must be a JSON object whose `@type` equals the
    /// definition's identifier exactly. A missing `@id` is given a fresh
    /// identifier. Declared fields are codec-checked; a null value counts
    /// as absent. Unknown `~`-prefixed decorator keys and `@`-prefixed
    /// framework keys belong to the host layer and are ignored; any other
    /// unknown key is rejected.
    ///
    /// # Errors
    ///
    /// Returns a [`WireError`] describing the first contract violation:
    /// non-object payload, missing or mismatched `@type`, a malformed
    /// envelope key, an unknown field, an ill-shaped value, or a missing
    /// required field.
    pub fn from_wire(def: Arc<GeneratedMessageType>, payload: &Value) -> Result<Self, WireError> {
        let object = payload.as_object().ok_or(WireError::NotAnObject)?;

        let declared_type = object
            .get(TYPE_KEY)
            .ok_or(WireError::MissingType)?
            .as_str()
            .ok_or_else(|| WireError::invalid_envelope("'@type' must be a string"))?;
        let expected_type = def.message_type().as_str();
        if declared_type != expected_type {
            return Err(WireError::TypeMismatch {
                expected: expected_type.to_owned(),
                found: declared_type.to_owned(),
            });
        }

        let id = object
            .get(ID_KEY)
            .map_or_else(|| Ok(MessageId::new()), |raw| parse_wire_id(raw, ID_KEY))?;
        let mut envelope = MessageEnvelope::new_with_id(id);
        if let Some(raw_thread) = object.get(THREAD_KEY) {
            envelope.set_thread(thread_from_wire(raw_thread)?);
        }

        let mut values = BTreeMap::new();
        for (key, value) in object {
            if key == TYPE_KEY || key == ID_KEY || key == THREAD_KEY {
                continue;
            }
            if key.starts_with('~') || key.starts_with('@') {
                continue;
            }
            let field = def
                .schema()
                .field(key)
                .ok_or_else(|| WireError::unknown_field(key))?;
            if value.is_null() {
                continue;
            }
            field.codec().check(key, value)?;
            values.insert(key.clone(), value.clone());
        }

        for field in def.schema().fields() {
            if field.is_required() && !values.contains_key(field.name()) {
                return Err(WireError::missing_field(field.name()));
            }
        }

        Ok(Self {
            def,
            envelope,
            values,
        })
    }
}

pub(crate) fn thread_to_wire(thread: ThreadInfo) -> Value {
    let mut wire = Map::new();
    wire.insert("thid".to_owned(), Value::String(thread.thid().to_string()));
    if let Some(pthid) = thread.pthid() {
        wire.insert("pthid".to_owned(), Value::String(pthid.to_string()));
    }
    Value::Object(wire)
}

fn thread_from_wire(raw: &Value) -> Result<ThreadInfo, WireError> {
    let object = raw
        .as_object()
        .ok_or_else(|| WireError::invalid_envelope("'~thread' must be an object"))?;
    let thid_raw = object
        .get("thid")
        .ok_or_else(|| WireError::invalid_envelope("'~thread' requires a 'thid'"))?;
    let mut thread = ThreadInfo::new(parse_wire_id(thid_raw, "thid")?);
    if let Some(pthid_raw) = object.get("pthid") {
        thread = thread.with_parent(parse_wire_id(pthid_raw, "pthid")?);
    }
    Ok(thread)
}

fn parse_wire_id(raw: &Value, key: &str) -> Result<MessageId, WireError> {
    let text = raw
        .as_str()
        .ok_or_else(|| WireError::invalid_envelope(format!("'{key}' must be a string")))?;
    let uuid = Uuid::parse_str(text).map_err(|error| {
        WireError::invalid_envelope(format!("'{key}' is not a valid message id: {error}"))
    })?;
    Ok(MessageId::from_uuid(uuid))
}

/// Builder for constructing message instances with full control over the
/// envelope and payload.
///
/// Values are recorded in call order; when a field is supplied twice the
/// last value wins. Validation happens in [`build`](Self::build).
#[derive(Debug)]
pub struct MessageModelBuilder {
    def: Arc<GeneratedMessageType>,
    id: Option<MessageId>,
    thread: Option<ThreadInfo>,
    pending: Vec<(String, Value)>,
}

impl MessageModelBuilder {
    /// Creates a builder for instances of `def`.
    #[must_use]
    pub const fn new(def: Arc<GeneratedMessageType>) -> Self {
        Self {
            def,
            id: None,
            thread: None,
            pending: Vec::new(),
        }
    }

    /// Fixes the message identifier instead of minting a fresh one.
    #[must_use]
    pub const fn with_id(mut self, id: MessageId) -> Self {
        self.id = Some(id);
        self
    }

    /// Threads the message explicitly.
    #[must_use]
    pub const fn with_thread(mut self, thread: ThreadInfo) -> Self {
        self.thread = Some(thread);
        self
    }

    /// Supplies a value for a declared field.
    #[must_use]
    pub fn with_value(mut self, field: impl Into<String>, value: impl Into<Value>) -> Self {
        self.pending.push((field.into(), value.into()));
        self
    }

    /// Validates the collected values and produces the instance.
    ///
    /// # Errors
    ///
    /// Returns [`WireError::UnknownField`] for a name the schema does not
    /// declare, or the codec's shape error for an ill-shaped value.
    pub fn build(self) -> Result<MessageModel, WireError> {
        let Self {
            def,
            id,
            thread,
            pending,
        } = self;
        let mut values = BTreeMap::new();
        for (name, value) in pending {
            let field = def
                .schema()
                .field(&name)
                .ok_or_else(|| WireError::unknown_field(&name))?;
            field.codec().check(&name, &value)?;
            values.insert(name, value);
        }
        let mut envelope = id.map_or_else(MessageEnvelope::new, MessageEnvelope::new_with_id);
        if let Some(info) = thread {
            envelope.set_thread(info);
        }
        Ok(MessageModel {
            def,
            envelope,
            values,
        })
    }
}

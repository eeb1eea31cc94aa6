//! Load-time registry of generated message types.
//!
//! A protocol module generates its message types, registers each one here,
//! and hands the routing map to the host dispatcher. Registration happens
//! single-threaded during module load; afterwards the registry is shared
//! read-only, so lookups need no synchronisation.

use crate::protocol::domain::{
    GeneratedMessageType, HandlerLocator, MessageDescriptor, MessageTypeUri,
};
use crate::protocol::error::ConfigurationError;
use crate::protocol::factory::generate_message_type;
use std::collections::HashMap;
use std::sync::Arc;

/// Order-preserving collection of generated message types, keyed by their
/// verbatim wire identifiers.
///
/// # Examples
///
/// ```
/// use herald::protocol::MessageTypeRegistry;
/// use herald::protocol::domain::{
///     FieldSource, HandlerLocator, MessageDescriptor, MessageTypeUri,
/// };
///
/// let mut registry = MessageTypeRegistry::new();
/// registry
///     .register_descriptor(&MessageDescriptor::new(
///         "Ping",
///         HandlerLocator::new("pings.PingHandler").expect("non-empty"),
///         MessageTypeUri::new("test-protocol/1.0/ping").expect("non-empty"),
///         FieldSource::empty(),
///     ))
///     .expect("first registration");
///
/// assert!(registry.resolve("test-protocol/1.0/ping").is_some());
/// assert!(registry.resolve("test-protocol/1.0/PING").is_none());
/// ```
#[derive(Debug, Default)]
pub struct MessageTypeRegistry {
    entries: Vec<Arc<GeneratedMessageType>>,
    index: HashMap<String, usize>,
}

impl MessageTypeRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a generated type under its wire identifier.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigurationError::DuplicateMessageType`] when the wire
    /// identifier is already registered. Callers propagate this with `?` so
    /// the first failure aborts the whole module load; nothing is partially
    /// registered.
    pub fn register(
        &mut self,
        generated: Arc<GeneratedMessageType>,
    ) -> Result<(), ConfigurationError> {
        let key = generated.message_type().as_str().to_owned();
        if self.index.contains_key(&key) {
            return Err(ConfigurationError::DuplicateMessageType(key));
        }
        self.index.insert(key, self.entries.len());
        self.entries.push(generated);
        Ok(())
    }

    /// Generates a descriptor's type and registers it in one step.
    ///
    /// # Errors
    ///
    /// Returns the factory's [`ConfigurationError`] when generation fails,
    /// or [`ConfigurationError::DuplicateMessageType`] when the wire
    /// identifier is already registered.
    pub fn register_descriptor(
        &mut self,
        descriptor: &MessageDescriptor,
    ) -> Result<Arc<GeneratedMessageType>, ConfigurationError> {
        let generated = Arc::new(generate_message_type(descriptor)?);
        self.register(Arc::clone(&generated))?;
        Ok(generated)
    }

    /// Looks up a generated type by its wire identifier.
    ///
    /// The match is an exact string comparison; no trimming, casing, or
    /// prefixing is applied.
    #[must_use]
    pub fn resolve(&self, message_type: &str) -> Option<&Arc<GeneratedMessageType>> {
        self.index
            .get(message_type)
            .and_then(|&at| self.entries.get(at))
    }

    /// Returns whether a wire identifier is registered.
    #[must_use]
    pub fn contains(&self, message_type: &str) -> bool {
        self.index.contains_key(message_type)
    }

    /// Returns the number of registered types.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` when nothing is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates the registered types in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &Arc<GeneratedMessageType>> {
        self.entries.iter()
    }

    /// Iterates `(wire identifier, handler locator)` pairs in registration
    /// order — the routing map the host dispatcher consumes.
    pub fn handler_routes(&self) -> impl Iterator<Item = (&MessageTypeUri, &HandlerLocator)> {
        self.entries
            .iter()
            .map(|entry| (entry.message_type(), entry.handler()))
    }
}

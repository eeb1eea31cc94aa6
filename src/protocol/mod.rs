//! Message type synthesis and the wire contract.
//!
//! This module turns declarative descriptors into typed message/schema
//! pairs at load time, keeps them in an order-preserving registry, and owns
//! the JSON wire contract for instances of the generated types.
//!
//! # Architecture
//!
//! - **Domain**: pure value types ([`domain::MessageDescriptor`],
//!   [`domain::GeneratedMessageType`], [`domain::MessageModel`], etc.)
//! - **Factory**: [`generate_message_type`], the one deterministic
//!   descriptor → pair operation
//! - **Registry**: [`MessageTypeRegistry`], the load-time routing map the
//!   host dispatcher consumes
//!
//! Everything here is load-time or pure: generation and registration run
//! single-threaded while a protocol module boots, and the resulting
//! definitions are immutable and shared as `Arc`s.
//!
//! # Example
//!
//! ```
//! use herald::protocol::MessageTypeRegistry;
//! use herald::protocol::domain::{
//!     FieldCodec, FieldSource, HandlerLocator, MessageDescriptor, MessageModel, MessageTypeUri,
//! };
//!
//! let mut registry = MessageTypeRegistry::new();
//! let ping = registry
//!     .register_descriptor(&MessageDescriptor::new(
//!         "Ping",
//!         HandlerLocator::new("pings.PingHandler").expect("non-empty"),
//!         MessageTypeUri::new("test-protocol/1.0/ping").expect("non-empty"),
//!         FieldSource::inline([("comment", FieldCodec::text().optional())]),
//!     ))
//!     .expect("valid descriptor");
//!
//! let message = MessageModel::builder(ping)
//!     .with_value("comment", "still here?")
//!     .build()
//!     .expect("declared field");
//! let wire = message.to_wire().expect("complete message");
//! assert_eq!(wire["@type"], "test-protocol/1.0/ping");
//! ```

pub mod domain;
pub mod error;
mod factory;
mod registry;

pub use factory::generate_message_type;
pub use registry::MessageTypeRegistry;

#[cfg(test)]
mod tests;

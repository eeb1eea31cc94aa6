//! Herald: message-protocol toolkit for agent frameworks.
//!
//! This crate provides the pieces a protocol module needs inside a larger
//! agent-messaging framework: generating typed message/schema definitions
//! from declarative descriptors, gating handler logic behind role checks,
//! and normalising timestamps into a canonical wire format. The host
//! framework owns transport, connections, and dispatch; this crate owns
//! the protocol surface between them.
//!
//! # Architecture
//!
//! Herald follows hexagonal architecture principles:
//!
//! - **Domain**: Pure value types with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces the host dispatcher drives
//! - **Adapters**: Concrete implementations of ports
//!
//! # Modules
//!
//! - [`protocol`]: Generated message types, wire codecs, and the registry
//! - [`handler`]: Request contexts, role gates, and reply plumbing
//! - [`timestamp`]: Canonical UTC wire timestamps

pub mod handler;
pub mod protocol;
pub mod timestamp;

//! Role-gated message handling around the protocol core.
//!
//! This module owns everything a message handler needs at dispatch time:
//! the per-request context, the responder and handler ports, the role gate
//! composed around protected handlers at registration time, and the
//! passthrough handler for message types that carry payload but require no
//! action. The module follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Middleware and terminal handlers in [`services`]
//!
//! # Example
//!
//! ```
//! use herald::handler::adapters::memory::RecordingResponder;
//! use herald::handler::domain::{ConnectionRecord, PeerRole, RequestContext};
//! use herald::handler::ports::MessageHandler;
//! use herald::handler::services::{PassthroughHandler, admin_only};
//! use herald::protocol::domain::{
//!     FieldSource, HandlerLocator, MessageDescriptor, MessageModel, MessageTypeUri,
//! };
//! use herald::protocol::generate_message_type;
//! use std::sync::Arc;
//!
//! # tokio::runtime::Builder::new_current_thread().build().unwrap().block_on(async {
//! let descriptor = MessageDescriptor::new(
//!     "Ping",
//!     HandlerLocator::new("pings.PingHandler").expect("non-empty"),
//!     MessageTypeUri::new("test-protocol/1.0/ping").expect("non-empty"),
//!     FieldSource::empty(),
//! );
//! let ping = Arc::new(generate_message_type(&descriptor).expect("valid descriptor"));
//!
//! let guarded = admin_only(PassthroughHandler::new());
//! let context = RequestContext::new(MessageModel::new(ping))
//!     .with_connection(ConnectionRecord::new("alice").with_role(PeerRole::admin()));
//! let responder = RecordingResponder::new();
//!
//! guarded.handle(&context, &responder).await.expect("admin is admitted");
//! assert!(responder.sent().expect("reply log").is_empty());
//! # });
//! ```

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;

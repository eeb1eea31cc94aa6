//! Port contracts for the handler subsystem.

mod dispatch;
mod responder;

pub use dispatch::{HandlerError, HandlerResult, MessageHandler};
pub use responder::{Responder, ResponderError, ResponderResult};

//! Application services for the handler subsystem.
//!
//! Middleware and terminal handlers composed around protocol logic at
//! registration time.

mod guard;
mod passthrough;

pub use guard::{RoleGuard, admin_only, require_role};
pub use passthrough::PassthroughHandler;

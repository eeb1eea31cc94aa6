//! Domain types for the handler subsystem.
//!
//! Value types shared by every message handler: the per-request context,
//! validated role labels, problem reports, and the closed reply set.

mod context;
mod error;
mod problem_report;
mod reply;
mod role;

pub use context::{ConnectionRecord, RequestContext};
pub use error::{HandlerDomainError, ParseRetryPartyError};
pub use problem_report::{PROBLEM_REPORT_TYPE, ProblemReport, RetryParty};
pub use reply::Reply;
pub use role::PeerRole;

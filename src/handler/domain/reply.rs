//! The closed set of outbound replies a handler can send.

use super::problem_report::{PROBLEM_REPORT_TYPE, ProblemReport};
use crate::protocol::domain::MessageModel;
use crate::protocol::error::WireError;
use serde_json::Value;

/// One outbound reply, ready for the host transport.
#[derive(Debug, Clone, PartialEq)]
pub enum Reply {
    /// A typed protocol message.
    Message(MessageModel),
    /// A protocol-level error report.
    Problem(ProblemReport),
}

impl Reply {
    /// Returns the wire identifier of the reply's message family.
    #[must_use]
    pub fn message_type(&self) -> &str {
        match self {
            Self::Message(message) => message.message_type().as_str(),
            Self::Problem(_) => PROBLEM_REPORT_TYPE,
        }
    }

    /// Serialises the reply into its wire form.
    ///
    /// # Errors
    ///
    /// Returns [`WireError::MissingField`] when a typed message is missing a
    /// required field; problem reports always serialise.
    pub fn to_wire(&self) -> Result<Value, WireError> {
        match self {
            Self::Message(message) => message.to_wire(),
            Self::Problem(report) => Ok(report.to_wire()),
        }
    }
}

impl From<MessageModel> for Reply {
    fn from(message: MessageModel) -> Self {
        Self::Message(message)
    }
}

impl From<ProblemReport> for Reply {
    fn from(report: ProblemReport) -> Self {
        Self::Problem(report)
    }
}

//! Protocol-level error reply sent back to the remote party.

use super::ParseRetryPartyError;
use crate::protocol::domain::{
    ID_KEY, MessageEnvelope, MessageModel, THREAD_KEY, TYPE_KEY, thread_to_wire,
};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

/// Wire identifier of the problem report message family.
pub const PROBLEM_REPORT_TYPE: &str =
    "did:sov:BzCbsNYhMrjHiqZDTUASHg;spec/notification/1.0/problem-report";

/// Wire key carrying the human-readable explanation.
const EXPLAIN_KEY: &str = "explain-ltxt";

/// Wire key naming the party expected to retry.
const WHO_RETRIES_KEY: &str = "who-retries";

/// The party expected to retry after a problem report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RetryParty {
    /// Nobody retries; the exchange is over.
    None,
    /// The reporting party will retry on its own.
    Me,
    /// The receiving party should retry.
    You,
    /// Both parties should retry.
    Both,
}

impl RetryParty {
    /// Returns the canonical wire spelling.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Me => "me",
            Self::You => "you",
            Self::Both => "both",
        }
    }
}

impl fmt::Display for RetryParty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for RetryParty {
    type Error = ParseRetryPartyError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalised = value.trim().to_ascii_lowercase();
        match normalised.as_str() {
            "none" => Ok(Self::None),
            "me" => Ok(Self::Me),
            "you" => Ok(Self::You),
            "both" => Ok(Self::Both),
            _ => Err(ParseRetryPartyError(value.to_owned())),
        }
    }
}

/// Protocol-level error reply describing why a request was not served.
///
/// A report is constructed at the point of failure, threaded to the message
/// it answers, and sent through the responder; it is never stored.
///
/// # Examples
///
/// ```
/// use herald::handler::domain::{ProblemReport, RetryParty};
///
/// let report = ProblemReport::new("unknown request", RetryParty::You);
/// let wire = report.to_wire();
/// assert_eq!(wire["explain-ltxt"], "unknown request");
/// assert_eq!(wire["who-retries"], "you");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProblemReport {
    envelope: MessageEnvelope,
    explain: String,
    who_retries: RetryParty,
}

impl ProblemReport {
    /// Creates a report with a fresh envelope.
    #[must_use]
    pub fn new(explain: impl Into<String>, who_retries: RetryParty) -> Self {
        Self {
            envelope: MessageEnvelope::new(),
            explain: explain.into(),
            who_retries,
        }
    }

    /// Returns the message envelope.
    #[must_use]
    pub const fn envelope(&self) -> &MessageEnvelope {
        &self.envelope
    }

    /// Returns the human-readable explanation of the problem.
    #[must_use]
    pub fn explain(&self) -> &str {
        &self.explain
    }

    /// Returns the party expected to retry.
    #[must_use]
    pub const fn who_retries(&self) -> RetryParty {
        self.who_retries
    }

    /// Threads this report as a reply to the given message.
    pub fn assign_thread_from(&mut self, source: &MessageModel) {
        self.envelope.assign_thread_from(source.envelope());
    }

    /// Serialises the report into its wire form.
    #[must_use]
    pub fn to_wire(&self) -> Value {
        let mut wire = Map::new();
        wire.insert(
            TYPE_KEY.to_owned(),
            Value::String(PROBLEM_REPORT_TYPE.to_owned()),
        );
        wire.insert(
            ID_KEY.to_owned(),
            Value::String(self.envelope.id().to_string()),
        );
        if let Some(thread) = self.envelope.thread() {
            wire.insert(THREAD_KEY.to_owned(), thread_to_wire(thread));
        }
        wire.insert(EXPLAIN_KEY.to_owned(), Value::String(self.explain.clone()));
        wire.insert(
            WHO_RETRIES_KEY.to_owned(),
            Value::String(self.who_retries.as_str().to_owned()),
        );
        Value::Object(wire)
    }
}

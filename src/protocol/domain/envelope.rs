//! Base message envelope: identity and thread correlation.
//!
//! Every message instance carries an envelope regardless of its generated
//! type. On the wire the envelope occupies the reserved keys `@id` and
//! `~thread`; the message type itself lives in `@type` and is owned by the
//! generated type definition, not the envelope.

use super::ids::MessageId;

/// Thread correlation decorator (`~thread` on the wire).
///
/// `thid` names the thread this message belongs to; `pthid` optionally names
/// a parent thread for nested exchanges.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThreadInfo {
    thid: MessageId,
    pthid: Option<MessageId>,
}

impl ThreadInfo {
    /// Creates thread info for the given thread identifier.
    #[must_use]
    pub const fn new(thid: MessageId) -> Self {
        Self { thid, pthid: None }
    }

    /// Attaches a parent thread identifier.
    #[must_use]
    pub const fn with_parent(mut self, pthid: MessageId) -> Self {
        self.pthid = Some(pthid);
        self
    }

    /// Returns the thread identifier.
    #[must_use]
    pub const fn thid(&self) -> MessageId {
        self.thid
    }

    /// Returns the parent thread identifier, when present.
    #[must_use]
    pub const fn pthid(&self) -> Option<MessageId> {
        self.pthid
    }
}

/// Identity and threading shared by every message instance.
///
/// # Examples
///
/// ```
/// use herald::protocol::domain::MessageEnvelope;
///
/// let inbound = MessageEnvelope::new();
/// let mut reply = MessageEnvelope::new();
/// reply.assign_thread_from(&inbound);
/// assert_eq!(reply.thread_id(), inbound.id());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MessageEnvelope {
    id: MessageId,
    thread: Option<ThreadInfo>,
}

impl MessageEnvelope {
    /// Creates an envelope with a fresh random identifier and no thread.
    #[must_use]
    pub fn new() -> Self {
        Self::new_with_id(MessageId::new())
    }

    /// Creates an envelope with a specified identifier.
    #[must_use]
    pub const fn new_with_id(id: MessageId) -> Self {
        Self { id, thread: None }
    }

    /// Returns the message identifier.
    #[must_use]
    pub const fn id(&self) -> MessageId {
        self.id
    }

    /// Returns the thread decorator, when the message is threaded.
    #[must_use]
    pub const fn thread(&self) -> Option<ThreadInfo> {
        self.thread
    }

    /// Sets the thread decorator.
    pub const fn set_thread(&mut self, thread: ThreadInfo) {
        self.thread = Some(thread);
    }

    /// Returns the effective thread identifier: the `thid` when the message
    /// is threaded, otherwise the message's own identifier.
    #[must_use]
    pub fn thread_id(&self) -> MessageId {
        self.thread.map_or(self.id, |info| info.thid())
    }

    /// Adopts the thread of the message this one answers.
    ///
    /// The reply joins the source's effective thread and inherits its parent
    /// thread, so correlation survives however deeply the exchange nests.
    pub fn assign_thread_from(&mut self, source: &Self) {
        self.thread = Some(ThreadInfo {
            thid: source.thread_id(),
            pthid: source.thread.and_then(|info| info.pthid()),
        });
    }
}

/// Note: each default envelope carries a fresh random identifier, which is
/// non-standard behaviour for `Default`. Use `MessageEnvelope::new()` if the
/// intent to mint an identity should be explicit.
impl Default for MessageEnvelope {
    fn default() -> Self {
        Self::new()
    }
}

//! Role gate wrapped around message handlers at registration time.

use crate::handler::domain::{ConnectionRecord, PeerRole, ProblemReport, RequestContext, RetryParty};
use crate::handler::ports::{HandlerResult, MessageHandler, Responder};
use async_trait::async_trait;

/// Explanation sent to the remote party when the gate rejects a request.
const UNAUTHORIZED_EXPLAIN: &str =
    "This connection is not authorized to perform the requested action.";

/// Middleware admitting a request only when the connection holds a role.
///
/// A guard is composed around the protected handler once, at registration
/// time. On every request exactly one of two things happens: the connection
/// holds the required role and the inner handler runs with the original
/// arguments, or a problem report threaded to the inbound message is sent
/// and the inner handler never runs. The rejection send completes before
/// the guard returns.
#[derive(Debug)]
pub struct RoleGuard<H> {
    required: PeerRole,
    inner: H,
}

impl<H: MessageHandler> RoleGuard<H> {
    /// Wraps `inner` so it only runs for connections holding `required`.
    #[must_use]
    pub const fn new(required: PeerRole, inner: H) -> Self {
        Self { required, inner }
    }

    fn is_authorised(&self, context: &RequestContext) -> bool {
        context
            .connection()
            .and_then(ConnectionRecord::their_role)
            .is_some_and(|role| *role == self.required)
    }
}

#[async_trait]
impl<H: MessageHandler> MessageHandler for RoleGuard<H> {
    async fn handle(
        &self,
        context: &RequestContext,
        responder: &dyn Responder,
    ) -> HandlerResult<()> {
        if self.is_authorised(context) {
            return self.inner.handle(context, responder).await;
        }

        tracing::warn!(
            message_type = %context.message().message_type(),
            required_role = %self.required,
            "rejecting unauthorised request"
        );
        let mut report = ProblemReport::new(UNAUTHORIZED_EXPLAIN, RetryParty::None);
        report.assign_thread_from(context.message());
        responder.send_reply(report.into()).await?;
        Ok(())
    }
}

/// Wraps a handler so it only runs for connections holding `role`.
#[must_use]
pub const fn require_role<H: MessageHandler>(role: PeerRole, inner: H) -> RoleGuard<H> {
    RoleGuard::new(role, inner)
}

/// Wraps a handler so it only runs for admin connections.
#[must_use]
pub fn admin_only<H: MessageHandler>(inner: H) -> RoleGuard<H> {
    RoleGuard::new(PeerRole::admin(), inner)
}

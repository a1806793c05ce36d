use async_trait::async_trait;

use crate::error::AppError;

/// Outbound invite notification boundary. Delivery is best-effort: the
/// employee row is already committed when dispatch happens, and a failed
/// send is logged, never propagated.
#[async_trait]
pub trait InviteNotifier: Send + Sync {
    async fn send_invite(&self, email: &str, full_name: &str, join_link: &str)
        -> Result<(), AppError>;
}

/// Default notifier: records the invite in the log. A real transport (SMTP,
/// provider webhook) slots in behind the same trait.
pub struct LoggingNotifier;

#[async_trait]
impl InviteNotifier for LoggingNotifier {
    async fn send_invite(
        &self,
        email: &str,
        full_name: &str,
        join_link: &str,
    ) -> Result<(), AppError> {
        tracing::info!(email = %email, full_name = %full_name, join_link = %join_link, "Invite notification");
        Ok(())
    }
}

/// Fire-and-forget dispatch. Runs on a spawned task so the HTTP response
/// never waits on delivery; failures are logged at warn.
pub fn dispatch_invite(
    notifier: std::sync::Arc<dyn InviteNotifier>,
    email: String,
    full_name: String,
    join_link: String,
) {
    tokio::spawn(async move {
        if let Err(e) = notifier.send_invite(&email, &full_name, &join_link).await {
            tracing::warn!(email = %email, error = %e, "Invite notification failed");
        }
    });
}

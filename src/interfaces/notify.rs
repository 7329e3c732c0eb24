use async_trait::async_trait;

/// Outbound notification payload (email/chat integration contract).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotificationMessage {
    pub sender: String,
    pub recipient: String,
    pub subject: String,
    pub body: String,
}

/// Fire-and-forget from the handler's point of view: a failed dispatch is
/// logged and never changes the HTTP outcome.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Notifier: Send + Sync {
    async fn notify(&self, message: &NotificationMessage) -> anyhow::Result<()>;
}

/// Stand-in for a real email/Telegram integration: logs the message.
pub struct LogNotifier;

#[async_trait]
impl Notifier for LogNotifier {
    async fn notify(&self, message: &NotificationMessage) -> anyhow::Result<()> {
        tracing::info!(
            sender = %message.sender,
            recipient = %message.recipient,
            subject = %message.subject,
            "📬 Contact notification (stub): {}",
            message.body
        );
        Ok(())
    }
}

use std::sync::Arc;

use validator::Validate;

use crate::{
    entities::contact::ContactForm,
    errors::AppError,
    notify::{NotificationMessage, Notifier},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmissionOutcome {
    /// Valid submission, notification dispatched.
    Dispatched,
    /// Honeypot tripped. The caller must answer exactly as if the submission
    /// succeeded so automated submitters learn nothing.
    SilentlyDropped,
}

pub struct ContactHandler {
    notifier: Arc<dyn Notifier>,
    sender: String,
    recipient: String,
}

impl ContactHandler {
    pub fn new(notifier: Arc<dyn Notifier>, sender: String, recipient: String) -> Self {
        ContactHandler {
            notifier,
            sender,
            recipient,
        }
    }

    /// Validates a parsed submission, applies the honeypot check, and
    /// dispatches the notification for legitimate messages.
    pub async fn handle_submission(
        &self,
        form: ContactForm,
        identifier: &str,
    ) -> Result<SubmissionOutcome, AppError> {
        form.validate()?;

        if form.is_honeypot_triggered() {
            tracing::warn!(
                identifier,
                website = %form.website,
                "Honeypot field filled, dropping submission"
            );
            return Ok(SubmissionOutcome::SilentlyDropped);
        }

        let message = NotificationMessage {
            sender: self.sender.clone(),
            recipient: self.recipient.clone(),
            subject: format!("New contact form submission from {}", form.name),
            body: format!(
                "Name: {}\nEmail: {}\nBudget: {}\n\n{}",
                form.name,
                form.email,
                form.budget.as_deref().unwrap_or("not specified"),
                form.message
            ),
        };

        // Dispatch failures must not surface: the submission itself is fine.
        if let Err(e) = self.notifier.notify(&message).await {
            tracing::error!("Notification dispatch failed: {e:#}");
        }

        tracing::info!(
            identifier,
            name = %form.name,
            email = %form.email,
            "Contact submission received"
        );

        Ok(SubmissionOutcome::Dispatched)
    }
}

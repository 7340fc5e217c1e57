//! Share notification fan-out.

use std::sync::Arc;

use futures::future::join_all;
use tracing::{info, warn};

use planner_core::traits::Mailer;
use planner_entity::share::ContentKind;

use crate::mail::MailFormatter;

/// Outcome of one notification round.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeliveryReport {
    /// Number of send attempts made.
    pub attempted: usize,
    /// Number of sends the transport accepted.
    pub delivered: usize,
    /// Recipients whose send failed.
    pub failed: Vec<String>,
}

/// Sends one invitation per recipient through the injected transport.
///
/// Sends run concurrently and independently: a failure for one recipient
/// never prevents the others from being attempted, and is never returned
/// as an error.
#[derive(Debug, Clone)]
pub struct ShareNotifier {
    mailer: Arc<dyn Mailer>,
}

impl ShareNotifier {
    /// Create a notifier over `mailer`.
    pub fn new(mailer: Arc<dyn Mailer>) -> Self {
        Self { mailer }
    }

    /// Notify every recipient about a new share.
    pub async fn notify(
        &self,
        kind: ContentKind,
        share_url: &str,
        recipients: &[String],
    ) -> DeliveryReport {
        if recipients.is_empty() {
            return DeliveryReport::default();
        }

        let sends = recipients.iter().map(|to| {
            let message = MailFormatter::share_invitation(kind, share_url, to);
            async move {
                let result = self.mailer.send(&message).await;
                (message.to, result)
            }
        });

        let mut report = DeliveryReport {
            attempted: recipients.len(),
            ..DeliveryReport::default()
        };
        for (to, result) in join_all(sends).await {
            match result {
                Ok(()) => report.delivered += 1,
                Err(e) => {
                    warn!(
                        recipient = %to,
                        transport = self.mailer.name(),
                        error = %e,
                        "Share notification failed"
                    );
                    report.failed.push(to);
                }
            }
        }

        info!(
            kind = %kind,
            attempted = report.attempted,
            delivered = report.delivered,
            failed = report.failed.len(),
            "Share notifications dispatched"
        );
        report
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mail::MemoryMailer;

    #[tokio::test]
    async fn test_no_recipients_no_sends() {
        let mailer = MemoryMailer::new();
        let notifier = ShareNotifier::new(Arc::new(mailer.clone()));

        let report = notifier.notify(ContentKind::Todo, "http://x/share/t", &[]).await;

        assert_eq!(report, DeliveryReport::default());
        assert!(mailer.attempts().await.is_empty());
    }

    #[tokio::test]
    async fn test_one_failure_does_not_stop_others() {
        let mailer = MemoryMailer::new();
        mailer.fail_for("a@x.com").await;
        let notifier = ShareNotifier::new(Arc::new(mailer.clone()));

        let recipients = vec!["a@x.com".to_string(), "b@x.com".to_string()];
        let report = notifier
            .notify(ContentKind::Note, "http://x/share/t", &recipients)
            .await;

        assert_eq!(report.attempted, 2);
        assert_eq!(report.delivered, 1);
        assert_eq!(report.failed, vec!["a@x.com"]);

        let mut sent = mailer.recipients().await;
        sent.sort();
        assert_eq!(sent, vec!["a@x.com", "b@x.com"]);
    }
}

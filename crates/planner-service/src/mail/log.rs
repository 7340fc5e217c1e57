//! Transport that writes messages to the log instead of sending them.

use async_trait::async_trait;
use tracing::info;

use planner_core::result::AppResult;
use planner_core::traits::{MailMessage, Mailer};

/// Logs every message at `info`. Useful in development.
#[derive(Debug, Clone)]
pub struct LogMailer {
    from: String,
}

impl LogMailer {
    /// Create a log transport using `from` as the sender address.
    pub fn new(from: impl Into<String>) -> Self {
        Self { from: from.into() }
    }
}

#[async_trait]
impl Mailer for LogMailer {
    async fn send(&self, message: &MailMessage) -> AppResult<()> {
        info!(
            from = %self.from,
            to = %message.to,
            subject = %message.subject,
            "Mail message (log transport)"
        );
        Ok(())
    }

    fn name(&self) -> &'static str {
        "log"
    }
}

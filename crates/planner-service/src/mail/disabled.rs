//! Transport that drops every message.

use async_trait::async_trait;
use tracing::debug;

use planner_core::result::AppResult;
use planner_core::traits::{MailMessage, Mailer};

/// Accepts and discards messages.
#[derive(Debug, Clone, Copy, Default)]
pub struct DisabledMailer;

#[async_trait]
impl Mailer for DisabledMailer {
    async fn send(&self, message: &MailMessage) -> AppResult<()> {
        debug!(to = %message.to, "Mail disabled, message dropped");
        Ok(())
    }

    fn name(&self) -> &'static str {
        "disabled"
    }
}

//! Outbound mail capability.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::result::AppResult;

/// A single outbound message to one recipient.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MailMessage {
    /// Recipient address.
    pub to: String,
    /// Subject line.
    pub subject: String,
    /// HTML body.
    pub html: String,
}

/// Trait for mail transports (HTTP relay, log sink, test recorder).
///
/// Each call is one independent attempt to one recipient. Implementations
/// must not retry; a failure is reported to the caller, which decides
/// whether it matters.
#[async_trait]
pub trait Mailer: Send + Sync + std::fmt::Debug + 'static {
    /// Send a single message.
    async fn send(&self, message: &MailMessage) -> AppResult<()>;

    /// Short transport name for logs.
    fn name(&self) -> &'static str;
}

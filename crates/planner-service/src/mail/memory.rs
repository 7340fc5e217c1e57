//! Recording transport for tests and local tooling.

use std::collections::HashSet;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;

use planner_core::error::AppError;
use planner_core::result::AppResult;
use planner_core::traits::{MailMessage, Mailer};

/// Records every attempted message. Recipients registered with
/// [`MemoryMailer::fail_for`] get an error instead; their attempts are
/// recorded all the same.
#[derive(Debug, Clone, Default)]
pub struct MemoryMailer {
    attempts: Arc<Mutex<Vec<MailMessage>>>,
    failing: Arc<Mutex<HashSet<String>>>,
}

impl MemoryMailer {
    /// Create an empty recorder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every send to `address` fail.
    pub async fn fail_for(&self, address: impl Into<String>) {
        self.failing.lock().await.insert(address.into());
    }

    /// All attempted messages, in completion order.
    pub async fn attempts(&self) -> Vec<MailMessage> {
        self.attempts.lock().await.clone()
    }

    /// Recipients of all attempted messages.
    pub async fn recipients(&self) -> Vec<String> {
        self.attempts
            .lock()
            .await
            .iter()
            .map(|m| m.to.clone())
            .collect()
    }
}

#[async_trait]
impl Mailer for MemoryMailer {
    async fn send(&self, message: &MailMessage) -> AppResult<()> {
        self.attempts.lock().await.push(message.clone());
        if self.failing.lock().await.contains(&message.to) {
            return Err(AppError::external_service(format!(
                "Simulated delivery failure for {}",
                message.to
            )));
        }
        Ok(())
    }

    fn name(&self) -> &'static str {
        "memory"
    }
}

//! Outbound mail transports and the manager that selects one.

pub mod disabled;
pub mod formatter;
pub mod http;
pub mod log;
pub mod memory;
pub mod smtp;

use std::sync::Arc;

use async_trait::async_trait;
use tracing::info;

use planner_core::config::MailConfig;
use planner_core::error::AppError;
use planner_core::result::AppResult;
use planner_core::traits::{MailMessage, Mailer};

pub use disabled::DisabledMailer;
pub use formatter::MailFormatter;
pub use http::HttpMailer;
pub use log::LogMailer;
pub use memory::MemoryMailer;
pub use smtp::SmtpMailer;

/// Mail manager that wraps the configured transport.
///
/// The transport is selected at construction time based on configuration.
#[derive(Debug, Clone)]
pub struct MailManager {
    inner: Arc<dyn Mailer>,
}

impl MailManager {
    /// Create a mail manager from configuration.
    pub fn new(config: &MailConfig) -> AppResult<Self> {
        let inner: Arc<dyn Mailer> = match config.transport.as_str() {
            "smtp" => {
                info!(
                    host = %config.smtp.host,
                    port = config.smtp.port,
                    tls = ?config.smtp.tls,
                    "Initializing SMTP mail transport"
                );
                Arc::new(SmtpMailer::new(config)?)
            }
            "http" => {
                info!(endpoint = %config.endpoint, "Initializing HTTP mail relay");
                Arc::new(HttpMailer::new(config)?)
            }
            "log" => {
                info!("Initializing log-only mail transport");
                Arc::new(LogMailer::new(&config.from))
            }
            "disabled" => {
                info!("Outbound mail disabled");
                Arc::new(DisabledMailer)
            }
            other => {
                return Err(AppError::configuration(format!(
                    "Unknown mail transport: '{other}'. Supported: log, smtp, http, disabled"
                )));
            }
        };

        Ok(Self { inner })
    }

    /// Create a mail manager from an existing transport (for testing).
    pub fn from_mailer(mailer: Arc<dyn Mailer>) -> Self {
        Self { inner: mailer }
    }
}

#[async_trait]
impl Mailer for MailManager {
    async fn send(&self, message: &MailMessage) -> AppResult<()> {
        self.inner.send(message).await
    }

    fn name(&self) -> &'static str {
        self.inner.name()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use planner_core::config::{SmtpConfig, SmtpTls};
    use planner_core::error::ErrorKind;

    #[test]
    fn test_default_config_selects_log() {
        let manager = MailManager::new(&MailConfig::default()).unwrap();
        assert_eq!(manager.name(), "log");
    }

    #[test]
    fn test_unknown_transport_rejected() {
        let config = MailConfig {
            transport: "carrier-pigeon".to_string(),
            ..MailConfig::default()
        };
        let err = MailManager::new(&config).unwrap_err();
        assert_eq!(err.kind, ErrorKind::Configuration);
    }

    #[test]
    fn test_smtp_transport_selected() {
        let config = MailConfig {
            transport: "smtp".to_string(),
            smtp: SmtpConfig {
                host: "localhost".to_string(),
                port: 2525,
                tls: SmtpTls::Disabled,
                ..SmtpConfig::default()
            },
            ..MailConfig::default()
        };
        let manager = MailManager::new(&config).unwrap();
        assert_eq!(manager.name(), "smtp");
    }

    #[test]
    fn test_smtp_without_host_rejected() {
        let config = MailConfig {
            transport: "smtp".to_string(),
            ..MailConfig::default()
        };
        let err = MailManager::new(&config).unwrap_err();
        assert_eq!(err.kind, ErrorKind::Configuration);
    }
}

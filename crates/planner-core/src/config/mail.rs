//! Outbound mail configuration.

use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// Mail transport settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MailConfig {
    /// Transport: `"log"`, `"smtp"`, `"http"`, or `"disabled"`.
    #[serde(default = "default_transport")]
    pub transport: String,
    /// Relay endpoint for the `http` transport.
    #[serde(default)]
    pub endpoint: String,
    /// Bearer key sent to the relay (optional).
    #[serde(default)]
    pub api_key: Option<String>,
    /// Sender address.
    #[serde(default = "default_from")]
    pub from: String,
    /// Per-message timeout in seconds.
    #[serde(default = "default_timeout")]
    pub timeout_seconds: u64,
    /// SMTP server for the `smtp` transport.
    #[serde(default)]
    pub smtp: SmtpConfig,
}

/// How the SMTP connection is secured.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SmtpTls {
    /// TLS from the first byte (usually port 465).
    #[default]
    Implicit,
    /// Plain connection upgraded with STARTTLS (usually port 587).
    Starttls,
    /// No encryption. Only for local relays and tests.
    #[serde(rename = "none")]
    Disabled,
}

/// SMTP server settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SmtpConfig {
    /// Server host name.
    #[serde(default)]
    pub host: String,
    /// Server port.
    #[serde(default = "default_smtp_port")]
    pub port: u16,
    /// Connection security.
    #[serde(default)]
    pub tls: SmtpTls,
    /// Login user; authentication is skipped when unset.
    #[serde(default)]
    pub username: Option<String>,
    /// Login password.
    #[serde(default)]
    pub password: Option<String>,
}

impl Default for SmtpConfig {
    fn default() -> Self {
        Self {
            host: String::new(),
            port: default_smtp_port(),
            tls: SmtpTls::default(),
            username: None,
            password: None,
        }
    }
}

impl Default for MailConfig {
    fn default() -> Self {
        Self {
            transport: default_transport(),
            endpoint: String::new(),
            api_key: None,
            from: default_from(),
            timeout_seconds: default_timeout(),
            smtp: SmtpConfig::default(),
        }
    }
}

impl MailConfig {
    /// Validate transport-specific requirements.
    pub fn validate(&self) -> Result<(), AppError> {
        match self.transport.as_str() {
            "http" if self.endpoint.trim().is_empty() => Err(AppError::configuration(
                "mail.endpoint is required for the http transport",
            )),
            "smtp" => self.smtp.validate(),
            _ => Ok(()),
        }
    }
}

impl SmtpConfig {
    fn validate(&self) -> Result<(), AppError> {
        if self.host.trim().is_empty() {
            return Err(AppError::configuration(
                "mail.smtp.host is required for the smtp transport",
            ));
        }
        if self.port == 0 {
            return Err(AppError::configuration("mail.smtp.port must not be 0"));
        }
        if self.username.is_some() != self.password.is_some() {
            return Err(AppError::configuration(
                "mail.smtp.username and mail.smtp.password must be set together",
            ));
        }
        Ok(())
    }
}

fn default_transport() -> String {
    "log".to_string()
}

fn default_from() -> String {
    "no-reply@planner.local".to_string()
}

fn default_timeout() -> u64 {
    10
}

fn default_smtp_port() -> u16 {
    465
}

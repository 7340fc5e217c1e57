//! SMTP transport.

use std::fmt;
use std::time::Duration;

use async_trait::async_trait;
use lettre::message::header::ContentType;
use lettre::message::Mailbox;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};
use tracing::debug;

use planner_core::config::{MailConfig, SmtpTls};
use planner_core::error::{AppError, ErrorKind};
use planner_core::result::AppResult;
use planner_core::traits::{MailMessage, Mailer};

/// Delivers each message over its own SMTP session.
pub struct SmtpMailer {
    transport: AsyncSmtpTransport<Tokio1Executor>,
    from: Mailbox,
    host: String,
    port: u16,
}

impl fmt::Debug for SmtpMailer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SmtpMailer")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("from", &self.from)
            .finish_non_exhaustive()
    }
}

impl SmtpMailer {
    /// Build a transport from `config.smtp`. No connection is opened here.
    pub fn new(config: &MailConfig) -> AppResult<Self> {
        config.validate()?;
        let smtp = &config.smtp;

        let builder = match smtp.tls {
            SmtpTls::Implicit => AsyncSmtpTransport::<Tokio1Executor>::relay(&smtp.host),
            SmtpTls::Starttls => AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&smtp.host),
            SmtpTls::Disabled => Ok(AsyncSmtpTransport::<Tokio1Executor>::builder_dangerous(
                &smtp.host,
            )),
        }
        .map_err(|e| {
            AppError::with_source(
                ErrorKind::Configuration,
                format!("Invalid SMTP host '{}'", smtp.host),
                e,
            )
        })?;

        let mut builder = builder
            .port(smtp.port)
            .timeout(Some(Duration::from_secs(config.timeout_seconds)));
        if let (Some(user), Some(pass)) = (&smtp.username, &smtp.password) {
            builder = builder.credentials(Credentials::new(user.clone(), pass.clone()));
        }

        let from = config.from.parse::<Mailbox>().map_err(|e| {
            AppError::with_source(
                ErrorKind::Configuration,
                format!("mail.from is not a valid address: '{}'", config.from),
                e,
            )
        })?;

        Ok(Self {
            transport: builder.build(),
            from,
            host: smtp.host.clone(),
            port: smtp.port,
        })
    }
}

#[async_trait]
impl Mailer for SmtpMailer {
    async fn send(&self, message: &MailMessage) -> AppResult<()> {
        let to = message.to.parse::<Mailbox>().map_err(|e| {
            AppError::with_source(
                ErrorKind::Validation,
                format!("Invalid recipient '{}'", message.to),
                e,
            )
        })?;

        let email = Message::builder()
            .from(self.from.clone())
            .to(to)
            .subject(message.subject.clone())
            .header(ContentType::TEXT_HTML)
            .body(message.html.clone())
            .map_err(|e| {
                AppError::with_source(ErrorKind::Internal, "Failed to build mail message", e)
            })?;

        self.transport.send(email).await.map_err(|e| {
            AppError::with_source(
                ErrorKind::ExternalService,
                format!("SMTP delivery to {} via {} failed: {e}", message.to, self.host),
                e,
            )
        })?;

        debug!(to = %message.to, host = %self.host, "SMTP server accepted message");
        Ok(())
    }

    fn name(&self) -> &'static str {
        "smtp"
    }
}

//! JSON-over-HTTP mail relay transport.

use std::time::Duration;

use async_trait::async_trait;
use serde::Serialize;
use tracing::debug;

use planner_core::config::MailConfig;
use planner_core::error::{AppError, ErrorKind};
use planner_core::result::AppResult;
use planner_core::traits::{MailMessage, Mailer};

/// Posts each message to a relay endpoint as
/// `{"from", "to", "subject", "html"}`.
#[derive(Debug, Clone)]
pub struct HttpMailer {
    client: reqwest::Client,
    endpoint: String,
    api_key: Option<String>,
    from: String,
}

#[derive(Debug, Serialize)]
struct RelayPayload<'a> {
    from: &'a str,
    to: &'a str,
    subject: &'a str,
    html: &'a str,
}

impl HttpMailer {
    /// Build a relay client from configuration.
    pub fn new(config: &MailConfig) -> AppResult<Self> {
        config.validate()?;
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()
            .map_err(|e| {
                AppError::with_source(
                    ErrorKind::Configuration,
                    format!("Failed to build mail relay client: {e}"),
                    e,
                )
            })?;

        Ok(Self {
            client,
            endpoint: config.endpoint.clone(),
            api_key: config.api_key.clone().filter(|k| !k.is_empty()),
            from: config.from.clone(),
        })
    }
}

#[async_trait]
impl Mailer for HttpMailer {
    async fn send(&self, message: &MailMessage) -> AppResult<()> {
        let payload = RelayPayload {
            from: &self.from,
            to: &message.to,
            subject: &message.subject,
            html: &message.html,
        };

        let mut request = self.client.post(&self.endpoint).json(&payload);
        if let Some(key) = &self.api_key {
            request = request.bearer_auth(key);
        }

        let response = request.send().await.map_err(|e| {
            AppError::with_source(
                ErrorKind::ExternalService,
                format!("Mail relay request failed: {e}"),
                e,
            )
        })?;

        let status = response.status();
        if !status.is_success() {
            return Err(AppError::external_service(format!(
                "Mail relay responded with {status}"
            )));
        }

        debug!(to = %message.to, "Mail relay accepted message");
        Ok(())
    }

    fn name(&self) -> &'static str {
        "http"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use axum::Router;
    use axum::http::{HeaderMap, StatusCode};
    use axum::routing::post;
    use tokio::sync::Mutex;

    type Captured = Arc<Mutex<Vec<(Option<String>, serde_json::Value)>>>;

    async fn spawn_relay(status: StatusCode) -> (String, Captured) {
        let captured: Captured = Arc::new(Mutex::new(Vec::new()));
        let sink = captured.clone();
        let app = Router::new().route(
            "/send",
            post(move |headers: HeaderMap, body: axum::Json<serde_json::Value>| {
                let sink = sink.clone();
                async move {
                    let auth = headers
                        .get("authorization")
                        .and_then(|v| v.to_str().ok())
                        .map(str::to_string);
                    sink.lock().await.push((auth, body.0));
                    status
                }
            }),
        );
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        (format!("http://{addr}/send"), captured)
    }

    fn config(endpoint: String) -> MailConfig {
        MailConfig {
            transport: "http".to_string(),
            endpoint,
            api_key: Some("relay-key".to_string()),
            from: "planner@example.com".to_string(),
            timeout_seconds: 5,
            ..MailConfig::default()
        }
    }

    fn message() -> MailMessage {
        MailMessage {
            to: "a@x.com".to_string(),
            subject: "Hello".to_string(),
            html: "<p>hi</p>".to_string(),
        }
    }

    #[tokio::test]
    async fn test_posts_payload_with_bearer_key() {
        let (endpoint, captured) = spawn_relay(StatusCode::ACCEPTED).await;
        let mailer = HttpMailer::new(&config(endpoint)).unwrap();

        mailer.send(&message()).await.unwrap();

        let calls = captured.lock().await;
        assert_eq!(calls.len(), 1);
        let (auth, body) = &calls[0];
        assert_eq!(auth.as_deref(), Some("Bearer relay-key"));
        assert_eq!(body["from"], "planner@example.com");
        assert_eq!(body["to"], "a@x.com");
        assert_eq!(body["subject"], "Hello");
    }

    #[tokio::test]
    async fn test_non_success_status_is_external_error() {
        let (endpoint, _captured) = spawn_relay(StatusCode::BAD_GATEWAY).await;
        let mailer = HttpMailer::new(&config(endpoint)).unwrap();

        let err = mailer.send(&message()).await.unwrap_err();
        assert_eq!(err.kind, ErrorKind::ExternalService);
    }

    #[test]
    fn test_requires_endpoint() {
        assert!(HttpMailer::new(&config(String::new())).is_err());
    }
}

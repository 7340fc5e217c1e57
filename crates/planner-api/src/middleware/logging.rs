//! Request/response logging middleware.

use std::time::Instant;

use axum::extract::Request;
use axum::middleware::Next;
use axum::response::Response;
use tracing::{info, warn};

const SHARES_PREFIX: &str = "/api/shares/";
const TOKEN_PREFIX_LEN: usize = 6;

/// Logs method, path, status and duration of every request. Share tokens
/// are bearer credentials, so only their first characters reach the log.
pub async fn request_logging(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let path = redact_share_token(request.uri().path());
    let start = Instant::now();

    let response = next.run(request).await;

    let status = response.status();
    let duration_ms = start.elapsed().as_millis() as u64;
    if status.is_server_error() {
        warn!(method = %method, path = %path, status = status.as_u16(), duration_ms, "HTTP request failed");
    } else {
        info!(method = %method, path = %path, status = status.as_u16(), duration_ms, "HTTP request");
    }

    response
}

fn redact_share_token(path: &str) -> String {
    match path.strip_prefix(SHARES_PREFIX) {
        Some(token) if !token.is_empty() => {
            let visible: String = token.chars().take(TOKEN_PREFIX_LEN).collect();
            format!("{SHARES_PREFIX}{visible}…")
        }
        _ => path.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_share_token_is_truncated() {
        assert_eq!(
            redact_share_token("/api/shares/Zm9vYmFyYmF6cXV4"),
            "/api/shares/Zm9vYm…"
        );
    }

    #[test]
    fn test_other_paths_untouched() {
        assert_eq!(redact_share_token("/api/shares"), "/api/shares");
        assert_eq!(redact_share_token("/api/shares/"), "/api/shares/");
        assert_eq!(redact_share_token("/api/todos/42"), "/api/todos/42");
    }
}

//! Share link configuration.

use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// Smallest token entropy accepted, in bytes.
pub const MIN_TOKEN_BYTES: usize = 16;

/// Share link settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShareConfig {
    /// Public front-end URL that share links are built from.
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Number of random bytes per token.
    #[serde(default = "default_token_bytes")]
    pub token_bytes: usize,
    /// How many fresh tokens to try when the store reports a collision.
    #[serde(default = "default_max_token_attempts")]
    pub max_token_attempts: u32,
}

impl Default for ShareConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            token_bytes: default_token_bytes(),
            max_token_attempts: default_max_token_attempts(),
        }
    }
}

impl ShareConfig {
    /// Validate token and URL settings.
    pub fn validate(&self) -> Result<(), AppError> {
        if self.token_bytes < MIN_TOKEN_BYTES {
            return Err(AppError::configuration(format!(
                "share.token_bytes must be at least {MIN_TOKEN_BYTES}, got {}",
                self.token_bytes
            )));
        }
        if self.max_token_attempts == 0 {
            return Err(AppError::configuration(
                "share.max_token_attempts must be at least 1",
            ));
        }
        if self.base_url.trim().is_empty() {
            return Err(AppError::configuration("share.base_url must not be empty"));
        }
        Ok(())
    }

    /// Build the public URL for a share token.
    pub fn share_url(&self, token: &str) -> String {
        format!("{}/share/{token}", self.base_url.trim_end_matches('/'))
    }
}

fn default_base_url() -> String {
    "http://localhost:3000".to_string()
}

fn default_token_bytes() -> usize {
    32
}

fn default_max_token_attempts() -> u32 {
    5
}

//! Share link token generation.

use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use rand::RngCore;

use planner_core::config::share::MIN_TOKEN_BYTES;
use planner_core::error::AppError;
use planner_core::result::AppResult;

/// Source of share tokens.
pub trait TokenGenerator: Send + Sync + std::fmt::Debug + 'static {
    /// Produce a fresh token.
    fn generate(&self) -> String;
}

/// Generates URL-safe tokens from the OS-seeded thread RNG.
#[derive(Debug, Clone)]
pub struct RandomTokenGenerator {
    bytes: usize,
}

impl RandomTokenGenerator {
    /// Create a generator producing `bytes` bytes of entropy per token.
    pub fn new(bytes: usize) -> AppResult<Self> {
        if bytes < MIN_TOKEN_BYTES {
            return Err(AppError::configuration(format!(
                "Share tokens need at least {MIN_TOKEN_BYTES} bytes of entropy, got {bytes}"
            )));
        }
        Ok(Self { bytes })
    }
}

impl TokenGenerator for RandomTokenGenerator {
    fn generate(&self) -> String {
        let mut buf = vec![0u8; self.bytes];
        rand::rng().fill_bytes(&mut buf);
        URL_SAFE_NO_PAD.encode(buf)
    }
}

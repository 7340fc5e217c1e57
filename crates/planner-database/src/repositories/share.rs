//! Share persistence contract.

use async_trait::async_trait;

use planner_core::result::AppResult;
use planner_entity::share::ShareRecord;

/// Storage for share records. Records are insert-only.
#[async_trait]
pub trait ShareRepository: Send + Sync + std::fmt::Debug + 'static {
    /// Persist a new share.
    ///
    /// Must fail with a `Conflict` error, and leave the existing record
    /// untouched, when the token is already taken.
    async fn insert(&self, share: &ShareRecord) -> AppResult<ShareRecord>;

    /// Exact-match lookup by public token.
    async fn find_by_token(&self, token: &str) -> AppResult<Option<ShareRecord>>;
}

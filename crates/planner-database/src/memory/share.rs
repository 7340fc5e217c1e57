//! In-memory share store.

use std::sync::Arc;

use async_trait::async_trait;
use dashmap::DashMap;
use dashmap::mapref::entry::Entry;

use planner_core::error::AppError;
use planner_core::result::AppResult;
use planner_entity::share::ShareRecord;

use crate::repositories::ShareRepository;

/// Share store keyed by token.
#[derive(Debug, Clone, Default)]
pub struct MemoryShareRepository {
    rows: Arc<DashMap<String, ShareRecord>>,
}

impl MemoryShareRepository {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored shares.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the store is empty.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

#[async_trait]
impl ShareRepository for MemoryShareRepository {
    async fn insert(&self, share: &ShareRecord) -> AppResult<ShareRecord> {
        match self.rows.entry(share.token.clone()) {
            Entry::Occupied(_) => Err(AppError::conflict("Share token already exists")),
            Entry::Vacant(slot) => {
                slot.insert(share.clone());
                Ok(share.clone())
            }
        }
    }

    async fn find_by_token(&self, token: &str) -> AppResult<Option<ShareRecord>> {
        Ok(self.rows.get(token).map(|r| r.value().clone()))
    }
}

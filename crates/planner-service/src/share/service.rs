//! Share creation and resolution.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::{debug, info, warn};

use planner_core::config::ShareConfig;
use planner_core::error::{AppError, ErrorKind};
use planner_core::result::AppResult;
use planner_database::repositories::ShareRepository;
use planner_entity::SharedContent;
use planner_entity::share::{
    ContentKind, ContentRef, NewShare, SharePermission, ShareLink, ShareRecord, normalize_emails,
};

use super::link::TokenGenerator;
use super::notify::{DeliveryReport, ShareNotifier};
use super::resolver::ContentResolver;

/// Request to create a new share.
#[derive(Debug, Clone)]
pub struct CreateShareRequest {
    /// Content being shared. Not checked for existence.
    pub content: ContentRef,
    /// Permission level.
    pub permission: SharePermission,
    /// Expiration instant (None = never).
    pub expires_at: Option<DateTime<Utc>>,
    /// Addresses to notify.
    pub emails: Vec<String>,
}

/// Result of a successful creation.
#[derive(Debug, Clone)]
pub struct ShareCreated {
    /// Token and URL handed back to the caller.
    pub link: ShareLink,
    /// What happened to the notifications.
    pub delivery: DeliveryReport,
}

/// A resolved share: the current content plus the stored permission.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedShare {
    /// The referenced record as it is now.
    pub content: SharedContent,
    /// Kind of `content`.
    pub content_kind: ContentKind,
    /// Permission stored on the share.
    pub permission: SharePermission,
}

/// Creates and resolves share links.
#[derive(Debug, Clone)]
pub struct ShareService {
    shares: Arc<dyn ShareRepository>,
    resolver: Arc<ContentResolver>,
    tokens: Arc<dyn TokenGenerator>,
    notifier: Arc<ShareNotifier>,
    config: ShareConfig,
}

impl ShareService {
    /// Creates a new share service.
    pub fn new(
        shares: Arc<dyn ShareRepository>,
        resolver: Arc<ContentResolver>,
        tokens: Arc<dyn TokenGenerator>,
        notifier: Arc<ShareNotifier>,
        config: ShareConfig,
    ) -> Self {
        Self {
            shares,
            resolver,
            tokens,
            notifier,
            config,
        }
    }

    /// Persist a new share and notify its recipients.
    ///
    /// Notification outcome never affects the result.
    pub async fn create_share(&self, req: CreateShareRequest) -> AppResult<ShareCreated> {
        if req.content.id.trim().is_empty() {
            return Err(AppError::validation("contentId is required"));
        }
        let emails = normalize_emails(&req.emails)?;
        let kind = req.content.kind;

        let record = self
            .insert_with_fresh_token(NewShare {
                token: String::new(),
                content: req.content,
                permission: req.permission,
                expires_at: req.expires_at,
                notified_emails: emails,
            })
            .await?;

        let link = ShareLink {
            share_url: self.config.share_url(&record.token),
            token: record.token.clone(),
        };

        info!(
            token_prefix = %token_prefix(&record.token),
            kind = %kind,
            permission = %record.permission,
            expires_at = ?record.expires_at,
            recipients = record.notified_emails.len(),
            "Share created"
        );

        let delivery = self
            .notifier
            .notify(kind, &link.share_url, &record.notified_emails)
            .await;

        Ok(ShareCreated { link, delivery })
    }

    /// Resolve a token against the current time.
    pub async fn resolve_share(&self, token: &str) -> AppResult<ResolvedShare> {
        self.resolve_share_at(token, Utc::now()).await
    }

    /// Resolve a token as of `now`.
    ///
    /// Unknown token: `NotFound`. Lapsed share: `Expired` (content is not
    /// fetched). Referenced record absent: `ContentGone`.
    pub async fn resolve_share_at(
        &self,
        token: &str,
        now: DateTime<Utc>,
    ) -> AppResult<ResolvedShare> {
        let share = self
            .shares
            .find_by_token(token)
            .await?
            .ok_or_else(|| AppError::not_found("Share link not found"))?;

        if share.is_expired_at(now) {
            debug!(token_prefix = %token_prefix(token), "Share link expired");
            return Err(AppError::expired("Share link has expired"));
        }

        let content_ref = share.content_ref();
        let content = self.resolver.fetch(&content_ref).await?.ok_or_else(|| {
            debug!(
                token_prefix = %token_prefix(token),
                kind = %content_ref.kind,
                content_id = %content_ref.id,
                "Shared content no longer exists"
            );
            AppError::content_gone(format!("Shared {} no longer exists", content_ref.kind))
        })?;

        Ok(ResolvedShare {
            content,
            content_kind: share.content_kind,
            permission: share.permission,
        })
    }

    async fn insert_with_fresh_token(&self, mut data: NewShare) -> AppResult<ShareRecord> {
        let attempts = self.config.max_token_attempts.max(1);
        for attempt in 1..=attempts {
            data.token = self.tokens.generate();
            let record = ShareRecord::from_new(data.clone(), Utc::now());
            match self.shares.insert(&record).await {
                Ok(saved) => return Ok(saved),
                Err(e) if e.kind == ErrorKind::Conflict => {
                    warn!(attempt, "Share token collision, regenerating");
                }
                Err(e) => return Err(e),
            }
        }
        Err(AppError::storage(format!(
            "Could not allocate a unique share token after {attempts} attempts"
        )))
    }
}

/// First characters of a token, enough to correlate log lines.
fn token_prefix(token: &str) -> &str {
    token.get(..6).unwrap_or(token)
}

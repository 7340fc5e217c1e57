//! Application state shared across all handlers and middleware.

use std::sync::Arc;
use std::time::Instant;

use planner_core::config::AppConfig;
use planner_core::result::AppResult;
use planner_core::traits::Mailer;
use planner_database::DataStore;
use planner_service::share::{
    ContentResolver, RandomTokenGenerator, ShareNotifier, ShareService,
};
use planner_service::{EventService, NoteService, TodoService};

/// Shared application state passed to all Axum handlers via `State`.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Application configuration.
    pub config: Arc<AppConfig>,
    /// Persistence provider.
    pub store: DataStore,
    /// To-do service.
    pub todo_service: Arc<TodoService>,
    /// Event service.
    pub event_service: Arc<EventService>,
    /// Note service.
    pub note_service: Arc<NoteService>,
    /// Share registry.
    pub share_service: Arc<ShareService>,
    /// Process start, for uptime reporting.
    pub started_at: Instant,
}

impl AppState {
    /// Wire services over `store`, sending notifications through `mailer`.
    pub fn new(config: AppConfig, store: DataStore, mailer: Arc<dyn Mailer>) -> AppResult<Self> {
        let resolver = Arc::new(ContentResolver::from_store(&store)?);
        let tokens = Arc::new(RandomTokenGenerator::new(config.share.token_bytes)?);
        let notifier = Arc::new(ShareNotifier::new(mailer));

        let share_service = Arc::new(ShareService::new(
            Arc::clone(&store.shares),
            resolver,
            tokens,
            notifier,
            config.share.clone(),
        ));

        Ok(Self {
            todo_service: Arc::new(TodoService::new(Arc::clone(&store.todos))),
            event_service: Arc::new(EventService::new(Arc::clone(&store.events))),
            note_service: Arc::new(NoteService::new(Arc::clone(&store.notes))),
            share_service,
            store,
            config: Arc::new(config),
            started_at: Instant::now(),
        })
    }
}

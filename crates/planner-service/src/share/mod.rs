//! Share registry: token issuance, kind-directed content resolution and
//! recipient notification.

pub mod link;
pub mod notify;
pub mod resolver;
pub mod service;

pub use link::{RandomTokenGenerator, TokenGenerator};
pub use notify::{DeliveryReport, ShareNotifier};
pub use resolver::{ContentFetcher, ContentResolver, EventFetcher, NoteFetcher, TodoFetcher};
pub use service::{CreateShareRequest, ResolvedShare, ShareCreated, ShareService};

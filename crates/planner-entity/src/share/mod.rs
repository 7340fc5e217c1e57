//! Share registry records.

pub mod kind;
pub mod link;
pub mod model;
pub mod permission;
pub mod recipients;

pub use kind::{ContentKind, ContentRef};
pub use link::ShareLink;
pub use model::{NewShare, ShareRecord};
pub use permission::SharePermission;
pub use recipients::normalize_emails;

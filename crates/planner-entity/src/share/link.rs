//! Share link value object.

use serde::{Deserialize, Serialize};

/// Result of creating a share: the public token and the URL to hand out.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShareLink {
    /// The share token.
    pub token: String,
    /// Fully qualified URL for opening the share.
    pub share_url: String,
}

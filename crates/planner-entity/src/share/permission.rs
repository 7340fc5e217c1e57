//! Access level attached to a share.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use planner_core::AppError;

/// Permission granted by a share link. Enforcement is left to the consumer.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type,
)]
#[sqlx(type_name = "share_permission", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum SharePermission {
    /// View only.
    #[default]
    Read,
    /// View and modify.
    Edit,
}

impl SharePermission {
    /// Lowercase wire name.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Read => "read",
            Self::Edit => "edit",
        }
    }
}

impl fmt::Display for SharePermission {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SharePermission {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "read" => Ok(Self::Read),
            "edit" => Ok(Self::Edit),
            _ => Err(AppError::validation(format!("Invalid permission: {s}"))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_read() {
        assert_eq!(SharePermission::default(), SharePermission::Read);
    }

    #[test]
    fn test_parse() {
        assert_eq!("Edit".parse::<SharePermission>().unwrap(), SharePermission::Edit);
        assert!("admin".parse::<SharePermission>().is_err());
    }
}

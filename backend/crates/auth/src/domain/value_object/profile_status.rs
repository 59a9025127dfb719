//! Profile Status Value Object

use serde::{Deserialize, Serialize};
use std::fmt;

/// Account status
///
/// - **Active**: can log in and be authenticated by tokens
/// - **Disabled**: login fails with `AccountDisabled`; existing tokens no
///   longer establish a context
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[repr(i16)]
pub enum ProfileStatus {
    #[default]
    Active = 0,
    Disabled = 1,
}

impl ProfileStatus {
    /// Numeric ID for database storage
    #[inline]
    pub const fn id(&self) -> i16 {
        *self as i16
    }

    #[inline]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Disabled => "disabled",
        }
    }

    #[inline]
    pub const fn can_login(&self) -> bool {
        matches!(self, Self::Active)
    }

    #[inline]
    pub fn from_id(id: i16) -> Option<Self> {
        match id {
            0 => Some(Self::Active),
            1 => Some(Self::Disabled),
            _ => None,
        }
    }

    #[inline]
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "active" => Some(Self::Active),
            "disabled" => Some(Self::Disabled),
            _ => None,
        }
    }
}

impl fmt::Display for ProfileStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_id() {
        assert_eq!(ProfileStatus::from_id(0), Some(ProfileStatus::Active));
        assert_eq!(ProfileStatus::from_id(1), Some(ProfileStatus::Disabled));
        assert_eq!(ProfileStatus::from_id(2), None);
    }

    #[test]
    fn test_from_code() {
        assert_eq!(ProfileStatus::from_code("active"), Some(ProfileStatus::Active));
        assert_eq!(
            ProfileStatus::from_code("disabled"),
            Some(ProfileStatus::Disabled)
        );
        assert_eq!(ProfileStatus::from_code("memorial"), None);
    }

    #[test]
    fn test_can_login() {
        assert!(ProfileStatus::Active.can_login());
        assert!(!ProfileStatus::Disabled.can_login());
    }

    #[test]
    fn test_display() {
        assert_eq!(ProfileStatus::Active.to_string(), "active");
        assert_eq!(ProfileStatus::Disabled.to_string(), "disabled");
    }
}

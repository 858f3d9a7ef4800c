//! Role and deletion-flag codes shared with the backend.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Role code of a regular user.
pub const ROLE_USER: i32 = 0;
/// Role code of an administrator.
pub const ROLE_ADMIN: i32 = 1;

/// Deletion flag of an active record.
pub const DELETED_NO: i32 = 0;
/// Deletion flag of a soft-deleted record.
pub const DELETED_YES: i32 = 1;

/// Account role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "i32", into = "i32")]
pub enum Role {
    /// Regular user.
    User,
    /// Administrator.
    Admin,
    /// A code this client does not know about.
    Unknown(i32),
}

impl Role {
    /// Returns the numeric code sent over the wire.
    #[must_use]
    pub const fn code(self) -> i32 {
        match self {
            Self::User => ROLE_USER,
            Self::Admin => ROLE_ADMIN,
            Self::Unknown(code) => code,
        }
    }

    /// Returns true for administrators.
    #[must_use]
    pub const fn is_admin(self) -> bool {
        matches!(self, Self::Admin)
    }

    /// Display label.
    #[must_use]
    pub fn label(self) -> String {
        match self {
            Self::User => "用户".to_string(),
            Self::Admin => "管理员".to_string(),
            Self::Unknown(code) => format!("未知角色({code})"),
        }
    }
}

impl From<i32> for Role {
    fn from(code: i32) -> Self {
        match code {
            ROLE_USER => Self::User,
            ROLE_ADMIN => Self::Admin,
            other => Self::Unknown(other),
        }
    }
}

impl From<Role> for i32 {
    fn from(role: Role) -> Self {
        role.code()
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label())
    }
}

/// Display label for a role code.
#[must_use]
pub fn role_label(code: i32) -> String {
    Role::from(code).label()
}

/// Returns true if the role code is the administrator code.
#[must_use]
pub const fn is_admin(code: i32) -> bool {
    code == ROLE_ADMIN
}

/// Display label for a deletion flag.
#[must_use]
pub fn deleted_label(flag: i32) -> String {
    match flag {
        DELETED_NO => "正常".to_string(),
        DELETED_YES => "已删除".to_string(),
        other => format!("未知状态({other})"),
    }
}

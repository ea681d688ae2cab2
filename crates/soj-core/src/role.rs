//! Permission tiers and the resolved session state.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::identity::UserIdentity;

/// Coarse permission tier assigned by the backend.
///
/// Parsing is strict: any value outside the three known tiers is rejected,
/// and the session resolver treats the user as unauthenticated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Admin,
    Superadmin,
}

impl Role {
    /// `admin` and `superadmin` are treated identically for routing.
    #[must_use]
    pub const fn is_admin_level(self) -> bool {
        matches!(self, Self::Admin | Self::Superadmin)
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::User => "user",
            Self::Admin => "admin",
            Self::Superadmin => "superadmin",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = crate::CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "user" => Ok(Self::User),
            "admin" => Ok(Self::Admin),
            "superadmin" => Ok(Self::Superadmin),
            other => Err(crate::CoreError::UnknownRole(other.to_string())),
        }
    }
}

/// Output of the session resolver.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthState {
    /// No valid session. Also the collapse target for every resolver failure.
    Unauthenticated,
    /// A session exists and the backend returned a recognized role.
    Authenticated(UserIdentity),
}

impl AuthState {
    #[must_use]
    pub const fn is_authenticated(&self) -> bool {
        matches!(self, Self::Authenticated(_))
    }

    /// The resolved role, if any.
    #[must_use]
    pub const fn role(&self) -> Option<Role> {
        match self {
            Self::Authenticated(identity) => Some(identity.role),
            Self::Unauthenticated => None,
        }
    }
}

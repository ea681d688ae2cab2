use serde::{Deserialize, Serialize};

use crate::role::Role;

/// Lightweight authenticated user identity for cross-crate passing.
///
/// Produced by `soj-auth`'s session resolver, consumed by `soj-cli` and the
/// navigation controller. Contains only data fields — no auth logic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserIdentity {
    /// Backend user ID.
    pub user_id: String,
    /// Resolved permission tier.
    pub role: Role,
    /// Email, when the backend includes profile fields.
    pub email: Option<String>,
    /// Display name, when the backend includes profile fields.
    pub name: Option<String>,
}

impl UserIdentity {
    /// Identity with only the fields the role endpoint guarantees.
    #[must_use]
    pub const fn bare(user_id: String, role: Role) -> Self {
        Self {
            user_id,
            role,
            email: None,
            name: None,
        }
    }
}

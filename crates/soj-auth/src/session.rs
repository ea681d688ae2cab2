//! Startup session resolution.
//!
//! Determines authentication state by combining the persisted token with a
//! remote role lookup. Every failure mode — network error, non-2xx status,
//! unparseable body, unknown role — collapses to
//! [`AuthState::Unauthenticated`] and clears the persisted credentials, so a
//! broken session can never wedge the app in a loading state. No retry is
//! attempted here; a fresh sign-in is the recovery path.

use std::time::Duration;

use serde::Deserialize;
use soj_core::{AuthState, Role, UserIdentity};

use crate::error::AuthError;
use crate::profile_cache::ProfileCache;
use crate::token_store::TokenStore;

#[derive(Deserialize)]
struct RoleLookupResponse {
    user: UserPayload,
}

#[derive(Deserialize)]
struct UserPayload {
    id: String,
    role: String,
    email: Option<String>,
    name: Option<String>,
}

/// Resolves the current session against `GET {base}/auth/user`.
#[derive(Debug, Clone)]
pub struct SessionResolver {
    http: reqwest::Client,
    base_url: String,
    store: TokenStore,
    profiles: ProfileCache,
}

impl SessionResolver {
    /// Build a resolver with a bounded request timeout.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::Http` if the HTTP client cannot be constructed.
    pub fn new(
        base_url: impl Into<String>,
        timeout: Duration,
        store: TokenStore,
    ) -> Result<Self, AuthError> {
        let http = reqwest::Client::builder().timeout(timeout).build()?;
        let profiles = crate::profile_cache::sibling_of(store.root());
        Ok(Self {
            http,
            base_url: base_url.into(),
            store,
            profiles,
        })
    }

    /// Determine the authentication state at startup.
    ///
    /// Reads the persisted token; if present, asks the backend who it belongs
    /// to. Only a recognized role yields `Authenticated`; everything else —
    /// including an invalid token — clears the stored credentials and yields
    /// `Unauthenticated`.
    pub async fn resolve(&self) -> AuthState {
        let Some(token) = self.store.load() else {
            tracing::debug!("no persisted token; resolving to unauthenticated");
            return AuthState::Unauthenticated;
        };

        match self.lookup_role(&token).await {
            Ok(identity) => AuthState::Authenticated(identity),
            Err(error) => {
                tracing::warn!(%error, "session resolution failed; clearing stored credentials");
                self.clear_credentials();
                AuthState::Unauthenticated
            }
        }
    }

    /// Call the role endpoint with a bearer token.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::Unauthorized` on 401, `AuthError::Api` on other
    /// non-success statuses, `AuthError::Parse` on a malformed body, and
    /// `AuthError::UnrecognizedRole` if the role is outside the known set.
    pub async fn lookup_role(&self, token: &str) -> Result<UserIdentity, AuthError> {
        let url = format!("{}/auth/user", self.base_url);
        let resp = self
            .http
            .get(&url)
            .header("Authorization", format!("Bearer {token}"))
            .send()
            .await?;

        let status = resp.status();
        if status == reqwest::StatusCode::UNAUTHORIZED {
            return Err(AuthError::Unauthorized);
        }
        if !status.is_success() {
            return Err(AuthError::Api {
                status: status.as_u16(),
                message: resp.text().await.unwrap_or_default(),
            });
        }

        let body: RoleLookupResponse = resp
            .json()
            .await
            .map_err(|e| AuthError::Parse(format!("role lookup: {e}")))?;

        let role: Role = body
            .user
            .role
            .parse()
            .map_err(|_| AuthError::UnrecognizedRole(body.user.role.clone()))?;

        Ok(UserIdentity {
            user_id: body.user.id,
            role,
            email: body.user.email,
            name: body.user.name,
        })
    }

    /// Drop the persisted token and cached profile. Failures are logged, not
    /// propagated — a clear that half-fails still leaves the session signed
    /// out.
    pub fn clear_credentials(&self) {
        if let Err(error) = self.store.delete() {
            tracing::warn!(%error, "failed to clear persisted token");
        }
        if let Err(error) = self.profiles.delete() {
            tracing::warn!(%error, "failed to clear cached profile");
        }
    }

    /// The token store this resolver reads.
    #[must_use]
    pub const fn store(&self) -> &TokenStore {
        &self.store
    }

    /// The profile cache wiped alongside the token.
    #[must_use]
    pub const fn profiles(&self) -> &ProfileCache {
        &self.profiles
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn role_lookup_response_parses() {
        let json = r#"{"user": {"id": "1", "role": "admin", "email": null, "name": "An"}}"#;
        let body: RoleLookupResponse = serde_json::from_str(json).unwrap();
        assert_eq!(body.user.id, "1");
        assert_eq!(body.user.role, "admin");
        assert_eq!(body.user.name.as_deref(), Some("An"));
    }

    #[test]
    fn role_lookup_response_without_profile_fields() {
        let json = r#"{"user": {"id": "9", "role": "user"}}"#;
        let body: RoleLookupResponse = serde_json::from_str(json).unwrap();
        assert!(body.user.email.is_none());
        assert!(body.user.name.is_none());
    }

    #[test]
    fn unknown_role_string_maps_to_unrecognized_role() {
        let parsed = "moderator".parse::<Role>();
        assert!(parsed.is_err());
    }
}

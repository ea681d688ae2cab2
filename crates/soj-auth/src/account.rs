//! Account management against the backend's `/auth` endpoints: sign-in,
//! sign-out, password change, profile read/edit.
//!
//! Sign-out is deliberately asymmetric: the network call is best-effort, but
//! the local credential clear always happens, so a later cold start resolves
//! to unauthenticated even when the backend was unreachable.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use soj_core::entities::Profile;
use soj_core::{Role, UserIdentity};

use crate::error::AuthError;
use crate::profile_cache::ProfileCache;
use crate::token_store::TokenStore;

#[derive(Deserialize)]
struct LoginResponse {
    token: String,
    user: LoginUser,
}

#[derive(Deserialize)]
struct LoginUser {
    id: String,
    role: String,
    email: Option<String>,
    name: Option<String>,
}

/// Fields accepted by `PUT /auth/profile`. `None` leaves a field unchanged.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ProfileUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
}

/// Client for the account endpoints.
#[derive(Debug, Clone)]
pub struct AccountClient {
    http: reqwest::Client,
    base_url: String,
    store: TokenStore,
    profiles: ProfileCache,
}

impl AccountClient {
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

    /// Sign in with email and password.
    ///
    /// On success the token is persisted and the profile cached, then the
    /// identity is returned for immediate routing.
    ///
    /// # Errors
    ///
    /// `AuthError::Unauthorized` on rejected credentials, `AuthError::Api`
    /// on other non-success statuses, `AuthError::UnrecognizedRole` if the
    /// backend hands back a role outside the known set, and
    /// `AuthError::TokenStore` if the token cannot be persisted anywhere.
    pub async fn login(&self, email: &str, password: &str) -> Result<UserIdentity, AuthError> {
        let url = format!("{}/auth/login", self.base_url);
        let resp = self
            .http
            .post(&url)
            .json(&serde_json::json!({ "email": email, "password": password }))
            .send()
            .await?;

        let body: LoginResponse = read_json(resp, "login").await?;

        let role: Role = body
            .user
            .role
            .parse()
            .map_err(|_| AuthError::UnrecognizedRole(body.user.role.clone()))?;

        self.store.store(&body.token)?;

        let profile = Profile {
            user_id: body.user.id.clone(),
            email: body.user.email.clone(),
            name: body.user.name.clone(),
            avatar_url: None,
        };
        if let Err(error) = self.profiles.store(&profile) {
            tracing::warn!(%error, "failed to cache profile after sign-in");
        }

        Ok(UserIdentity {
            user_id: body.user.id,
            role,
            email: body.user.email,
            name: body.user.name,
        })
    }

    /// Sign out: best-effort server notification, unconditional local clear.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::TokenStore` / `AuthError::ProfileCache` only if
    /// the local clear itself fails; network failure is logged and swallowed.
    pub async fn logout(&self) -> Result<(), AuthError> {
        if let Some(token) = self.store.load() {
            let url = format!("{}/auth/logout", self.base_url);
            let sent = self
                .http
                .post(&url)
                .header("Authorization", format!("Bearer {token}"))
                .send()
                .await;
            if let Err(error) = sent {
                tracing::warn!(%error, "server-side logout failed; clearing local session anyway");
            }
        }

        self.store.delete()?;
        self.profiles.delete()?;
        Ok(())
    }

    /// Change the account password.
    ///
    /// # Errors
    ///
    /// `AuthError::NotAuthenticated` without a stored token; otherwise the
    /// usual HTTP error mapping.
    pub async fn change_password(&self, current: &str, new: &str) -> Result<(), AuthError> {
        let token = self.require_token()?;
        let url = format!("{}/auth/password", self.base_url);
        let resp = self
            .http
            .put(&url)
            .header("Authorization", format!("Bearer {token}"))
            .json(&serde_json::json!({
                "current_password": current,
                "new_password": new,
            }))
            .send()
            .await?;

        check_status(resp, "change password").await?;
        Ok(())
    }

    /// Fetch the signed-in user's profile.
    ///
    /// # Errors
    ///
    /// `AuthError::NotAuthenticated` without a stored token; otherwise the
    /// usual HTTP error mapping.
    pub async fn get_profile(&self) -> Result<Profile, AuthError> {
        let token = self.require_token()?;
        let url = format!("{}/auth/profile", self.base_url);
        let resp = self
            .http
            .get(&url)
            .header("Authorization", format!("Bearer {token}"))
            .send()
            .await?;

        read_json(resp, "get profile").await
    }

    /// Update profile fields and refresh the local cache.
    ///
    /// # Errors
    ///
    /// `AuthError::NotAuthenticated` without a stored token; otherwise the
    /// usual HTTP error mapping.
    pub async fn update_profile(&self, update: &ProfileUpdate) -> Result<Profile, AuthError> {
        let token = self.require_token()?;
        let url = format!("{}/auth/profile", self.base_url);
        let resp = self
            .http
            .put(&url)
            .header("Authorization", format!("Bearer {token}"))
            .json(update)
            .send()
            .await?;

        let profile: Profile = read_json(resp, "update profile").await?;
        if let Err(error) = self.profiles.store(&profile) {
            tracing::warn!(%error, "failed to refresh cached profile");
        }
        Ok(profile)
    }

    /// The cached profile, if any (no network).
    #[must_use]
    pub fn cached_profile(&self) -> Option<Profile> {
        self.profiles.load()
    }

    fn require_token(&self) -> Result<String, AuthError> {
        self.store.load().ok_or(AuthError::NotAuthenticated)
    }
}

async fn check_status(resp: reqwest::Response, what: &str) -> Result<reqwest::Response, AuthError> {
    let status = resp.status();
    if status == reqwest::StatusCode::UNAUTHORIZED {
        return Err(AuthError::Unauthorized);
    }
    if !status.is_success() {
        return Err(AuthError::Api {
            status: status.as_u16(),
            message: format!("{what}: {}", resp.text().await.unwrap_or_default()),
        });
    }
    Ok(resp)
}

async fn read_json<T: serde::de::DeserializeOwned>(
    resp: reqwest::Response,
    what: &str,
) -> Result<T, AuthError> {
    let resp = check_status(resp, what).await?;
    resp.json()
        .await
        .map_err(|e| AuthError::Parse(format!("{what}: {e}")))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn login_response_parses() {
        let json = r#"{
            "token": "tok_abc",
            "user": {"id": "u_1", "role": "user", "email": "a@b.c", "name": "A"}
        }"#;
        let body: LoginResponse = serde_json::from_str(json).unwrap();
        assert_eq!(body.token, "tok_abc");
        assert_eq!(body.user.role, "user");
    }

    #[test]
    fn profile_update_skips_unset_fields() {
        let update = ProfileUpdate {
            name: Some("New Name".into()),
            ..Default::default()
        };
        let json = serde_json::to_value(&update).unwrap();
        assert_eq!(json, serde_json::json!({"name": "New Name"}));
    }
}

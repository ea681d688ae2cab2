//! Opportunistic local copy of the signed-in user's profile.
//!
//! Never a source of truth — the backend is re-queried on every session
//! resolution. The cache only lets screens show a name/email before the
//! network answers, and it is wiped together with the token on sign-out or
//! resolver failure.

use std::fs;
use std::path::{Path, PathBuf};

use soj_core::entities::Profile;

use crate::error::AuthError;
use crate::token_store::write_private;

const PROFILE_FILE_NAME: &str = "profile.json";

/// Handle to the cached profile file (`<root>/profile.json`).
#[derive(Debug, Clone)]
pub struct ProfileCache {
    root: PathBuf,
}

impl ProfileCache {
    pub fn at(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Write the profile. Failures here are recoverable — callers log and
    /// move on rather than failing the sign-in.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::ProfileCache` if serialization or the write fails.
    pub fn store(&self, profile: &Profile) -> Result<(), AuthError> {
        let json = serde_json::to_string_pretty(profile)
            .map_err(|e| AuthError::ProfileCache(format!("serialize profile: {e}")))?;
        write_private(&self.path(), &json).map_err(AuthError::ProfileCache)
    }

    /// Read the cached profile, if present and parseable.
    #[must_use]
    pub fn load(&self) -> Option<Profile> {
        let raw = fs::read_to_string(self.path()).ok()?;
        match serde_json::from_str(&raw) {
            Ok(profile) => Some(profile),
            Err(error) => {
                tracing::warn!(%error, "cached profile is unreadable; ignoring it");
                None
            }
        }
    }

    /// Remove the cached profile.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::ProfileCache` if the file exists and cannot be
    /// removed.
    pub fn delete(&self) -> Result<(), AuthError> {
        let path = self.path();
        if path.exists() {
            fs::remove_file(&path).map_err(|e| {
                AuthError::ProfileCache(format!("failed to delete {}: {e}", path.display()))
            })?;
        }
        Ok(())
    }

    fn path(&self) -> PathBuf {
        self.root.join(PROFILE_FILE_NAME)
    }
}

/// Shared root for token and profile persistence.
pub(crate) fn sibling_of(token_root: &Path) -> ProfileCache {
    ProfileCache::at(token_root)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn sample_profile() -> Profile {
        Profile {
            user_id: "u_7".into(),
            email: Some("kim@example.com".into()),
            name: Some("Kim".into()),
            avatar_url: None,
        }
    }

    #[test]
    fn store_load_delete_cycle() {
        let tmp = tempfile::TempDir::new().expect("tmp dir");
        let cache = ProfileCache::at(tmp.path());

        cache.store(&sample_profile()).expect("store");
        let loaded = cache.load().expect("load");
        assert_eq!(loaded, sample_profile());

        cache.delete().expect("delete");
        assert!(cache.load().is_none());
    }

    #[test]
    fn corrupt_cache_loads_as_none() {
        let tmp = tempfile::TempDir::new().expect("tmp dir");
        let cache = ProfileCache::at(tmp.path());

        fs::write(tmp.path().join(PROFILE_FILE_NAME), "{not json").expect("write");
        assert!(cache.load().is_none());
    }

    #[test]
    fn delete_without_file_is_ok() {
        let tmp = tempfile::TempDir::new().expect("tmp dir");
        let cache = ProfileCache::at(tmp.path());
        cache.delete().expect("delete");
    }
}

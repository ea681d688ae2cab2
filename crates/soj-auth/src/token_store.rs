//! Persistent storage for the session token.
//!
//! Tiers, in load order: OS keychain → `SOJOURN_AUTH__TOKEN` env var →
//! `<root>/credentials` file. The keychain is preferred for writes; the file
//! is the fallback when no keychain backend is available or a keychain write
//! does not survive a read-back through a fresh entry.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::AuthError;

const DEFAULT_KEYRING_SERVICE: &str = "sojourn-cli";
const KEYRING_USER: &str = "api-token";
const CREDENTIALS_FILE_NAME: &str = "credentials";
const TOKEN_ENV_VAR: &str = "SOJOURN_AUTH__TOKEN";

/// Handle to the persisted session token.
///
/// Cheap to clone; holds only the keyring service name and the data
/// directory. Construct once per process via [`TokenStore::open`], or point
/// it at a scratch directory with [`TokenStore::at`] in tests.
#[derive(Debug, Clone)]
pub struct TokenStore {
    service: String,
    root: PathBuf,
}

impl TokenStore {
    /// Open the store rooted at `~/.sojourn`.
    ///
    /// The keyring service defaults to `"sojourn-cli"`; override via
    /// `SOJOURN_KEYRING_SERVICE` to avoid touching production credentials
    /// from tests.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::TokenStore` if the home directory cannot be
    /// determined.
    pub fn open() -> Result<Self, AuthError> {
        let root = dirs::home_dir()
            .map(|home| home.join(".sojourn"))
            .ok_or_else(|| {
                AuthError::TokenStore("home directory not found — cannot store credentials".into())
            })?;
        let service = std::env::var("SOJOURN_KEYRING_SERVICE")
            .unwrap_or_else(|_| DEFAULT_KEYRING_SERVICE.to_string());
        Ok(Self { service, root })
    }

    /// Store rooted at an explicit directory with an explicit keyring service.
    pub fn at(root: impl Into<PathBuf>, service: impl Into<String>) -> Self {
        Self {
            service: service.into(),
            root: root.into(),
        }
    }

    /// Persist a token. Keychain first, file fallback.
    ///
    /// A keychain write only counts if a fresh entry reads the token back:
    /// some backends report success without persisting anything (`load` would
    /// then come up empty and the session would silently sign out).
    ///
    /// # Errors
    ///
    /// Returns `AuthError::TokenStore` if both keychain and file writes fail.
    pub fn store(&self, token: &str) -> Result<(), AuthError> {
        match keyring::Entry::new(&self.service, KEYRING_USER) {
            Ok(entry) => match entry.set_password(token) {
                Ok(()) if self.keyring_holds(token) => Ok(()),
                Ok(()) => {
                    tracing::warn!("keyring write did not persist; falling back to file");
                    self.store_file(token)
                }
                Err(error) => {
                    tracing::warn!(%error, "keyring store failed; falling back to file");
                    self.store_file(token)
                }
            },
            Err(error) => {
                tracing::warn!(%error, "keyring unavailable; falling back to file");
                self.store_file(token)
            }
        }
    }

    /// Read the token back through a fresh keyring entry.
    fn keyring_holds(&self, token: &str) -> bool {
        keyring::Entry::new(&self.service, KEYRING_USER)
            .and_then(|entry| entry.get_password())
            .is_ok_and(|stored| stored == token)
    }

    /// Load the token, trying keychain, env var, then file.
    #[must_use]
    pub fn load(&self) -> Option<String> {
        if let Ok(entry) = keyring::Entry::new(&self.service, KEYRING_USER)
            && let Ok(token) = entry.get_password()
            && !token.is_empty()
        {
            return Some(token);
        }

        if let Ok(token) = std::env::var(TOKEN_ENV_VAR)
            && !token.is_empty()
        {
            return Some(token);
        }

        load_trimmed(&self.credentials_path())
    }

    /// Remove the token from keychain and file.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::TokenStore` if the credentials file exists and
    /// cannot be removed.
    pub fn delete(&self) -> Result<(), AuthError> {
        // Keyring deletion is best-effort; the entry may not exist.
        if let Ok(entry) = keyring::Entry::new(&self.service, KEYRING_USER) {
            let _ = entry.delete_credential();
        }

        let path = self.credentials_path();
        if path.exists() {
            fs::remove_file(&path).map_err(|e| {
                AuthError::TokenStore(format!("failed to delete {}: {e}", path.display()))
            })?;
        }

        Ok(())
    }

    /// Which tier the current token would come from (for status display).
    #[must_use]
    pub fn detect_source(&self) -> Option<&'static str> {
        if let Ok(entry) = keyring::Entry::new(&self.service, KEYRING_USER)
            && entry.get_password().is_ok_and(|t| !t.is_empty())
        {
            return Some("keyring");
        }
        if std::env::var(TOKEN_ENV_VAR).is_ok_and(|t| !t.is_empty()) {
            return Some("env");
        }
        if load_trimmed(&self.credentials_path()).is_some() {
            return Some("file");
        }
        None
    }

    /// Directory holding the credentials file and the profile cache.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    fn credentials_path(&self) -> PathBuf {
        self.root.join(CREDENTIALS_FILE_NAME)
    }

    fn store_file(&self, token: &str) -> Result<(), AuthError> {
        let path = self.credentials_path();
        write_private(&path, token).map_err(AuthError::TokenStore)
    }
}

/// Write `contents` to `path`, creating the parent directory with restrictive
/// permissions (0700 dir / 0600 file on unix).
pub(crate) fn write_private(path: &Path, contents: &str) -> Result<(), String> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| format!("mkdir {}: {e}", parent.display()))?;
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            if let Err(e) = fs::set_permissions(parent, fs::Permissions::from_mode(0o700)) {
                tracing::warn!("failed to chmod 0700 {}: {e}", parent.display());
            }
        }
    }
    fs::write(path, contents).map_err(|e| format!("write {}: {e}", path.display()))?;

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        fs::set_permissions(path, fs::Permissions::from_mode(0o600))
            .map_err(|e| format!("chmod {}: {e}", path.display()))?;
    }

    Ok(())
}

fn load_trimmed(path: &Path) -> Option<String> {
    fs::read_to_string(path)
        .ok()
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scratch_store(dir: &tempfile::TempDir) -> TokenStore {
        // A service name no keychain entry exists for, so the file tier is
        // exercised deterministically.
        TokenStore::at(dir.path(), "sojourn-cli-test")
    }

    #[test]
    fn store_then_load_round_trips_on_every_platform() {
        // Uses store(), not store_file(): whichever tier accepted the write
        // must be the one load() reads, or the fallback must have run.
        let tmp = tempfile::TempDir::new().expect("tmp dir");
        let store = TokenStore::at(tmp.path(), "sojourn-cli-roundtrip-test");

        store.store("tok_roundtrip").expect("store");
        assert_eq!(store.load().as_deref(), Some("tok_roundtrip"));

        store.delete().expect("delete");
        assert!(store.load().is_none());
    }

    #[test]
    fn file_store_load_delete_cycle() {
        let tmp = tempfile::TempDir::new().expect("tmp dir");
        let store = scratch_store(&tmp);

        store.store_file("tok_abc123").expect("store");
        assert_eq!(store.load().as_deref(), Some("tok_abc123"));
        assert_eq!(store.detect_source(), Some("file"));

        store.delete().expect("delete");
        assert!(store.load().is_none());
        assert!(store.detect_source().is_none());
    }

    #[test]
    fn load_trims_trailing_newline() {
        let tmp = tempfile::TempDir::new().expect("tmp dir");
        let store = scratch_store(&tmp);

        store.store_file("tok_xyz\n").expect("store");
        assert_eq!(store.load().as_deref(), Some("tok_xyz"));
    }

    #[test]
    fn load_ignores_whitespace_only_file() {
        let tmp = tempfile::TempDir::new().expect("tmp dir");
        let store = scratch_store(&tmp);

        store.store_file("   \n  ").expect("store");
        assert!(store.load().is_none());
    }

    #[test]
    fn delete_is_idempotent() {
        let tmp = tempfile::TempDir::new().expect("tmp dir");
        let store = scratch_store(&tmp);

        store.delete().expect("first delete");
        store.delete().expect("second delete");
    }

    #[cfg(unix)]
    #[test]
    fn credentials_file_is_0600() {
        use std::os::unix::fs::PermissionsExt;

        let tmp = tempfile::TempDir::new().expect("tmp dir");
        let store = scratch_store(&tmp);
        store.store_file("tok").expect("store");

        let mode = fs::metadata(store.credentials_path())
            .expect("metadata")
            .permissions()
            .mode()
            & 0o777;
        assert_eq!(mode, 0o600);
    }
}

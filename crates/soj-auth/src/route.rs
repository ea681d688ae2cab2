//! Role-based navigation routing.
//!
//! Maps a resolved [`AuthState`] to one of three navigation roots and owns
//! the startup "replace at most once" contract: however many times the
//! resolver fires during bootstrap, only the first result performs the
//! startup replace. Event-driven reroutes after startup always apply.

use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};

use soj_core::AuthState;
use tokio::sync::watch;

/// Top-level navigation root.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavRoot {
    /// Admin stack. Selected for `admin` and `superadmin` alike.
    Admin,
    /// Standard signed-in stack.
    Member,
    /// Unauthenticated stack (sign-in screen).
    SignedOut,
}

impl NavRoot {
    /// Routing decision for a resolved state.
    ///
    /// `admin` and `superadmin` are indistinguishable here; absence of a role
    /// routes to `SignedOut`.
    #[must_use]
    pub const fn for_state(state: &AuthState) -> Self {
        match state.role() {
            Some(role) if role.is_admin_level() => Self::Admin,
            Some(_) => Self::Member,
            None => Self::SignedOut,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::Member => "member",
            Self::SignedOut => "signed-out",
        }
    }
}

impl fmt::Display for NavRoot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A consumed boolean token: the first `take()` wins, every later call loses.
#[derive(Debug, Default)]
pub struct ReplaceOnce {
    used: AtomicBool,
}

impl ReplaceOnce {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            used: AtomicBool::new(false),
        }
    }

    /// Consume the token. Returns `true` exactly once.
    pub fn take(&self) -> bool {
        !self.used.swap(true, Ordering::SeqCst)
    }
}

/// Owns the mounted navigation root.
///
/// Publishes changes over a watch channel so interested screens observe the
/// latest root without polling.
#[derive(Debug)]
pub struct NavController {
    root: watch::Sender<NavRoot>,
    startup: ReplaceOnce,
}

impl NavController {
    /// Controller mounted on the unauthenticated root.
    #[must_use]
    pub fn new() -> Self {
        let (root, _) = watch::channel(NavRoot::SignedOut);
        Self {
            root,
            startup: ReplaceOnce::new(),
        }
    }

    /// Observe root changes.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<NavRoot> {
        self.root.subscribe()
    }

    /// The currently mounted root.
    #[must_use]
    pub fn current(&self) -> NavRoot {
        *self.root.borrow()
    }

    /// Perform the one-time startup navigation replace.
    ///
    /// Returns `Some(root)` if this call performed the replace, `None` if an
    /// earlier call already consumed the latch (the root is left untouched).
    pub fn replace_startup(&self, state: &AuthState) -> Option<NavRoot> {
        if !self.startup.take() {
            tracing::debug!("startup replace already performed; ignoring duplicate");
            return None;
        }
        let root = NavRoot::for_state(state);
        self.root.send_replace(root);
        Some(root)
    }

    /// Event-driven reroute (sign-in/sign-out after startup). Always applies.
    pub fn reroute(&self, state: &AuthState) -> NavRoot {
        let root = NavRoot::for_state(state);
        let previous = self.root.send_replace(root);
        if previous != root {
            tracing::info!(from = %previous, to = %root, "navigation root changed");
        }
        root
    }
}

impl Default for NavController {
    fn default() -> Self {
        Self::new()
    }
}

//! Reactive session supervision.
//!
//! The supervisor owns the resolver and the navigation controller, and is
//! the single writer of the published [`AuthState`]. Sign-in/sign-out events
//! arriving after (or during) startup re-run resolution and reroute.
//!
//! Ordering: resolutions may complete out of order (an event can land while
//! the startup resolve is still in flight). Each resolution attempt takes a
//! generation number when it starts; a completed resolution publishes only if
//! no younger attempt has already published. The state therefore always
//! reflects the most recently initiated resolution, never whichever request
//! happened to finish last.

use std::sync::Mutex;
use std::sync::atomic::{AtomicU64, Ordering};

use soj_core::AuthState;
use tokio::sync::watch;

use crate::route::{NavController, NavRoot};
use crate::session::SessionResolver;

/// Asynchronous notification from the auth provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthEvent {
    SignedIn,
    SignedOut,
}

/// Owns session state from bootstrap onward.
#[derive(Debug)]
pub struct SessionSupervisor {
    resolver: SessionResolver,
    nav: NavController,
    state: watch::Sender<AuthState>,
    next_generation: AtomicU64,
    published: Mutex<u64>,
}

impl SessionSupervisor {
    #[must_use]
    pub fn new(resolver: SessionResolver) -> Self {
        let (state, _) = watch::channel(AuthState::Unauthenticated);
        Self {
            resolver,
            nav: NavController::new(),
            state,
            next_generation: AtomicU64::new(0),
            published: Mutex::new(0),
        }
    }

    /// Initial resolve-and-route at application start.
    ///
    /// Runs the session resolver once and performs the one-shot startup
    /// navigation replace. Safe to race with [`SessionSupervisor::on_event`]:
    /// the generation guard keeps a stale bootstrap result from overwriting a
    /// younger event-driven one, and the nav latch keeps the startup replace
    /// single-shot.
    pub async fn bootstrap(&self) -> NavRoot {
        let generation = self.begin();
        let resolved = self.resolver.resolve().await;
        self.publish(generation, resolved);

        let state = self.current_state();
        self.nav.replace_startup(&state);
        self.nav.current()
    }

    /// React to a sign-in or sign-out notification.
    pub async fn on_event(&self, event: AuthEvent) -> NavRoot {
        match event {
            AuthEvent::SignedIn => {
                let generation = self.begin();
                let resolved = self.resolver.resolve().await;
                if self.publish(generation, resolved) {
                    self.nav.reroute(&self.current_state());
                }
            }
            AuthEvent::SignedOut => {
                let generation = self.begin();
                self.resolver.clear_credentials();
                if self.publish(generation, AuthState::Unauthenticated) {
                    self.nav.reroute(&AuthState::Unauthenticated);
                }
            }
        }
        self.nav.current()
    }

    /// The navigation controller routed by this supervisor.
    #[must_use]
    pub const fn nav(&self) -> &NavController {
        &self.nav
    }

    /// Observe published state changes.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<AuthState> {
        self.state.subscribe()
    }

    /// Snapshot of the currently published state.
    #[must_use]
    pub fn current_state(&self) -> AuthState {
        self.state.borrow().clone()
    }

    /// Start a resolution attempt: hand out the next generation number.
    fn begin(&self) -> u64 {
        self.next_generation.fetch_add(1, Ordering::SeqCst) + 1
    }

    /// Publish a resolution result unless a younger attempt already did.
    ///
    /// Returns whether the state was accepted.
    fn publish(&self, generation: u64, state: AuthState) -> bool {
        let mut published = self
            .published
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        if generation <= *published {
            tracing::debug!(
                generation,
                latest = *published,
                "stale session resolution discarded"
            );
            return false;
        }
        *published = generation;
        self.state.send_replace(state);
        true
    }
}

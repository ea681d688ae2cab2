//! # soj-auth
//!
//! Session and account management for the Sojourn client.
//!
//! Provides the startup session resolver (persisted token + remote role
//! lookup), role-based navigation routing with a one-shot startup replace,
//! a reactive supervisor for sign-in/sign-out events, OS keychain token
//! storage with env/file fallback, and account operations (login, logout,
//! password change, profile edit).

pub mod account;
pub mod error;
pub mod events;
pub mod profile_cache;
pub mod route;
pub mod session;
pub mod token_store;

pub use account::{AccountClient, ProfileUpdate};
pub use error::AuthError;
pub use events::{AuthEvent, SessionSupervisor};
pub use route::{NavController, NavRoot};
pub use session::SessionResolver;
pub use token_store::TokenStore;

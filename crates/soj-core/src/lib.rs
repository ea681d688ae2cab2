//! # soj-core
//!
//! Core types shared across all Sojourn crates:
//! - `Role` and `AuthState` for the session state machine
//! - `UserIdentity` for cross-crate passing of the resolved user
//! - Listing entity structs mirroring the backend's JSON
//! - The resource catalog (`ResourceKind` → REST path)
//! - Cross-cutting error types
//! - CLI response types

pub mod entities;
pub mod errors;
pub mod identity;
pub mod resources;
pub mod responses;
pub mod role;

pub use errors::CoreError;
pub use identity::UserIdentity;
pub use resources::ResourceKind;
pub use role::{AuthState, Role};

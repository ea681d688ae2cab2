use clap::{Args, Subcommand};
use soj_core::ResourceKind;

use super::subcommands::{AuthCommands, ProfileCommands, PushCommands, ResourceCommands};

/// All top-level `soj` commands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Sign in, sign out, session status, password change.
    Auth {
        #[command(subcommand)]
        action: AuthCommands,
    },
    /// Show or edit the signed-in user's profile.
    Profile {
        #[command(subcommand)]
        action: ProfileCommands,
    },
    /// Register or unregister a device push token.
    Push {
        #[command(subcommand)]
        action: PushCommands,
    },
    /// CRUD against a listing collection (condos, hotels, courses,
    /// restaurants, docs, general, travel-posts).
    Resource(ResourceArgs),
}

#[derive(Debug, Args)]
pub struct ResourceArgs {
    /// Collection name (e.g., condos, travel-posts).
    pub kind: ResourceKind,

    #[command(subcommand)]
    pub action: ResourceCommands,
}

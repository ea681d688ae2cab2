use clap::{Args, Subcommand};

/// Profile commands.
#[derive(Clone, Debug, Subcommand)]
pub enum ProfileCommands {
    /// Fetch the profile from the backend.
    Show,
    /// Update profile fields; unset flags are left unchanged.
    Edit(ProfileEditArgs),
}

#[derive(Clone, Debug, Args)]
pub struct ProfileEditArgs {
    /// New display name.
    #[arg(long)]
    pub name: Option<String>,
    /// New email address.
    #[arg(long)]
    pub email: Option<String>,
    /// New avatar image URL.
    #[arg(long)]
    pub avatar_url: Option<String>,
}

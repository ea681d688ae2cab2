use clap::{Args, Subcommand};

/// Authentication commands.
#[derive(Clone, Debug, Subcommand)]
pub enum AuthCommands {
    /// Sign in with email and password.
    Login(AuthLoginArgs),
    /// Sign out and clear stored credentials.
    Logout,
    /// Show current auth status and the navigation root it maps to.
    Status,
    /// Change the account password.
    Password(AuthPasswordArgs),
}

#[derive(Clone, Debug, Args)]
pub struct AuthLoginArgs {
    /// Account email.
    #[arg(long)]
    pub email: String,
    /// Account password.
    #[arg(long)]
    pub password: String,
}

#[derive(Clone, Debug, Args)]
pub struct AuthPasswordArgs {
    /// Current password.
    #[arg(long)]
    pub current: String,
    /// New password.
    #[arg(long)]
    pub new: String,
}

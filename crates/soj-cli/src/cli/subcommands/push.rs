use clap::{Args, Subcommand};

/// Push-registration commands.
#[derive(Clone, Debug, Subcommand)]
pub enum PushCommands {
    /// Register a device push token with the backend.
    Register(PushRegisterArgs),
    /// Unregister a device push token.
    Unregister(PushUnregisterArgs),
}

#[derive(Clone, Debug, Args)]
pub struct PushRegisterArgs {
    /// Provider push token.
    #[arg(long)]
    pub token: String,
    /// Platform identifier; defaults to `push.platform` from config.
    #[arg(long)]
    pub platform: Option<String>,
    /// Device identifier; defaults to `push.device_id` from config.
    #[arg(long)]
    pub device_id: Option<String>,
}

#[derive(Clone, Debug, Args)]
pub struct PushUnregisterArgs {
    /// Provider push token.
    #[arg(long)]
    pub token: String,
    /// Device identifier; defaults to `push.device_id` from config.
    #[arg(long)]
    pub device_id: Option<String>,
}

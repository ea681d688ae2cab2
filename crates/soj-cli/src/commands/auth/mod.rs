mod login;
mod logout;
mod password;
mod status;

use std::time::Duration;

use anyhow::Context;
use soj_auth::{AccountClient, TokenStore};
use soj_config::SojConfig;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::AuthCommands;

/// Handle `soj auth <subcommand>`.
///
/// Auth commands run before the application context is built: login must
/// work while signed out, and status has to report a broken session rather
/// than fail on one.
pub async fn handle(
    action: &AuthCommands,
    flags: &GlobalFlags,
    config: &SojConfig,
) -> anyhow::Result<()> {
    match action {
        AuthCommands::Login(args) => login::handle(args, flags, config).await,
        AuthCommands::Logout => logout::handle(flags, config).await,
        AuthCommands::Status => status::handle(flags, config).await,
        AuthCommands::Password(args) => password::handle(args, flags, config).await,
    }
}

fn require_base_url(config: &SojConfig) -> anyhow::Result<&str> {
    if !config.api.is_configured() {
        anyhow::bail!(
            "backend not configured — set SOJOURN_API__BASE_URL or api.base_url in config"
        );
    }
    Ok(config.api.base())
}

fn account_client(config: &SojConfig) -> anyhow::Result<AccountClient> {
    let base = require_base_url(config)?;
    let store = TokenStore::open().context("failed to open token store")?;
    AccountClient::new(base, Duration::from_secs(config.api.timeout_secs), store)
        .context("failed to build account client")
}

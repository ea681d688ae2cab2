use soj_config::SojConfig;
use soj_core::responses::LogoutResponse;

use crate::cli::GlobalFlags;
use crate::output::output;

pub async fn handle(flags: &GlobalFlags, config: &SojConfig) -> anyhow::Result<()> {
    let account = super::account_client(config)?;
    account.logout().await?;

    output(&LogoutResponse { cleared: true }, flags.format)
}

use serde::Serialize;
use soj_config::SojConfig;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::AuthPasswordArgs;
use crate::output::output;

#[derive(Serialize)]
struct PasswordChangeResponse {
    changed: bool,
}

pub async fn handle(
    args: &AuthPasswordArgs,
    flags: &GlobalFlags,
    config: &SojConfig,
) -> anyhow::Result<()> {
    let account = super::account_client(config)?;
    account.change_password(&args.current, &args.new).await?;

    output(&PasswordChangeResponse { changed: true }, flags.format)
}

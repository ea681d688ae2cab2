use soj_config::SojConfig;
use soj_core::responses::LoginResponse;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::AuthLoginArgs;
use crate::output::output;

pub async fn handle(
    args: &AuthLoginArgs,
    flags: &GlobalFlags,
    config: &SojConfig,
) -> anyhow::Result<()> {
    let account = super::account_client(config)?;
    let identity = account.login(&args.email, &args.password).await?;

    output(
        &LoginResponse {
            authenticated: true,
            user_id: identity.user_id,
            role: identity.role,
            email: identity.email,
        },
        flags.format,
    )
}

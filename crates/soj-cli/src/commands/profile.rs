use anyhow::bail;
use soj_auth::ProfileUpdate;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::{ProfileCommands, ProfileEditArgs};
use crate::context::AppContext;
use crate::output::output;

/// Handle `soj profile <subcommand>`.
pub async fn handle(
    action: &ProfileCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        ProfileCommands::Show => show(ctx, flags).await,
        ProfileCommands::Edit(args) => edit(args, ctx, flags).await,
    }
}

async fn show(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let profile = ctx.account.get_profile().await?;
    output(&profile, flags.format)
}

async fn edit(args: &ProfileEditArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    if args.name.is_none() && args.email.is_none() && args.avatar_url.is_none() {
        bail!("nothing to update — pass at least one of --name, --email, --avatar-url");
    }

    let update = ProfileUpdate {
        email: args.email.clone(),
        name: args.name.clone(),
        avatar_url: args.avatar_url.clone(),
    };
    let profile = ctx.account.update_profile(&update).await?;
    output(&profile, flags.format)
}

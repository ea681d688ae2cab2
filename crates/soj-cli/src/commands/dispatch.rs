use crate::cli::GlobalFlags;
use crate::cli::root_commands::Commands;
use crate::commands;
use crate::context::AppContext;

/// Dispatch a parsed command to the corresponding handler module.
pub async fn dispatch(
    command: Commands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match command {
        Commands::Profile { action } => commands::profile::handle(&action, ctx, flags).await,
        Commands::Push { action } => commands::push::handle(&action, ctx, flags).await,
        Commands::Resource(args) => commands::resource::handle(args, ctx, flags).await,
        Commands::Auth { .. } => {
            unreachable!("auth is pre-dispatched in main")
        }
    }
}

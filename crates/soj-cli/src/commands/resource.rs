use anyhow::{Context, bail};
use soj_auth::NavRoot;
use soj_client::ListQuery;
use soj_core::responses::DeleteResponse;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::ResourceArgs;
use crate::cli::subcommands::ResourceCommands;
use crate::context::AppContext;
use crate::output::output;

/// Handle `soj resource <kind> <action>`.
///
/// Reads are open to everyone; mutations are gated on the admin navigation
/// root, mirroring what the backend enforces server-side.
pub async fn handle(
    args: ResourceArgs,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let client = ctx.api.kind(args.kind);

    match args.action {
        ResourceCommands::List(list) => {
            let query = ListQuery {
                limit: Some(flags.limit.unwrap_or(ctx.config.general.default_limit)),
                offset: list.offset,
                search: list.search,
            };
            let items = client.list(&query).await?;
            output(&items, flags.format)
        }
        ResourceCommands::Get { id } => {
            let item = client.get(&id).await?;
            output(&item, flags.format)
        }
        ResourceCommands::Create { data } => {
            ensure_admin(ctx.root)?;
            let body = parse_body(&data)?;
            let item = client.create(&body).await?;
            output(&item, flags.format)
        }
        ResourceCommands::Update { id, data } => {
            ensure_admin(ctx.root)?;
            let body = parse_body(&data)?;
            let item = client.update(&id, &body).await?;
            output(&item, flags.format)
        }
        ResourceCommands::Patch { id, data } => {
            ensure_admin(ctx.root)?;
            let body = parse_body(&data)?;
            let item = client.patch(&id, &body).await?;
            output(&item, flags.format)
        }
        ResourceCommands::Delete { id } => {
            ensure_admin(ctx.root)?;
            client.delete(&id).await?;
            output(&DeleteResponse { deleted: true, id }, flags.format)
        }
    }
}

fn ensure_admin(root: NavRoot) -> anyhow::Result<()> {
    match root {
        NavRoot::Admin => Ok(()),
        NavRoot::Member => bail!("this action requires an admin account"),
        NavRoot::SignedOut => bail!("not signed in — run `soj auth login` first"),
    }
}

fn parse_body(data: &str) -> anyhow::Result<serde_json::Value> {
    let value: serde_json::Value =
        serde_json::from_str(data).context("--data must be valid JSON")?;
    if !value.is_object() {
        bail!("--data must be a JSON object");
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use soj_auth::NavRoot;

    use super::{ensure_admin, parse_body};

    #[test]
    fn admin_root_passes_the_gate() {
        assert!(ensure_admin(NavRoot::Admin).is_ok());
    }

    #[test]
    fn member_and_signed_out_are_rejected() {
        assert!(ensure_admin(NavRoot::Member).is_err());
        assert!(ensure_admin(NavRoot::SignedOut).is_err());
    }

    #[test]
    fn body_must_be_a_json_object() {
        assert!(parse_body(r#"{"title": "Pho place"}"#).is_ok());
        assert!(parse_body(r#"["not", "an", "object"]"#).is_err());
        assert!(parse_body("not json").is_err());
    }
}

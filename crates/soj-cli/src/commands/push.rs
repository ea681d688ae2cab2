use anyhow::bail;
use soj_core::responses::PushResponse;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::{PushCommands, PushRegisterArgs, PushUnregisterArgs};
use crate::context::AppContext;
use crate::output::output;

/// Handle `soj push <subcommand>`.
pub async fn handle(
    action: &PushCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        PushCommands::Register(args) => register(args, ctx, flags).await,
        PushCommands::Unregister(args) => unregister(args, ctx, flags).await,
    }
}

async fn register(
    args: &PushRegisterArgs,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let platform = resolve(args.platform.as_deref(), &ctx.config.push.platform, "--platform")?;
    let device_id = resolve(args.device_id.as_deref(), &ctx.config.push.device_id, "--device-id")?;

    ctx.api.register_push(&args.token, platform, device_id).await?;

    output(
        &PushResponse {
            registered: true,
            device_id: device_id.to_string(),
        },
        flags.format,
    )
}

async fn unregister(
    args: &PushUnregisterArgs,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let device_id = resolve(args.device_id.as_deref(), &ctx.config.push.device_id, "--device-id")?;

    ctx.api.unregister_push(&args.token, device_id).await?;

    output(
        &PushResponse {
            registered: false,
            device_id: device_id.to_string(),
        },
        flags.format,
    )
}

/// Flag value wins; config fills the gap; neither is an error.
fn resolve<'a>(flag: Option<&'a str>, configured: &'a str, name: &str) -> anyhow::Result<&'a str> {
    if let Some(value) = flag {
        return Ok(value);
    }
    if !configured.is_empty() {
        return Ok(configured);
    }
    bail!("{name} not given and no value configured under [push] in config")
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::resolve;

    #[test]
    fn flag_takes_precedence_over_config() {
        let value = resolve(Some("ios"), "android", "--platform").expect("resolve");
        assert_eq!(value, "ios");
    }

    #[test]
    fn config_fills_missing_flag() {
        let value = resolve(None, "android", "--platform").expect("resolve");
        assert_eq!(value, "android");
    }

    #[test]
    fn errors_when_neither_is_set() {
        assert!(resolve(None, "", "--device-id").is_err());
    }
}

use std::time::Duration;

use anyhow::Context;
use soj_auth::{SessionResolver, SessionSupervisor, TokenStore};
use soj_config::SojConfig;
use soj_core::AuthState;
use soj_core::responses::StatusResponse;

use crate::cli::GlobalFlags;
use crate::output::output;

pub async fn handle(flags: &GlobalFlags, config: &SojConfig) -> anyhow::Result<()> {
    let base = super::require_base_url(config)?;
    let store = TokenStore::open().context("failed to open token store")?;

    // Captured before resolving: a rejected token is cleared by the resolver,
    // and the report should still say where it came from.
    let token_source = store.detect_source();
    let had_token = token_source.is_some();

    let resolver = SessionResolver::new(
        base,
        Duration::from_secs(config.api.timeout_secs),
        store,
    )
    .context("failed to build session resolver")?;
    let supervisor = SessionSupervisor::new(resolver);

    let root = supervisor.bootstrap().await;
    let state = supervisor.current_state();

    let response = match &state {
        AuthState::Authenticated(identity) => StatusResponse {
            authenticated: true,
            user_id: Some(identity.user_id.clone()),
            role: Some(identity.role),
            nav_root: root.as_str().to_string(),
            token_source: token_source.map(str::to_string),
            note: None,
        },
        AuthState::Unauthenticated => StatusResponse {
            authenticated: false,
            user_id: None,
            role: None,
            nav_root: root.as_str().to_string(),
            token_source: None,
            note: Some(if had_token {
                "stored token was rejected; credentials cleared".into()
            } else {
                "no stored token".into()
            }),
        },
    };

    output(&response, flags.format)
}

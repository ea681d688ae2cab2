use std::time::Duration;

use anyhow::Context;
use soj_auth::{AccountClient, NavRoot, SessionResolver, SessionSupervisor, TokenStore};
use soj_client::ApiClient;
use soj_config::SojConfig;

/// Shared application resources initialized once at startup.
///
/// Initialization is the app's bootstrap sequence: resolve the session,
/// perform the one-shot startup navigation replace, and build the API client
/// with the resolved token attached.
pub struct AppContext {
    pub config: SojConfig,
    pub root: NavRoot,
    pub api: ApiClient,
    pub account: AccountClient,
}

impl AppContext {
    /// Initialize all shared resources.
    ///
    /// # Errors
    ///
    /// Fails if the API base URL is unconfigured or a client cannot be
    /// built. A broken *session* is not an error — the resolver collapses it
    /// to `Unauthenticated` and the context comes up signed out.
    pub async fn init(config: SojConfig) -> anyhow::Result<Self> {
        if !config.api.is_configured() {
            anyhow::bail!(
                "backend not configured — set SOJOURN_API__BASE_URL or api.base_url in config"
            );
        }

        let timeout = Duration::from_secs(config.api.timeout_secs);
        let base = config.api.base().to_string();

        let store = TokenStore::open().context("failed to open token store")?;
        let resolver = SessionResolver::new(&base, timeout, store.clone())
            .context("failed to build session resolver")?;
        let supervisor = SessionSupervisor::new(resolver);

        let root = supervisor.bootstrap().await;
        let state = supervisor.current_state();
        tracing::debug!(root = %root, authenticated = state.is_authenticated(), "session bootstrapped");

        let mut api =
            ApiClient::new(&base, timeout).context("failed to build API client")?;
        if state.is_authenticated()
            && let Some(token) = store.load()
        {
            api = api.with_token(token);
        }

        let account = AccountClient::new(&base, timeout, store)
            .context("failed to build account client")?;

        Ok(Self {
            config,
            root,
            api,
            account,
        })
    }
}

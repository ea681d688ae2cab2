//! # soj-config
//!
//! Layered configuration loading for Sojourn using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`SOJOURN_*` prefix, `__` as separator)
//! 2. Project-level `.sojourn/config.toml`
//! 3. User-level `~/.config/sojourn/config.toml`
//! 4. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `SOJOURN_API__BASE_URL` -> `api.base_url`,
//! `SOJOURN_PUSH__DEVICE_ID` -> `push.device_id`, etc. The `__` (double
//! underscore) separates nested config sections.

mod api;
mod error;
mod general;
mod push;

pub use api::ApiConfig;
pub use error::ConfigError;
pub use general::GeneralConfig;
pub use push::PushConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct SojConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub push: PushConfig,
    #[serde(default)]
    pub general: GeneralConfig,
}

impl SojConfig {
    /// Load configuration from all sources (TOML files + environment variables).
    ///
    /// Does NOT call `dotenvy` — use [`SojConfig::load_with_dotenv`] if you
    /// need `.env` file loading.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Figment` if extraction fails.
    pub fn load() -> Result<Self, ConfigError> {
        Self::figment().extract().map_err(ConfigError::from)
    }

    /// Load configuration with `.env` file support.
    ///
    /// Loads `.env` from the current directory (or the nearest ancestor
    /// dotenvy finds) before building the figment. Typical entry point for
    /// the CLI and tests.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Figment` if extraction fails.
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::load()
    }

    /// Build the figment provider chain.
    ///
    /// Public so tests can inspect the figment directly or add providers on
    /// top.
    #[must_use]
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        // Layer 1: User-global config
        if let Some(global_path) = Self::global_config_path()
            && global_path.exists()
        {
            figment = figment.merge(Toml::file(global_path));
        }

        // Layer 2: Project-local config
        let local_path = PathBuf::from(".sojourn/config.toml");
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        // Layer 3: Environment variables (highest priority)
        figment.merge(Env::prefixed("SOJOURN_").split("__"))
    }

    /// Path to the user-global config file.
    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("sojourn").join("config.toml"))
    }
}

#[cfg(test)]
mod tests {
    use figment::Jail;
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn default_config_loads() {
        let config = SojConfig::default();
        assert!(!config.api.is_configured());
        assert_eq!(config.api.timeout_secs, 15);
        assert_eq!(config.general.default_limit, 20);
    }

    #[test]
    fn env_overrides_toml() {
        Jail::expect_with(|jail| {
            jail.create_dir(".sojourn")?;
            jail.create_file(
                ".sojourn/config.toml",
                r#"
                    [api]
                    base_url = "https://toml.example/api"

                    [push]
                    platform = "android"
                "#,
            )?;
            jail.set_env("SOJOURN_API__BASE_URL", "https://env.example/api");

            let config: SojConfig = SojConfig::figment().extract()?;
            assert_eq!(config.api.base_url, "https://env.example/api");
            assert_eq!(config.push.platform, "android");
            Ok(())
        });
    }

    #[test]
    fn nested_env_mapping_reaches_push_section() {
        Jail::expect_with(|jail| {
            jail.set_env("SOJOURN_PUSH__DEVICE_ID", "dev-42");
            let config: SojConfig = SojConfig::figment().extract()?;
            assert_eq!(config.push.device_id, "dev-42");
            Ok(())
        });
    }
}

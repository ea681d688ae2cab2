use anyhow::Context;

/// Load configuration, with `.env` support for local development.
pub fn load_config() -> anyhow::Result<soj_config::SojConfig> {
    dotenvy::dotenv().ok();
    soj_config::SojConfig::load().context("failed to load configuration")
}

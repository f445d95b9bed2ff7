//! Portal command handler (the default mode).

use anyhow::Result;

#[cfg(feature = "tui")]
pub fn run() -> Result<()> {
    use anyhow::Context;
    use beacon_core::config::Config;

    let config = Config::load().context("load config")?;
    tracing::info!(theme = config.theme.display_name(), "starting portal");
    beacon_tui::run_portal(&config)
}

#[cfg(not(feature = "tui"))]
pub fn run() -> Result<()> {
    anyhow::bail!("this build does not include the portal UI; use `beacon events`")
}

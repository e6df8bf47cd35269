//! Configuration display command.

use console::style;

use crate::config::{Config, Settings};
use crate::logging::redact;

use super::super::icons::{dim_arrow, success, warn};

/// Print where configuration came from and the resolved settings.
pub fn cmd_config_show(settings: &Settings, config: &Config) -> anyhow::Result<()> {
    match config.source_path {
        Some(ref path) => println!("{} Config file: {}", success(), path.display()),
        None => println!("{} No config file found, using defaults", warn()),
    }

    if !settings.content_path.exists() {
        println!(
            "  {} Content file missing: {}",
            dim_arrow(),
            settings.content_path.display()
        );
    }

    let value = serde_json::to_value(settings)?;
    tracing::debug!("Resolved settings: {}", redact(&value));
    println!("\n{}", style("Settings").bold());
    println!("{}", serde_json::to_string_pretty(&redact(&value))?);
    Ok(())
}

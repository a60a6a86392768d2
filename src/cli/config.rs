//! Config command - write or inspect the rules file

use anyhow::{Context, Result};
use console::style;
use message_credits::config::{LoadedConfig, CONFIG_FILE_NAME, EXAMPLE_CONFIG};
use std::path::Path;

/// Write an example credits.toml into `dir`
pub fn init(dir: &Path, force: bool) -> Result<()> {
    let path = dir.join(CONFIG_FILE_NAME);

    if path.exists() && !force {
        anyhow::bail!(
            "{} already exists (use --force to overwrite)",
            path.display()
        );
    }

    std::fs::write(&path, EXAMPLE_CONFIG)
        .with_context(|| format!("Failed to write {}", path.display()))?;

    println!(
        "{} Created {}",
        style("✓").green(),
        style(path.display()).cyan()
    );
    Ok(())
}

/// Print the effective rules as TOML
pub fn show(loaded: &LoadedConfig) -> Result<()> {
    let rendered = toml::to_string_pretty(&loaded.config).context("Failed to render config")?;

    println!("# Source: {}", loaded.source);
    println!("{}", rendered);
    Ok(())
}

//! Usage command - price a batch of messages

use anyhow::{Context, Result};
use console::style;
use message_credits::config::LoadedConfig;
use message_credits::reporters::{self, OutputFormat};
use message_credits::usage::{build_usage, load_messages};
use message_credits::CreditScorer;
use std::path::Path;
use std::str::FromStr;

/// Run the usage command
pub fn run(loaded: &LoadedConfig, input: &Path, format: &str, output: Option<&Path>) -> Result<()> {
    let format = OutputFormat::from_str(format)?;

    let messages = load_messages(input)
        .with_context(|| format!("Failed to load messages from {}", input.display()))?;

    let scorer = CreditScorer::new(&loaded.config.rules);
    let report = build_usage(&messages, &scorer);
    let rendered = reporters::render_usage(&report, format)?;

    match output {
        Some(path) => {
            std::fs::write(path, &rendered)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            eprintln!(
                "{} Wrote usage for {} messages to {}",
                style("✓").green(),
                report.usage.len(),
                style(path.display()).cyan()
            );
        }
        None => println!("{}", rendered),
    }

    Ok(())
}

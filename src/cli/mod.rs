//! CLI command definitions and handlers

mod config;
mod score;
mod usage;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use message_credits::config::{resolve_config, LoadedConfig};
use std::path::{Path, PathBuf};

/// Message Credits - deterministic message pricing
#[derive(Parser, Debug)]
#[command(name = "message-credits")]
#[command(
    version,
    about = "Price chat messages in credits using a fixed, exact-decimal rule set",
    after_help = "\
Examples:
  message-credits score \"Hello world\"               Price a message
  echo \"Hello world\" | message-credits score        Price stdin
  message-credits score \"Hello\" --format json       JSON breakdown
  message-credits score \"Hello\" --explain           Show every rule that fired
  message-credits usage messages.json               Price a batch of messages
  message-credits config init                       Write an example credits.toml"
)]
pub struct Cli {
    /// Rules file (default: ./credits.toml, then the user config dir)
    #[arg(long, global = true, env = "MESSAGE_CREDITS_CONFIG")]
    pub config: Option<PathBuf>,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long, global = true, default_value = "warn", value_parser = ["error", "warn", "info", "debug", "trace"])]
    pub log_level: String,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Price a single message (argument, --file, or stdin)
    #[command(after_help = "\
Examples:
  message-credits score \"A man a plan a canal Panama\"
  message-credits score --file message.txt --format json
  message-credits score --file message.txt --raw     Keep the trailing newline")]
    Score {
        /// Message text (reads --file or stdin when omitted)
        text: Option<String>,

        /// Read the message from a file
        #[arg(long, conflicts_with = "text")]
        file: Option<PathBuf>,

        /// Output format: text, json
        #[arg(long, short = 'f', default_value = "text", value_parser = ["text", "json"])]
        format: String,

        /// Explain the pricing with a full rule-by-rule breakdown
        #[arg(long)]
        explain: bool,

        /// Price file/stdin input byte-for-byte (keep the final line ending)
        #[arg(long)]
        raw: bool,
    },

    /// Price a batch of messages from a JSON file
    #[command(after_help = "\
Input is either {\"messages\": [...]} or a bare array of
{\"id\": 1000, \"text\": \"...\", \"timestamp\": \"2024-04-29T02:08:29Z\"}.

Examples:
  message-credits usage messages.json
  message-credits usage messages.json --format json -o usage.json")]
    Usage {
        /// Messages JSON file
        input: PathBuf,

        /// Output format: text, json
        #[arg(long, short = 'f', default_value = "text", value_parser = ["text", "json"])]
        format: String,

        /// Output file path (default: stdout)
        #[arg(long, short = 'o')]
        output: Option<PathBuf>,
    },

    /// Manage the rules file (init or show)
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Write an example credits.toml to the current directory
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
    /// Show the effective rules and where they came from
    Show,
}

/// Run the CLI with parsed arguments
pub fn run(cli: Cli) -> Result<()> {
    let cwd = std::env::current_dir().context("Failed to determine current directory")?;

    match cli.command {
        Commands::Score {
            text,
            file,
            format,
            explain,
            raw,
        } => {
            let loaded = load_rules(cli.config.as_deref(), &cwd)?;
            score::run(&loaded, text, file.as_deref(), &format, explain, raw)
        }

        Commands::Usage {
            input,
            format,
            output,
        } => {
            let loaded = load_rules(cli.config.as_deref(), &cwd)?;
            usage::run(&loaded, &input, &format, output.as_deref())
        }

        Commands::Config { action } => match action {
            ConfigAction::Init { force } => config::init(&cwd, force),
            ConfigAction::Show => {
                let loaded = load_rules(cli.config.as_deref(), &cwd)?;
                config::show(&loaded)
            }
        },
    }
}

fn load_rules(explicit: Option<&Path>, cwd: &Path) -> Result<LoadedConfig> {
    resolve_config(explicit, cwd).context("Failed to load credit rules")
}

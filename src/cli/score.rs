//! Score command - price a single message

use anyhow::{Context, Result};
use message_credits::config::LoadedConfig;
use message_credits::reporters::{self, OutputFormat};
use message_credits::CreditScorer;
use std::io::Read;
use std::path::Path;
use std::str::FromStr;
use tracing::info;

/// Run the score command
pub fn run(
    loaded: &LoadedConfig,
    text: Option<String>,
    file: Option<&Path>,
    format: &str,
    explain: bool,
    raw: bool,
) -> Result<()> {
    let format = OutputFormat::from_str(format)?;
    let message = read_message(text, file, raw)?;

    let scorer = CreditScorer::new(&loaded.config.rules);

    if explain {
        println!("{}", scorer.explain(&message));
        return Ok(());
    }

    let breakdown = scorer.calculate(&message);
    info!(
        "Priced message ({} chars) at {} credits using {}",
        message.chars().count(),
        breakdown.credits_used,
        loaded.source
    );
    println!("{}", reporters::render_breakdown(&breakdown, format)?);
    Ok(())
}

/// Positional text wins, then --file, then stdin
fn read_message(text: Option<String>, file: Option<&Path>, raw: bool) -> Result<String> {
    if let Some(text) = text {
        return Ok(text);
    }

    let content = match file {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read message from {}", path.display()))?,
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read message from stdin")?;
            buf
        }
    };

    Ok(if raw {
        content
    } else {
        strip_line_ending(content)
    })
}

/// Drop one trailing `\n` or `\r\n`
fn strip_line_ending(mut content: String) -> String {
    if content.ends_with('\n') {
        content.pop();
        if content.ends_with('\r') {
            content.pop();
        }
    }
    content
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_line_ending() {
        assert_eq!(strip_line_ending("hello\n".into()), "hello");
        assert_eq!(strip_line_ending("hello\r\n".into()), "hello");
        assert_eq!(strip_line_ending("hello\n\n".into()), "hello\n");
        assert_eq!(strip_line_ending("hello".into()), "hello");
        assert_eq!(strip_line_ending(String::new()), "");
    }

    #[test]
    fn test_positional_text_is_verbatim() {
        let msg = read_message(Some("hi\n".into()), None, false).unwrap();
        assert_eq!(msg, "hi\n");
    }

    #[test]
    fn test_file_input_raw_and_trimmed() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("msg.txt");
        std::fs::write(&path, "hello\n").unwrap();
        assert_eq!(read_message(None, Some(&path), false).unwrap(), "hello");
        assert_eq!(read_message(None, Some(&path), true).unwrap(), "hello\n");
    }

    #[test]
    fn test_missing_file_has_context() {
        let dir = tempfile::tempdir().unwrap();
        let err = read_message(None, Some(&dir.path().join("nope.txt")), false).unwrap_err();
        assert!(err.to_string().contains("Failed to read message"));
    }
}

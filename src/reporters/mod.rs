//! Output reporters for Message Credits
//!
//! Supports two output formats:
//! - `text` - Terminal output with colors
//! - `json` - Machine-readable JSON (decimals as exact numbers)

mod json;
mod text;

use crate::models::{CostBreakdown, UsageReport};
use anyhow::{anyhow, Result};
use std::str::FromStr;

/// Supported output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl FromStr for OutputFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" | "txt" | "terminal" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(anyhow!("Unknown format '{}'. Valid formats: text, json", s)),
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

/// Render a cost breakdown
pub fn render_breakdown(breakdown: &CostBreakdown, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(text::render_breakdown(breakdown)),
        OutputFormat::Json => json::render(breakdown),
    }
}

/// Render a usage report
pub fn render_usage(report: &UsageReport, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(text::render_usage(report)),
        OutputFormat::Json => json::render(report),
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::models::{Message, UsageItem};
    use chrono::{TimeZone, Utc};
    use rust_decimal_macros::dec;

    /// Create a small UsageReport for testing
    pub(crate) fn test_usage_report() -> UsageReport {
        let message = Message {
            id: 1000,
            text: "Hello".into(),
            timestamp: Utc.with_ymd_and_hms(2024, 4, 29, 2, 8, 29).unwrap(),
        };
        UsageReport {
            usage: vec![
                UsageItem {
                    message_id: message.id,
                    timestamp: message.timestamp,
                    credits_used: dec!(1.00),
                },
                UsageItem {
                    message_id: 1001,
                    timestamp: Utc.with_ymd_and_hms(2024, 4, 29, 3, 0, 0).unwrap(),
                    credits_used: dec!(7.30),
                },
            ],
            total_credits: dec!(8.30),
        }
    }

    #[test]
    fn test_format_parsing() {
        assert_eq!(OutputFormat::from_str("text").unwrap(), OutputFormat::Text);
        assert_eq!(OutputFormat::from_str("JSON").unwrap(), OutputFormat::Json);
        assert!(OutputFormat::from_str("sarif").is_err());
    }

    #[test]
    fn test_format_display_roundtrip() {
        for fmt in [OutputFormat::Text, OutputFormat::Json] {
            assert_eq!(OutputFormat::from_str(&fmt.to_string()).unwrap(), fmt);
        }
    }
}

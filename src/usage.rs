//! Usage ledger
//!
//! Prices a batch of messages and totals the period. Messages are scored in
//! parallel; output keeps input order.

use crate::models::{to_cents, Message, UsageItem, UsageReport};
use crate::scoring::CreditScorer;
use rayon::prelude::*;
use rust_decimal::Decimal;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info};

/// Errors raised while reading message batches
#[derive(Error, Debug)]
pub enum UsageError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid messages JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid messages JSON: expected an array or an object with a \"messages\" array")]
    Shape,
}

/// Parse messages from JSON text.
///
/// Accepts either `{"messages": [...]}` or a bare array.
pub fn parse_messages(json: &str) -> Result<Vec<Message>, UsageError> {
    let value: serde_json::Value = serde_json::from_str(json)?;
    let list = match value {
        serde_json::Value::Object(mut map) => map.remove("messages").ok_or(UsageError::Shape)?,
        array @ serde_json::Value::Array(_) => array,
        _ => return Err(UsageError::Shape),
    };
    if !list.is_array() {
        return Err(UsageError::Shape);
    }
    Ok(serde_json::from_value(list)?)
}

/// Load messages from a JSON file
pub fn load_messages(path: &Path) -> Result<Vec<Message>, UsageError> {
    let content = std::fs::read_to_string(path).map_err(|source| UsageError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let messages = parse_messages(&content)?;
    debug!("Loaded {} messages from {}", messages.len(), path.display());
    Ok(messages)
}

/// Price every message and total the charges
pub fn build_usage(messages: &[Message], scorer: &CreditScorer<'_>) -> UsageReport {
    let usage: Vec<UsageItem> = messages
        .par_iter()
        .map(|message| UsageItem {
            message_id: message.id,
            timestamp: message.timestamp,
            credits_used: scorer.calculate(&message.text).credits_used,
        })
        .collect();

    let total = usage.iter().map(|item| item.credits_used).sum::<Decimal>();

    info!("Priced {} messages: {} credits", usage.len(), total);

    UsageReport {
        usage,
        total_credits: to_cents(total),
    }
}

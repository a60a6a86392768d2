//! JSON reporter
//!
//! Pretty-printed JSON. Decimals are emitted as numbers with their scale
//! intact (`1.00`, not `1.0` or `"1.00"`).

use anyhow::Result;
use serde::Serialize;

/// Render any report value as JSON
pub fn render<T: Serialize>(value: &T) -> Result<String> {
    Ok(serde_json::to_string_pretty(value)?)
}

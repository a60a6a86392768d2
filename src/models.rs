//! Core data models for Message Credits
//!
//! These are plain value objects: a scored breakdown, the messages fed to
//! the usage ledger, and the usage report it produces.

use chrono::{DateTime, Utc};
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

/// Number of fractional digits on every monetary output value.
pub const MONEY_SCALE: u32 = 2;

/// Round a monetary value to cents, half-up, and pin the scale to two digits.
///
/// Pinning the scale keeps `1` rendering as `1.00` in both `Display` and JSON.
pub fn to_cents(value: Decimal) -> Decimal {
    let mut rounded = value.round_dp_with_strategy(MONEY_SCALE, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(MONEY_SCALE);
    rounded
}

/// Palindrome multiplier applied to the floored subtotal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Multiplier {
    #[default]
    Single,
    Double,
}

impl Multiplier {
    pub fn factor(self) -> u8 {
        match self {
            Multiplier::Single => 1,
            Multiplier::Double => 2,
        }
    }
}

impl From<Multiplier> for Decimal {
    fn from(m: Multiplier) -> Self {
        Decimal::from(m.factor())
    }
}

impl std::fmt::Display for Multiplier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.factor())
    }
}

impl Serialize for Multiplier {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u8(self.factor())
    }
}

impl<'de> Deserialize<'de> for Multiplier {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        match u8::deserialize(deserializer)? {
            1 => Ok(Multiplier::Single),
            2 => Ok(Multiplier::Double),
            other => Err(serde::de::Error::custom(format!(
                "palindrome_multiplier must be 1 or 2, got {other}"
            ))),
        }
    }
}

/// Complete cost breakdown for one message
///
/// Monetary fields are rounded to cents; `base_cost` and
/// `palindrome_multiplier` are exact integers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CostBreakdown {
    /// Final charge after flooring and the palindrome multiplier
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    pub credits_used: Decimal,
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    pub base_cost: Decimal,
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    pub char_count_cost: Decimal,
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    pub word_length_cost: Decimal,
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    pub third_vowel_cost: Decimal,
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    pub length_penalty: Decimal,
    /// Zero or negative (a discount)
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    pub unique_word_bonus: Decimal,
    pub palindrome_multiplier: Multiplier,
}

impl CostBreakdown {
    /// Breakdown for an empty message: the base cost, raised to the floor
    pub fn base_only(base_cost: Decimal, minimum_credits: Decimal) -> Self {
        Self {
            credits_used: to_cents(base_cost.max(minimum_credits)),
            base_cost: to_cents(base_cost),
            char_count_cost: to_cents(Decimal::ZERO),
            word_length_cost: to_cents(Decimal::ZERO),
            third_vowel_cost: to_cents(Decimal::ZERO),
            length_penalty: to_cents(Decimal::ZERO),
            unique_word_bonus: to_cents(Decimal::ZERO),
            palindrome_multiplier: Multiplier::Single,
        }
    }

    /// Named surcharge/discount lines in evaluation order
    pub fn components(&self) -> [(&'static str, Decimal); 6] {
        [
            ("base_cost", self.base_cost),
            ("char_count_cost", self.char_count_cost),
            ("word_length_cost", self.word_length_cost),
            ("third_vowel_cost", self.third_vowel_cost),
            ("length_penalty", self.length_penalty),
            ("unique_word_bonus", self.unique_word_bonus),
        ]
    }
}

/// A chat message submitted for pricing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    pub id: u64,
    pub text: String,
    pub timestamp: DateTime<Utc>,
}

/// Charge for a single message in a usage report
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UsageItem {
    pub message_id: u64,
    pub timestamp: DateTime<Utc>,
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    pub credits_used: Decimal,
}

/// Usage over a set of messages
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UsageReport {
    pub usage: Vec<UsageItem>,
    /// Sum of the per-message charges
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    pub total_credits: Decimal,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_to_cents_rounds_half_up() {
        assert_eq!(to_cents(dec!(0.125)).to_string(), "0.13");
        assert_eq!(to_cents(dec!(0.124)).to_string(), "0.12");
        assert_eq!(to_cents(dec!(2.675)).to_string(), "2.68");
        assert_eq!(to_cents(dec!(-0.125)).to_string(), "-0.13");
    }

    #[test]
    fn test_to_cents_pins_scale() {
        assert_eq!(to_cents(Decimal::ONE).to_string(), "1.00");
        assert_eq!(to_cents(Decimal::ZERO).to_string(), "0.00");
        assert_eq!(to_cents(dec!(0.3)).to_string(), "0.30");
    }

    #[test]
    fn test_multiplier_serializes_as_integer() {
        let json = serde_json::to_string(&Multiplier::Double).unwrap();
        assert_eq!(json, "2");
        let parsed: Multiplier = serde_json::from_str("1").unwrap();
        assert_eq!(parsed, Multiplier::Single);
        assert!(serde_json::from_str::<Multiplier>("3").is_err());
    }

    #[test]
    fn test_breakdown_json_keeps_two_decimals() {
        let breakdown = CostBreakdown::base_only(Decimal::ONE, Decimal::ONE);
        let json = serde_json::to_string(&breakdown).unwrap();
        assert!(json.contains("\"credits_used\":1.00"), "{json}");
        assert!(json.contains("\"unique_word_bonus\":0.00"), "{json}");
        assert!(json.contains("\"palindrome_multiplier\":1"), "{json}");
        assert!(!json.contains("\"1.00\""), "decimals must be numbers: {json}");
    }

    #[test]
    fn test_breakdown_json_roundtrip() {
        let breakdown = CostBreakdown::base_only(Decimal::ONE, Decimal::ONE);
        let json = serde_json::to_string(&breakdown).unwrap();
        let back: CostBreakdown = serde_json::from_str(&json).unwrap();
        assert_eq!(back, breakdown);
    }
}

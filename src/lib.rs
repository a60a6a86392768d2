//! Message Credits - deterministic credit pricing for chat messages
//!
//! Every message is priced by a fixed rule set: a base charge, per-character
//! and per-word surcharges, a vowel-position surcharge, a long-message
//! penalty and a unique-word discount. The subtotal is floored and then
//! doubled for palindromes. All arithmetic is exact decimal.
//!
//! ```
//! let breakdown = message_credits::score("Hello world");
//! assert!(breakdown.credits_used >= rust_decimal::Decimal::ONE);
//! ```

pub mod config;
pub mod models;
pub mod reporters;
pub mod scoring;
pub mod usage;

pub use config::CreditRules;
pub use models::CostBreakdown;
pub use scoring::{score, CreditScorer};

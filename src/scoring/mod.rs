//! Message Credit Scoring
//!
//! Prices a message by summing independent rule charges, flooring the
//! subtotal, then applying the palindrome multiplier.
//!
//! # Pricing Formula
//!
//! ```text
//! subtotal = base + chars + words + vowels + length_penalty + unique_bonus
//! credits  = max(subtotal, minimum_credits) × (2 if palindrome else 1)
//! ```
//!
//! # Rules (defaults)
//!
//! - **Base**: 1 credit per message
//! - **Floor** (`minimum_credits`): 1
//! - **Characters**: 0.05 per Unicode code point
//! - **Words** (runs of `[A-Za-z'-]`): 0.1 for 1-3 chars, 0.2 for 4-7, 0.3 for 8+
//! - **Third vowels**: 0.3 per vowel at positions 3, 6, 9, ... (case-insensitive)
//! - **Length penalty**: 5 when the message exceeds 100 characters
//! - **Unique words**: -2 when every word is distinct (case-sensitive)
//! - **Palindrome**: ×2 when the lowercased ASCII letters and digits read the
//!   same backwards
//!
//! All values are exact decimals. Each returned charge is rounded half-up to
//! two places; the empty message costs the base, raised to the floor.
//!
//! # Example
//!
//! `"A man a plan a canal Panama"` (27 chars, 7 words, one repeat):
//! - 1 + 1.35 + 1.0 + 0.3 = 3.65
//! - palindrome → 7.30

mod credit_scorer;
pub mod text_rules;

pub use credit_scorer::{score, CreditScorer};
pub use text_rules::TextProfile;

//! Rule-based message scorer
//!
//! Sums the per-rule charges in a fixed order, floors the subtotal and
//! applies the palindrome multiplier last.

use super::text_rules::TextProfile;
use crate::config::CreditRules;
use crate::models::{to_cents, CostBreakdown, Multiplier};
use rust_decimal::Decimal;
use tracing::debug;

/// Unrounded charges for one message
#[derive(Debug, Clone, PartialEq, Eq)]
struct RawCharges {
    char_count_cost: Decimal,
    word_length_cost: Decimal,
    third_vowel_cost: Decimal,
    length_penalty: Decimal,
    unique_word_bonus: Decimal,
}

/// Message scorer over a borrowed rule set
#[derive(Debug, Clone, Copy)]
pub struct CreditScorer<'a> {
    rules: &'a CreditRules,
}

impl<'a> CreditScorer<'a> {
    pub fn new(rules: &'a CreditRules) -> Self {
        Self { rules }
    }

    /// Price a message. Total over all inputs.
    pub fn calculate(&self, text: &str) -> CostBreakdown {
        self.price(text).1
    }

    /// Breakdown plus the profile it was computed from; no profile for empty text
    fn price(&self, text: &str) -> (Option<TextProfile>, CostBreakdown) {
        if text.is_empty() {
            let breakdown =
                CostBreakdown::base_only(self.rules.base_cost, self.rules.minimum_credits);
            return (None, breakdown);
        }

        let profile = TextProfile::of(text, self.rules);
        let raw = self.raw_charges(&profile);

        let subtotal = self.rules.base_cost
            + raw.char_count_cost
            + raw.word_length_cost
            + raw.third_vowel_cost
            + raw.length_penalty
            + raw.unique_word_bonus;
        let floored = subtotal.max(self.rules.minimum_credits);

        let multiplier = if profile.is_palindrome {
            Multiplier::Double
        } else {
            Multiplier::Single
        };
        let credits = floored * Decimal::from(multiplier);

        debug!(
            "Scored {} chars, {} words: subtotal={}, floored={}, multiplier={}, credits={}",
            profile.char_count,
            profile.words.len(),
            subtotal,
            floored,
            multiplier,
            credits
        );

        let breakdown = CostBreakdown {
            credits_used: to_cents(credits),
            base_cost: to_cents(self.rules.base_cost),
            char_count_cost: to_cents(raw.char_count_cost),
            word_length_cost: to_cents(raw.word_length_cost),
            third_vowel_cost: to_cents(raw.third_vowel_cost),
            length_penalty: to_cents(raw.length_penalty),
            unique_word_bonus: to_cents(raw.unique_word_bonus),
            palindrome_multiplier: multiplier,
        };
        (Some(profile), breakdown)
    }

    fn raw_charges(&self, profile: &TextProfile) -> RawCharges {
        let rules = self.rules;

        let char_count_cost = rules.char_cost * Decimal::from(profile.char_count);

        let word_length_cost = profile
            .words
            .iter()
            .map(|w| rules.word_cost(w.len()))
            .sum::<Decimal>();

        let third_vowel_cost =
            rules.vowel_position_cost * Decimal::from(profile.vowel_positions.len());

        let length_penalty = if profile.char_count > rules.length_penalty_threshold {
            rules.length_penalty
        } else {
            Decimal::ZERO
        };

        let unique_word_bonus = if profile.all_words_unique {
            rules.unique_word_bonus
        } else {
            Decimal::ZERO
        };

        RawCharges {
            char_count_cost,
            word_length_cost,
            third_vowel_cost,
            length_penalty,
            unique_word_bonus,
        }
    }

    /// Generate human-readable explanation of a message's price
    pub fn explain(&self, text: &str) -> String {
        let (profile, breakdown) = self.price(text);
        let rules = self.rules;
        let mut lines = Vec::new();

        lines.push(format!("# Credits: {}\n", breakdown.credits_used));

        lines.push("## Formula\n".to_string());
        lines.push("```".to_string());
        lines.push("subtotal = base + chars + words + vowels + length_penalty + unique_bonus".to_string());
        lines.push(format!(
            "credits  = max(subtotal, {}) × palindrome_multiplier",
            rules.minimum_credits
        ));
        lines.push("```\n".to_string());

        let Some(profile) = profile else {
            lines.push(format!(
                "Empty message: only the base cost applies, floored at {}.",
                rules.minimum_credits
            ));
            return lines.join("\n");
        };

        lines.push("## Message\n".to_string());
        lines.push(format!("- **Characters**: {}", profile.char_count));
        lines.push(format!("- **Words**: {}", profile.words.len()));
        lines.push(format!(
            "- **Vowels at positions divisible by {}**: {}",
            rules.vowel_position_interval,
            format_positions(&profile.vowel_positions)
        ));
        lines.push(format!(
            "- **All words unique**: {}",
            if profile.all_words_unique { "yes" } else { "no" }
        ));
        lines.push(format!(
            "- **Palindrome**: {}\n",
            if profile.is_palindrome { "yes" } else { "no" }
        ));

        lines.push("## Charges\n".to_string());
        lines.push(format!("- Base: {}", breakdown.base_cost));
        lines.push(format!(
            "- Characters: {} × {} = {}",
            profile.char_count, rules.char_cost, breakdown.char_count_cost
        ));

        let (short, medium, long) = self.bucket_counts(&profile.words);
        lines.push(format!(
            "- Words: {} short × {} + {} medium × {} + {} long × {} = {}",
            short,
            rules.short_word_cost,
            medium,
            rules.medium_word_cost,
            long,
            rules.long_word_cost,
            breakdown.word_length_cost
        ));
        lines.push(format!(
            "- Vowel positions: {} × {} = {}",
            profile.vowel_positions.len(),
            rules.vowel_position_cost,
            breakdown.third_vowel_cost
        ));
        if profile.char_count > rules.length_penalty_threshold {
            lines.push(format!(
                "- Length penalty: {} (over {} characters)",
                breakdown.length_penalty, rules.length_penalty_threshold
            ));
        }
        if profile.all_words_unique {
            lines.push(format!("- Unique word bonus: {}", breakdown.unique_word_bonus));
        }
        if breakdown.palindrome_multiplier == Multiplier::Double {
            lines.push(format!(
                "- Palindrome: × {}",
                breakdown.palindrome_multiplier
            ));
        }
        lines.push(format!("\n**Total**: {}", breakdown.credits_used));

        lines.join("\n")
    }

    fn bucket_counts(&self, words: &[String]) -> (usize, usize, usize) {
        let mut counts = (0, 0, 0);
        for word in words {
            let len = word.len();
            if len <= self.rules.short_word_max_len {
                counts.0 += 1;
            } else if len <= self.rules.medium_word_max_len {
                counts.1 += 1;
            } else {
                counts.2 += 1;
            }
        }
        counts
    }
}

fn format_positions(positions: &[usize]) -> String {
    if positions.is_empty() {
        return "none".to_string();
    }
    positions
        .iter()
        .map(|p| p.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Price a message with the default rule set
pub fn score(text: &str) -> CostBreakdown {
    let rules = CreditRules::default();
    CreditScorer::new(&rules).calculate(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_empty_message() {
        let b = score("");
        assert_eq!(b.credits_used.to_string(), "1.00");
        assert_eq!(b.base_cost.to_string(), "1.00");
        assert_eq!(b.char_count_cost.to_string(), "0.00");
        assert_eq!(b.word_length_cost.to_string(), "0.00");
        assert_eq!(b.third_vowel_cost.to_string(), "0.00");
        assert_eq!(b.length_penalty.to_string(), "0.00");
        assert_eq!(b.unique_word_bonus.to_string(), "0.00");
        assert_eq!(b.palindrome_multiplier, Multiplier::Single);
    }

    #[test]
    fn test_empty_message_respects_floor() {
        let rules = CreditRules {
            base_cost: dec!(0.5),
            ..Default::default()
        };
        let scorer = CreditScorer::new(&rules);
        let b = scorer.calculate("");
        assert_eq!(b.base_cost.to_string(), "0.50");
        assert_eq!(b.credits_used.to_string(), "1.00");
        assert!(scorer.explain("").contains("# Credits: 1.00"));
    }

    #[test]
    fn test_third_vowel_exactness() {
        // "aaa": 3 chars, one word, vowel at position 3, unique, palindrome
        let b = score("aaa");
        assert_eq!(b.third_vowel_cost, dec!(0.30));
        assert_eq!(b.char_count_cost, dec!(0.15));
        assert_eq!(b.word_length_cost, dec!(0.10));
        assert_eq!(b.unique_word_bonus, dec!(-2.00));
        // 1 + 0.15 + 0.1 + 0.3 - 2 = -0.45 -> floor 1 -> x2
        assert_eq!(b.palindrome_multiplier, Multiplier::Double);
        assert_eq!(b.credits_used, dec!(2.00));
    }

    #[test]
    fn test_duplicate_words_no_bonus() {
        let b = score("cat cat");
        assert_eq!(b.unique_word_bonus, Decimal::ZERO);
        // position 6 is 'a'
        assert_eq!(b.third_vowel_cost, dec!(0.30));
        assert_eq!(b.credits_used, dec!(1.85));
        assert_eq!(b.palindrome_multiplier, Multiplier::Single);
    }

    #[test]
    fn test_case_distinct_words_get_bonus() {
        let b = score("cat Cat");
        assert_eq!(b.unique_word_bonus, dec!(-2));
        // 1 + 0.35 + 0.2 + 0.3 - 2 = -0.15 -> floor 1
        assert_eq!(b.credits_used, dec!(1.00));
    }

    #[test]
    fn test_no_words_no_bonus() {
        let b = score("12345");
        assert_eq!(b.unique_word_bonus, Decimal::ZERO);
        assert_eq!(b.word_length_cost, Decimal::ZERO);
        // 1 + 0.25 = 1.25, "12345" is not a palindrome
        assert_eq!(b.credits_used, dec!(1.25));
        assert_eq!(b.palindrome_multiplier, Multiplier::Single);
    }

    #[test]
    fn test_numeric_palindrome_doubles() {
        let b = score("12321");
        assert_eq!(b.palindrome_multiplier, Multiplier::Double);
        assert_eq!(b.credits_used, dec!(2.50));
    }

    #[test]
    fn test_punctuation_only_is_not_palindrome() {
        let b = score("?!?");
        assert_eq!(b.palindrome_multiplier, Multiplier::Single);
        assert_eq!(b.credits_used, dec!(1.15));
    }

    #[test]
    fn test_length_penalty_boundary() {
        // trailing '2' keeps the digit runs from being palindromes
        let at_limit = format!("{}2", "1".repeat(99));
        let over_limit = format!("{}2", "1".repeat(100));

        let a = score(&at_limit);
        let b = score(&over_limit);
        assert_eq!(a.length_penalty, Decimal::ZERO);
        assert_eq!(b.length_penalty, dec!(5.00));
        assert_eq!(a.credits_used, dec!(6.00));
        assert_eq!(b.credits_used, dec!(11.05));
    }

    #[test]
    fn test_word_buckets() {
        let b = score("an idea extraordinary");
        // an=0.1, idea=0.2, extraordinary=0.3
        assert_eq!(b.word_length_cost, dec!(0.60));
    }

    #[test]
    fn test_unicode_counts_code_points() {
        let b = score("ééé");
        assert_eq!(b.char_count_cost, dec!(0.15));
        assert_eq!(b.word_length_cost, Decimal::ZERO);
    }

    #[test]
    fn test_custom_rules() {
        let rules = CreditRules {
            base_cost: dec!(2),
            char_cost: dec!(0.01),
            ..Default::default()
        };
        let scorer = CreditScorer::new(&rules);
        let b = scorer.calculate("12345");
        assert_eq!(b.base_cost, dec!(2.00));
        assert_eq!(b.credits_used, dec!(2.05));
    }

    #[test]
    fn test_floor_uses_minimum_credits() {
        let rules = CreditRules {
            minimum_credits: dec!(3),
            ..Default::default()
        };
        let b = CreditScorer::new(&rules).calculate("hello");
        assert_eq!(b.credits_used, dec!(3.00));
    }

    #[test]
    fn test_explain_mentions_rules_that_fired() {
        let rules = CreditRules::default();
        let scorer = CreditScorer::new(&rules);
        let text = scorer.explain("A man a plan a canal Panama");
        assert!(text.contains("# Credits:"));
        assert!(text.contains("**Palindrome**: yes"));
        assert!(text.contains("Palindrome: × 2"));
        assert!(!text.contains("Length penalty"));
    }

    #[test]
    fn test_explain_total_matches_calculate() {
        let rules = CreditRules::default();
        let scorer = CreditScorer::new(&rules);
        for text in ["cat cat", "A man a plan a canal Panama", "12345"] {
            let credits = scorer.calculate(text).credits_used;
            let explained = scorer.explain(text);
            assert!(
                explained.contains(&format!("**Total**: {credits}")),
                "{explained}"
            );
            assert!(explained.contains(&format!("# Credits: {credits}")));
        }
    }

    #[test]
    fn test_explain_empty() {
        let rules = CreditRules::default();
        let text = CreditScorer::new(&rules).explain("");
        assert!(text.contains("# Credits: 1.00"));
        assert!(text.contains("Empty message"));
    }
}

//! Text predicates behind the pricing rules
//!
//! Each rule normalizes text its own way:
//! - words are case-preserving runs of `[A-Za-z'-]`
//! - word uniqueness is case-sensitive
//! - vowel positions are checked case-insensitively on the raw text
//! - the palindrome check keeps ASCII letters and digits only, lowercased

use crate::config::CreditRules;
use regex::Regex;
use std::collections::HashSet;
use std::sync::OnceLock;

fn word_pattern() -> &'static Regex {
    static WORD_PATTERN: OnceLock<Regex> = OnceLock::new();
    WORD_PATTERN.get_or_init(|| Regex::new(r"[A-Za-z'\-]+").expect("valid regex"))
}

/// Extract words: maximal runs of ASCII letters, apostrophes and hyphens.
///
/// Digits, whitespace and other punctuation separate words.
pub fn tokenize_words(text: &str) -> Vec<&str> {
    word_pattern().find_iter(text).map(|m| m.as_str()).collect()
}

/// 1-based character positions that are multiples of `interval` and hold a vowel
pub fn third_vowel_positions(text: &str, interval: usize) -> Vec<usize> {
    if interval == 0 {
        return Vec::new();
    }
    text.chars()
        .enumerate()
        .map(|(i, c)| (i + 1, c))
        .filter(|(pos, c)| pos % interval == 0 && is_vowel(*c))
        .map(|(pos, _)| pos)
        .collect()
}

fn is_vowel(c: char) -> bool {
    matches!(c.to_ascii_lowercase(), 'a' | 'e' | 'i' | 'o' | 'u')
}

/// Text reduced to lowercase ASCII letters and digits
pub fn palindrome_key(text: &str) -> String {
    text.chars()
        .filter(char::is_ascii_alphanumeric)
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

/// Non-empty key that reads the same reversed
pub fn is_palindrome(text: &str) -> bool {
    let key = palindrome_key(text);
    // key is ASCII, so byte reversal is character reversal
    !key.is_empty() && key.bytes().eq(key.bytes().rev())
}

/// True when the list is non-empty and no word repeats (case-sensitive)
pub fn all_unique(words: &[&str]) -> bool {
    if words.is_empty() {
        return false;
    }
    let mut seen = HashSet::with_capacity(words.len());
    words.iter().all(|w| seen.insert(*w))
}

/// Everything the pricing rules need to know about a message
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TextProfile {
    /// Unicode code points
    pub char_count: usize,
    pub words: Vec<String>,
    /// 1-based positions of vowels on the vowel interval
    pub vowel_positions: Vec<usize>,
    pub all_words_unique: bool,
    pub is_palindrome: bool,
}

impl TextProfile {
    pub fn of(text: &str, rules: &CreditRules) -> Self {
        let words = tokenize_words(text);
        Self {
            char_count: text.chars().count(),
            all_words_unique: all_unique(&words),
            words: words.into_iter().map(str::to_string).collect(),
            vowel_positions: third_vowel_positions(text, rules.vowel_position_interval),
            is_palindrome: is_palindrome(text),
        }
    }
}

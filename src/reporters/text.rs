//! Text (terminal) reporter with colors and formatting

use crate::models::{CostBreakdown, Multiplier, UsageReport};
use console::style;
use rust_decimal::Decimal;

/// Render a breakdown as an aligned charge table
pub fn render_breakdown(breakdown: &CostBreakdown) -> String {
    let mut out = String::new();

    out.push_str(&format!("\n{}\n", style("Message Credits").bold()));
    out.push_str(&format!(
        "{}\n",
        style("──────────────────────────────────────").dim()
    ));

    for (name, value) in breakdown.components() {
        out.push_str(&format!("  {:<20} {}\n", name, format_amount(value)));
    }
    out.push_str(&format!(
        "  {:<20} {}\n",
        "palindrome_multiplier",
        format_multiplier(breakdown.palindrome_multiplier)
    ));

    out.push_str(&format!(
        "{}\n",
        style("──────────────────────────────────────").dim()
    ));
    out.push_str(&format!(
        "  {:<20} {}\n",
        style("credits_used").bold(),
        style(breakdown.credits_used).bold().cyan()
    ));

    out
}

/// Render a usage report as a table with a total line
pub fn render_usage(report: &UsageReport) -> String {
    let mut out = String::new();

    out.push_str(&format!("\n{}\n", style("Usage").bold()));
    out.push_str(&format!(
        "{}\n",
        style("  MESSAGE     TIMESTAMP                   CREDITS").dim()
    ));
    out.push_str(&format!(
        "{}\n",
        style("  ─────────────────────────────────────────────────").dim()
    ));

    for item in &report.usage {
        out.push_str(&format!(
            "  {:<10}  {:<26}  {:>7}\n",
            item.message_id,
            item.timestamp.to_rfc3339(),
            item.credits_used
        ));
    }

    if report.usage.is_empty() {
        out.push_str(&format!("  {}\n", style("(no messages)").dim()));
    }

    out.push_str(&format!(
        "\n  {} messages, {} credits\n",
        style(report.usage.len()).cyan(),
        style(report.total_credits).bold().cyan()
    ));

    out
}

fn format_amount(value: Decimal) -> String {
    if value.is_sign_negative() && !value.is_zero() {
        style(value).green().to_string()
    } else if value.is_zero() {
        style(value).dim().to_string()
    } else {
        value.to_string()
    }
}

fn format_multiplier(multiplier: Multiplier) -> String {
    match multiplier {
        Multiplier::Single => style(format!("×{}", multiplier)).dim().to_string(),
        Multiplier::Double => style(format!("×{}", multiplier)).yellow().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reporters::tests::test_usage_report;
    use crate::scoring::score;

    #[test]
    fn test_breakdown_lists_every_field() {
        let out = render_breakdown(&score("A man a plan a canal Panama"));
        for field in [
            "credits_used",
            "base_cost",
            "char_count_cost",
            "word_length_cost",
            "third_vowel_cost",
            "length_penalty",
            "unique_word_bonus",
            "palindrome_multiplier",
        ] {
            assert!(out.contains(field), "missing {field} in:\n{out}");
        }
        assert!(out.contains("7.30"));
        assert!(out.contains("×2"));
    }

    #[test]
    fn test_usage_table() {
        let out = render_usage(&test_usage_report());
        assert!(out.contains("1000"));
        assert!(out.contains("7.30"));
        assert!(out.contains("8.30"));
    }

    #[test]
    fn test_usage_empty() {
        let mut report = test_usage_report();
        report.usage.clear();
        let out = render_usage(&report);
        assert!(out.contains("(no messages)"));
    }
}

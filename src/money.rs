//! Clamped money arithmetic, forgiving input parsing, and display formatting.
//!
//! Amounts are whole-unit signed currency values. Negative values represent
//! decreases and are expected in normal play (e.g. paying rent is
//! `cash: -1000`). Input parsing never fails: a learner who types garbage into
//! a field gets a zero, not an error.

/// Upper bound for any stored amount.
pub const MONEY_MAX: i64 = 999_999_999;

/// Lower bound for any stored amount.
pub const MONEY_MIN: i64 = -999_999_999;

/// Clamp an amount into the supported range.
///
/// Idempotent: clamping an already-clamped value is a no-op.
pub fn clamp_money(n: i64) -> i64 {
    n.clamp(MONEY_MIN, MONEY_MAX)
}

/// Parse a learner-entered amount.
///
/// Empty input and a lone `-` (someone about to type a negative number) parse
/// to 0. Anything unparseable also degrades to 0 rather than erroring, and the
/// result is clamped.
pub fn parse_amount(raw: &str) -> i64 {
    let trimmed = raw.trim();
    if trimmed.is_empty() || trimmed == "-" {
        return 0;
    }
    clamp_money(trimmed.parse::<i64>().unwrap_or(0))
}

/// Format an amount for display: `30000` → `$30,000`, `-2500` → `-$2,500`.
pub fn format_money(n: i64) -> String {
    let sign = if n < 0 { "-" } else { "" };
    let digits = n.unsigned_abs().to_string();

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    format!("{sign}${grouped}")
}

//! Text formatting for table cells.

use rust_decimal::{Decimal, RoundingStrategy};

fn round2(value: Decimal) -> Decimal {
    let rounded = value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    // Avoid printing "-0.00"
    if rounded.is_zero() { Decimal::ZERO } else { rounded }
}

/// Insert a comma between every group of three digits.
fn group_thousands(digits: &str) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Two decimals with thousands separators: `1,234.50`.
pub fn format_amount(value: Decimal) -> String {
    let rounded = round2(value);
    let text = format!("{:.2}", rounded.abs());
    let (int_part, frac_part) = text.split_once('.').unwrap_or((text.as_str(), "00"));
    let sign = if rounded.is_sign_negative() { "-" } else { "" };
    format!("{}{}.{}", sign, group_thousands(int_part), frac_part)
}

/// Like [`format_amount`] but always signed: `+1,234.50`, `-0.75`.
pub fn format_signed(value: Decimal) -> String {
    let text = format_amount(value);
    if text.starts_with('-') {
        text
    } else {
        format!("+{}", text)
    }
}

/// Signed percentage with two decimals, no separators: `+1.01`.
pub fn format_percent(value: Decimal) -> String {
    let rounded = round2(value);
    if rounded.is_sign_negative() {
        format!("{:.2}", rounded)
    } else {
        format!("+{:.2}", rounded)
    }
}

/// Integer volume with thousands separators.
pub fn format_volume(volume: u64) -> String {
    group_thousands(&volume.to_string())
}

/// Cut `name` to at most `max_chars` characters.
pub fn truncate_name(name: &str, max_chars: usize) -> String {
    name.chars().take(max_chars).collect()
}

/// Left-align `text` in a column of `width` characters.
pub fn pad(text: &str, width: usize) -> String {
    format!("{:<width$}", text, width = width)
}

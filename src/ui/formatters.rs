use crate::error::FormatError;

/// Placeholder rendered in a cell whose value is out of range.
pub const PLACEHOLDER: &str = "-";

const UNITS: [(f64, &str); 4] = [
    (1_000_000_000_000.0, "T"),
    (1_000_000_000.0, "B"),
    (1_000_000.0, "M"),
    (1_000.0, "K"),
];

/// Compact currency for market cap and volume: `$` + two decimals + K/M/B/T.
///
/// The unit is picked from the raw value, then the scaled value is rounded,
/// so `999_999.0` renders as `$1000.00K`.
pub fn try_format_number(value: f64) -> Result<String, FormatError> {
    let value = FormatError::check("value", value)?;
    let (scaled, suffix) = UNITS
        .iter()
        .find(|(threshold, _)| value >= *threshold)
        .map(|(threshold, suffix)| (value / threshold, *suffix))
        .unwrap_or((value, ""));
    Ok(format!("${:.2}{}", scaled, suffix))
}

pub fn format_number(value: f64) -> String {
    try_format_number(value).unwrap_or_else(|_| PLACEHOLDER.to_string())
}

/// Unit price: two decimals with thousands separators from `$1` up,
/// four decimals below that.
pub fn try_format_price(price: f64) -> Result<String, FormatError> {
    let price = FormatError::check("price", price)?;
    if price >= 1.0 {
        let fixed = format!("{:.2}", price);
        let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));
        Ok(format!("${}.{}", group_thousands(int_part), frac_part))
    } else {
        Ok(format!("${:.4}", price))
    }
}

pub fn format_price(price: f64) -> String {
    try_format_price(price).unwrap_or_else(|_| PLACEHOLDER.to_string())
}

/// Inserts `,` between every group of three digits, counting from the right.
pub fn group_thousands(digits: &str) -> String {
    digits
        .as_bytes()
        .rchunks(3)
        .rev()
        .map(|chunk| String::from_utf8_lossy(chunk))
        .collect::<Vec<_>>()
        .join(",")
}

/// Signed 24h change: `+2.45%`, `-1.23%`, and `0.00%` for no movement.
pub fn format_change(change_pct: f64) -> String {
    if !change_pct.is_finite() {
        return PLACEHOLDER.to_string();
    }
    if change_pct > 0.0 {
        format!("+{:.2}%", change_pct)
    } else if change_pct < 0.0 {
        format!("{:.2}%", change_pct)
    } else {
        "0.00%".to_string()
    }
}

pub fn truncate_str(s: &str, max_len: usize) -> String {
    if s.chars().count() > max_len {
        let end = s
            .char_indices()
            .nth(max_len.saturating_sub(3))
            .map(|(i, _)| i)
            .unwrap_or(s.len());
        format!("{}...", &s[..end])
    } else {
        s.to_string()
    }
}

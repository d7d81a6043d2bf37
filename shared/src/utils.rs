//! # Number Formatting
//!
//! Display helpers for the statistics counters.
//!
//! - [`format_number`] - thousands separators
//! - [`format_compact`] - `K` abbreviation for counts of a thousand or more
//! - [`format_stat`] - the counter display rule, picking one of the above

/// Format a number with commas (e.g., 1234567.89 -> "1,234,567.89")
///
/// # Examples
///
/// ```rust
/// use shared::utils::format_number;
///
/// assert_eq!(format_number(1234567.89, 2), "1,234,567.89");
/// assert_eq!(format_number(999.0, 0), "999");
/// ```
pub fn format_number(value: f64, decimals: usize) -> String {
    let formatted = format!("{:.prec$}", value, prec = decimals);
    let (sign, unsigned) = match formatted.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", formatted.as_str()),
    };
    let (integer_part, decimal_part) = unsigned.split_once('.').unwrap_or((unsigned, ""));

    let mut grouped = String::with_capacity(integer_part.len() + integer_part.len() / 3);
    for (i, ch) in integer_part.chars().enumerate() {
        if i > 0 && (integer_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    if decimal_part.is_empty() {
        format!("{}{}", sign, grouped)
    } else {
        format!("{}{}.{}", sign, grouped, decimal_part)
    }
}

/// Abbreviate whole counts of a thousand or more with `K`.
///
/// Exact multiples of a thousand drop the decimal.
///
/// ```rust
/// use shared::utils::format_compact;
///
/// assert_eq!(format_compact(50_000), "50K");
/// assert_eq!(format_compact(1_500), "1.5K");
/// assert_eq!(format_compact(999), "999");
/// ```
pub fn format_compact(count: u64) -> String {
    if count < 1000 {
        return format_number(count as f64, 0);
    }
    let thousands = count as f64 / 1000.0;
    if count % 1000 == 0 {
        format!("{:.0}K", thousands)
    } else {
        format!("{:.1}K", thousands)
    }
}

/// Render a counter value. Fractional statistics keep one decimal, whole ones
/// are abbreviated.
pub fn format_stat(value: f64, fractional: bool) -> String {
    if fractional {
        format!("{:.1}", value)
    } else {
        format_compact(value.max(0.0) as u64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(1234567.89, 2), "1,234,567.89");
        assert_eq!(format_number(100.0, 2), "100.00");
        assert_eq!(format_number(-1234.0, 0), "-1,234");
        assert_eq!(format_number(0.0, 0), "0");
    }

    #[test]
    fn test_format_compact() {
        assert_eq!(format_compact(0), "0");
        assert_eq!(format_compact(120_000), "120K");
        assert_eq!(format_compact(49_166), "49.2K");
        assert_eq!(format_compact(1_000), "1K");
    }

    #[test]
    fn test_format_stat() {
        assert_eq!(format_stat(99.2, true), "99.2");
        assert_eq!(format_stat(98.0, true), "98.0");
        assert_eq!(format_stat(24.0, false), "24");
        assert_eq!(format_stat(50_000.0, false), "50K");
    }
}

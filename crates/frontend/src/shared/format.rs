//! Display formatting for prices and timestamps.

use chrono::DateTime;

/// Formats a rupee amount with Indian digit grouping: `1234567.5` becomes
/// `"₹12,34,567.50"`.
pub fn price_inr(amount: f64) -> String {
    let negative = amount < 0.0;
    let paise = (amount.abs() * 100.0).round() as u64;
    let whole = paise / 100;
    let cents = paise % 100;

    let digits = whole.to_string();
    let len = digits.len();
    let mut grouped = String::with_capacity(len + len / 2);
    for (i, ch) in digits.chars().enumerate() {
        grouped.push(ch);
        let remaining = len - i - 1;
        // last group of three, then groups of two
        if remaining == 3 || (remaining > 3 && remaining % 2 == 1) {
            grouped.push(',');
        }
    }

    let sign = if negative { "-" } else { "" };
    format!("{sign}\u{20b9}{grouped}.{cents:02}")
}

/// Renders a server timestamp as "07 Mar 2026". The API emits RFC 2822
/// ("Sat, 07 Mar 2026 10:00:00 GMT"); anything unparseable is shown as-is.
pub fn order_date(raw: &str) -> String {
    if let Ok(parsed) = DateTime::parse_from_rfc2822(raw) {
        return parsed.format("%d %b %Y").to_string();
    }
    if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
        return parsed.format("%d %b %Y").to_string();
    }
    raw.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn indian_grouping() {
        assert_eq!(price_inr(0.0), "\u{20b9}0.00");
        assert_eq!(price_inr(999.0), "\u{20b9}999.00");
        assert_eq!(price_inr(1234.5), "\u{20b9}1,234.50");
        assert_eq!(price_inr(123456.0), "\u{20b9}1,23,456.00");
        assert_eq!(price_inr(1234567.5), "\u{20b9}12,34,567.50");
        assert_eq!(price_inr(-2500.0), "-\u{20b9}2,500.00");
    }

    #[test]
    fn paise_rounding_carries() {
        assert_eq!(price_inr(999.999), "\u{20b9}1,000.00");
    }

    #[test]
    fn date_formats() {
        assert_eq!(order_date("Sat, 07 Mar 2026 10:00:00 GMT"), "07 Mar 2026");
        assert_eq!(order_date("2026-03-07T10:00:00+00:00"), "07 Mar 2026");
        assert_eq!(order_date("yesterday"), "yesterday");
    }
}

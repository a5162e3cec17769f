//! Number formatting for answers and prompts.

/// `1234567` → `"1,234,567"`.
pub fn group_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Money amount with separators and at most two decimals, trailing zeros
/// dropped: `2250.0` → `"2,250"`, `1234.5` → `"1,234.5"`.
pub fn format_amount(value: f64) -> String {
    if !value.is_finite() {
        return value.to_string();
    }
    let cents = (value.abs() * 100.0).round() as u64;
    let sign = if value < 0.0 && cents > 0 { "-" } else { "" };
    let whole = group_thousands(cents / 100);
    let frac = cents % 100;

    if frac == 0 {
        format!("{sign}{whole}")
    } else if frac % 10 == 0 {
        format!("{sign}{whole}.{}", frac / 10)
    } else {
        format!("{sign}{whole}.{frac:02}")
    }
}

/// One decimal, or `n/a` when undefined.
pub fn format_percent(value: Option<f64>) -> String {
    match value {
        Some(v) if v.is_finite() => format!("{v:.1}%"),
        _ => "n/a".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn thousands() {
        assert_eq!(group_thousands(0), "0");
        assert_eq!(group_thousands(999), "999");
        assert_eq!(group_thousands(1_000), "1,000");
        assert_eq!(group_thousands(12_000), "12,000");
        assert_eq!(group_thousands(1_234_567), "1,234,567");
    }

    #[test]
    fn amounts() {
        assert_eq!(format_amount(2250.0), "2,250");
        assert_eq!(format_amount(1234.5), "1,234.5");
        assert_eq!(format_amount(1234.567), "1,234.57");
        assert_eq!(format_amount(0.05), "0.05");
        assert_eq!(format_amount(-12.0), "-12");
    }

    #[test]
    fn percents() {
        assert_eq!(format_percent(Some(5.0)), "5.0%");
        assert_eq!(format_percent(Some(3.914)), "3.9%");
        assert_eq!(format_percent(None), "n/a");
        assert_eq!(format_percent(Some(f64::NAN)), "n/a");
    }
}

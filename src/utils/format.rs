/// Formats a whole dollar amount with thousands separators, e.g.
/// `30000` -> `"$30,000"`.
pub fn usd(amount: i64) -> String {
    format!("${}", thousands(amount))
}

/// Inserts comma separators into a whole number.
pub fn thousands(n: i64) -> String {
    let digits = n.unsigned_abs().to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if n < 0 {
        out.push('-');
    }
    for (i, c) in digits.chars().enumerate() {
        let remaining = digits.len() - i;
        if i > 0 && remaining % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_thousands_groups_digits() {
        assert_eq!(thousands(0), "0");
        assert_eq!(thousands(999), "999");
        assert_eq!(thousands(1_000), "1,000");
        assert_eq!(thousands(30_000), "30,000");
        assert_eq!(thousands(1_234_567), "1,234,567");
    }

    #[test]
    fn test_thousands_keeps_sign() {
        assert_eq!(thousands(-2_500), "-2,500");
    }

    #[test]
    fn test_usd_prefixes_dollar_sign() {
        assert_eq!(usd(10_000), "$10,000");
        assert_eq!(usd(0), "$0");
    }
}

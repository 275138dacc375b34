//! Currency display formatting
//!
//! Prices render in the listing's own currency. Zero-decimal currencies
//! (ISO 4217 minor unit 0, which includes UGX) must never grow a fractional
//! part; everything else gets the conventional two decimals.

/// ISO 4217 currencies with a minor unit of zero digits
const ZERO_DECIMAL: [&str; 16] = [
    "BIF", "CLP", "DJF", "GNF", "JPY", "KMF", "KRW", "MGA", "PYG", "RWF", "UGX", "VND", "VUV",
    "XAF", "XOF", "XPF",
];

/// Format an amount for display, e.g. `format_price(1500000.0, "UGX")`
/// yields `"UGX 1,500,000"`.
pub fn format_price(amount: f64, currency: &str) -> String {
    let code = currency.to_ascii_uppercase();
    if ZERO_DECIMAL.contains(&code.as_str()) {
        format!("{} {}", code, group_digits(amount.round() as i64))
    } else {
        let cents = (amount * 100.0).round() as i64;
        format!(
            "{} {}.{:02}",
            code,
            group_digits(cents / 100),
            (cents % 100).abs()
        )
    }
}

fn group_digits(value: i64) -> String {
    let digits = value.unsigned_abs().to_string();
    let mut grouped = String::new();
    for (i, c) in digits.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    let body: String = grouped.chars().rev().collect();
    if value < 0 {
        format!("-{body}")
    } else {
        body
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ugx_has_no_fractional_part() {
        assert_eq!(format_price(1500000.0, "UGX"), "UGX 1,500,000");
        assert_eq!(format_price(950.0, "UGX"), "UGX 950");
    }

    #[test]
    fn test_two_decimal_currencies_show_cents() {
        assert_eq!(format_price(1234.5, "USD"), "USD 1,234.50");
        assert_eq!(format_price(80.0, "KES"), "KES 80.00");
    }

    #[test]
    fn test_currency_code_is_normalized() {
        assert_eq!(format_price(100.0, "ugx"), "UGX 100");
    }

    #[test]
    fn test_grouping_boundaries() {
        assert_eq!(format_price(1000.0, "UGX"), "UGX 1,000");
        assert_eq!(format_price(999.0, "UGX"), "UGX 999");
        assert_eq!(format_price(1000000000.0, "UGX"), "UGX 1,000,000,000");
    }
}

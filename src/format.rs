//! Price Formatting
//!
//! Currency text for item cards: KES with two decimals and en-US thousands
//! grouping, e.g. "KES 1,234.50".

/// Currency code shown on cards
pub const CURRENCY: &str = "KES";

/// Format a price for display
pub fn format_price(amount: f64) -> String {
    let sign = if amount < 0.0 { "-" } else { "" };
    let cents = (amount.abs() * 100.0).round() as u64;
    let whole = group_thousands(cents / 100);
    format!("{sign}{CURRENCY} {whole}.{:02}", cents % 100)
}

fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_price_whole_number() {
        assert_eq!(format_price(500.0), "KES 500.00");
    }

    #[test]
    fn test_format_price_groups_thousands() {
        assert_eq!(format_price(1234.5), "KES 1,234.50");
        assert_eq!(format_price(1_000_000.0), "KES 1,000,000.00");
    }

    #[test]
    fn test_format_price_rounds_to_two_decimals() {
        assert_eq!(format_price(19.999), "KES 20.00");
        assert_eq!(format_price(0.005), "KES 0.01");
    }

    #[test]
    fn test_format_price_zero_and_negative() {
        assert_eq!(format_price(0.0), "KES 0.00");
        assert_eq!(format_price(-250.0), "-KES 250.00");
    }
}

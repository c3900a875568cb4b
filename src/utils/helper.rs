/// Shorten a base58 address for display (`AbCd...WxYz`)
pub fn short_address(address: &str) -> String {
    if address.len() <= 11 || !address.is_ascii() {
        address.to_string()
    } else {
        format!("{}...{}", &address[..4], &address[address.len() - 4..])
    }
}

/// Format a balance with thousands separators and two decimals
pub fn format_balance(balance: f64) -> String {
    let fixed = format!("{:.2}", balance.abs());
    let (whole, fraction) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, digit) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    let sign = if balance < 0.0 { "-" } else { "" };
    format!("{}{}.{}", sign, grouped, fraction)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shortens_long_addresses_only() {
        assert_eq!(short_address("5Q544fKrFoe6tsEbD7S8EmxGTJYAKtTVhAW5Q5pge4j1"), "5Q54...e4j1");
        assert_eq!(short_address("short"), "short");
    }

    #[test]
    fn groups_thousands() {
        assert_eq!(format_balance(250_000.0), "250,000.00");
        assert_eq!(format_balance(100_000.01), "100,000.01");
        assert_eq!(format_balance(999.5), "999.50");
        assert_eq!(format_balance(1_234_567.891), "1,234,567.89");
    }
}

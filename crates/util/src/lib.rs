//! Display formatting helpers shared by the walletdeck UI.

/// Shortens a wallet address for table display.
///
/// Strings of ten characters or fewer are returned unchanged. Longer
/// strings keep the first four and last six characters joined by an
/// ellipsis, so a full address renders as e.g. `0x86...e243E4`, always
/// thirteen characters wide.
pub fn truncate_address(input: &str) -> String {
    let chars: Vec<char> = input.chars().collect();
    if chars.len() <= 10 {
        return input.to_string();
    }
    let head: String = chars[..4].iter().collect();
    let tail: String = chars[chars.len() - 6..].iter().collect();
    format!("{head}...{tail}")
}

/// Formats an amount as US-locale dollars: two decimal places and comma
/// separated thousands, e.g. `$1,234.50`.
///
/// Negative amounts carry a leading minus sign (`-$5.00`). Non-finite
/// values fall back to their plain float rendering.
pub fn format_usd(amount: f64) -> String {
    if !amount.is_finite() {
        return format!("${amount}");
    }
    let fixed = format!("{:.2}", amount.abs());
    let (whole, fraction) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));
    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (position, digit) in whole.chars().enumerate() {
        if position > 0 && (whole.len() - position) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    let sign = if amount < 0.0 && fixed != "0.00" { "-" } else { "" };
    format!("{sign}${grouped}.{fraction}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncate_address_keeps_short_strings() {
        assert_eq!(truncate_address(""), "");
        assert_eq!(truncate_address("0x1234"), "0x1234");
        assert_eq!(truncate_address("exactly10!"), "exactly10!");
    }

    #[test]
    fn truncate_address_shortens_long_strings_to_thirteen_chars() {
        let address = "0x86e154587c5Bc5B783762151CA62d881b5e243E4";
        let truncated = truncate_address(address);
        assert_eq!(truncated, "0x86...e243E4");
        assert_eq!(truncated.chars().count(), 13);

        let eleven = truncate_address("abcdefghijk");
        assert_eq!(eleven, "abcd...fghijk");
        assert_eq!(eleven.chars().count(), 13);
    }

    #[test]
    fn truncate_address_respects_char_boundaries() {
        let truncated = truncate_address("日本語のウォレット住所テスト");
        assert_eq!(truncated.chars().count(), 13);
        assert!(truncated.contains("..."));
    }

    #[test]
    fn format_usd_renders_two_decimals() {
        assert_eq!(format_usd(316.0), "$316.00");
        assert_eq!(format_usd(874.0), "$874.00");
        assert_eq!(format_usd(0.5), "$0.50");
        assert_eq!(format_usd(0.0), "$0.00");
    }

    #[test]
    fn format_usd_groups_thousands() {
        assert_eq!(format_usd(1234.0), "$1,234.00");
        assert_eq!(format_usd(987654.0), "$987,654.00");
        assert_eq!(format_usd(1234567.891), "$1,234,567.89");
    }

    #[test]
    fn format_usd_handles_negative_amounts() {
        assert_eq!(format_usd(-5.0), "-$5.00");
        assert_eq!(format_usd(-1234.5), "-$1,234.50");
    }
}

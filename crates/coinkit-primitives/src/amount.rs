//! Human-readable formatting of monetary values.
//!
//! Values are carried everywhere as unsigned integers in the smallest unit
//! (satoshis). This module only renders them in major coin units.

/// Number of satoshis in one coin.
pub const COIN: u64 = 100_000_000;

/// Number of fractional digits in a coin amount.
const FRACTION_DIGITS: usize = 8;

/// Express a count of whole coins in satoshis.
///
/// # Returns
/// `None` if the result does not fit in a `u64`.
pub fn coin_price(coins: u64) -> Option<u64> {
    coins.checked_mul(COIN)
}

/// Render a satoshi value in major units.
///
/// The fractional part is omitted when zero and otherwise printed without
/// trailing zeros, so `150_000_000` renders as `"1.5"` and `100_000_000`
/// renders as `"1"`.
pub fn format_btc(satoshis: u64) -> String {
    let major = satoshis / COIN;
    let minor = satoshis % COIN;
    if minor == 0 {
        return major.to_string();
    }
    let fraction = format!("{:0width$}", minor, width = FRACTION_DIGITS);
    format!("{}.{}", major, fraction.trim_end_matches('0'))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_whole_coins() {
        assert_eq!(format_btc(0), "0");
        assert_eq!(format_btc(COIN), "1");
        assert_eq!(format_btc(21_000_000 * COIN), "21000000");
    }

    #[test]
    fn test_format_fractions() {
        assert_eq!(format_btc(150_000_000), "1.5");
        assert_eq!(format_btc(1), "0.00000001");
        assert_eq!(format_btc(12_345_678), "0.12345678");
        assert_eq!(format_btc(1_000_010), "0.0100001");
    }

    #[test]
    fn test_format_max_value() {
        assert_eq!(format_btc(u64::MAX), "184467440737.09551615");
    }

    #[test]
    fn test_coin_price() {
        assert_eq!(coin_price(50), Some(5_000_000_000));
        assert_eq!(coin_price(u64::MAX), None);
    }
}

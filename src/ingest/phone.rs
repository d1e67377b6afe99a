//! Korean phone number formatting

use regex::Regex;
use std::sync::LazyLock;

static NON_DIGIT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^0-9]+").expect("static pattern is valid"));

/// Format a phone number by digit count
///
/// Everything but ASCII digits is stripped first. Lengths without a known
/// layout are returned as the original text, trimmed.
///
/// # Examples
///
/// ```
/// use placefinder::ingest::format_phone;
///
/// assert_eq!(format_phone("021234567"), "02-123-4567");
/// assert_eq!(format_phone("031 123 4567"), "031-123-4567");
/// assert_eq!(format_phone("1588-1234"), "1588-1234");
/// ```
#[must_use]
pub fn format_phone(raw: &str) -> String {
    let digits = NON_DIGIT.replace_all(raw, "");
    let d = digits.as_ref();
    match d.len() {
        9 => format!("{}-{}-{}", &d[..2], &d[2..5], &d[5..]),
        10 => format!("{}-{}-{}", &d[..3], &d[3..6], &d[6..]),
        11 => format!("{}-{}-{}", &d[..3], &d[3..7], &d[7..]),
        12 => format!("{}-{}-{}", &d[..4], &d[4..8], &d[8..]),
        _ => raw.trim().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nine_digits() {
        assert_eq!(format_phone("021234567"), "02-123-4567");
    }

    #[test]
    fn test_ten_digits_split_three_three_four() {
        assert_eq!(format_phone("0212345678"), "021-234-5678");
        assert_eq!(format_phone("031-123-4567"), "031-123-4567");
    }

    #[test]
    fn test_area_and_mobile_numbers() {
        assert_eq!(format_phone("0311234567"), "031-123-4567");
        assert_eq!(format_phone("010.1234.5678"), "010-1234-5678");
        assert_eq!(format_phone("(031) 123-4567"), "031-123-4567");
    }

    #[test]
    fn test_twelve_digit_virtual_numbers() {
        assert_eq!(format_phone("050713709844"), "0507-1370-9844");
    }

    #[test]
    fn test_unknown_lengths_pass_through() {
        assert_eq!(format_phone(" 1588-1234 "), "1588-1234");
        assert_eq!(format_phone("내선 12"), "내선 12");
        assert_eq!(format_phone(""), "");
    }

    #[test]
    fn test_full_width_digits_pass_through() {
        assert_eq!(format_phone("０３１"), "０３１");
        assert_eq!(format_phone(" ０１０-１２３４-５６７８ "), "０１０-１２３４-５６７８");
    }
}

//! Numeral helpers for deriving chapter ordinals from card titles.
//!
//! Chapter cards are titled like `"One Piece Chapter 1042"`; only the
//! trailing whitespace-delimited token is the numeral. [`trailing_token`]
//! picks it out and [`parse_decimal`] turns it into an ordinal.

use crate::models::UNKNOWN_ORDINAL;

/// Returns the substring after the *last* occurrence of `delimiter`.
///
/// A string without the delimiter counts as already being the trailing
/// token and is returned whole; `None` when the delimiter is the final
/// character and nothing follows it.
pub(crate) fn trailing_token(text: &str, delimiter: char) -> Option<&str> {
    match text.rfind(delimiter) {
        Some(at) => {
            let token = &text[at + delimiter.len_utf8()..];
            if token.is_empty() { None } else { Some(token) }
        }
        None => Some(text),
    }
}

/// Parses a plain decimal numeral (`"1042"`, `"3.14"`) into an `f32`.
///
/// Digits accumulate left to right; a decimal point switches to counting
/// fractional digits, and the result is the accumulated value divided by
/// ten to that count. A second decimal point, or any byte that is neither
/// digit nor point, aborts the scan and yields `0.0` — callers cannot
/// distinguish a malformed numeral from a literal zero.
pub(crate) fn parse_decimal(text: &str) -> f32 {
    let mut value: f64 = 0.0;
    let mut fraction_digits: i32 = 0;
    let mut seen_point = false;
    for byte in text.bytes() {
        match byte {
            b'0'..=b'9' => {
                value = value * 10.0 + f64::from(byte - b'0');
                if seen_point {
                    fraction_digits += 1;
                }
            }
            b'.' if !seen_point => seen_point = true,
            _ => return 0.0,
        }
    }
    (value / 10f64.powi(fraction_digits)) as f32
}

/// The ordinal carried by a chapter card title, [`UNKNOWN_ORDINAL`] when
/// the title ends in the delimiter and carries no trailing token.
pub(crate) fn ordinal_from_title(title: &str) -> f32 {
    trailing_token(title, ' ').map_or(UNKNOWN_ORDINAL, parse_decimal)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("12", 12.0)]
    #[case("0.5", 0.5)]
    #[case("1042", 1042.0)]
    #[case("3.14", 3.14)]
    #[case("7.", 7.0)]
    #[case("", 0.0)]
    fn parses_plain_decimals(#[case] text: &str, #[case] expected: f32) {
        assert_eq!(parse_decimal(text), expected);
    }

    #[rstest]
    #[case("1.2.3")]
    #[case("12a")]
    #[case("Oneshot")]
    #[case("-4")]
    fn malformed_numerals_collapse_to_zero(#[case] text: &str) {
        assert_eq!(parse_decimal(text), 0.0);
    }

    #[rstest]
    #[case("Chapter 1042", Some("1042"))]
    #[case("NoSpaces", Some("NoSpaces"))]
    #[case("TrailingSpace ", None)]
    #[case("a b c", Some("c"))]
    #[case("", Some(""))]
    fn trailing_token_picks_the_last_segment(#[case] text: &str, #[case] expected: Option<&str>) {
        assert_eq!(trailing_token(text, ' '), expected);
    }

    #[rstest]
    #[case("One Piece Chapter 1042", 1042.0)]
    #[case("My Hero Academia Chapter 5.5", 5.5)]
    #[case("Oneshot", 0.0)]
    #[case("Ends with a space ", UNKNOWN_ORDINAL)]
    fn ordinals_come_from_the_trailing_token(#[case] title: &str, #[case] expected: f32) {
        assert_eq!(ordinal_from_title(title), expected);
    }
}

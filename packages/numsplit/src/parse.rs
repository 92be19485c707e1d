use crate::Item;

/// Parses a run of ASCII decimal digits into a number, reading the digits left to right.
///
/// Every byte of `digits` must be a digit. This is not validated and any other byte produces an
/// unspecified value. An empty run parses as zero.
///
/// There is no overflow detection: the value wraps around if it does not fit in a `u32`.
///
/// # Examples
///
/// ```
/// assert_eq!(numsplit::parse_unsigned(b"114514"), 114_514);
/// ```
#[must_use]
pub const fn parse_unsigned(mut digits: &[u8]) -> Item {
    let mut value: Item = 0;

    while let [digit, rest @ ..] = digits {
        value = value
            .wrapping_mul(10)
            .wrapping_add(digit.wrapping_sub(b'0') as Item);
        digits = rest;
    }

    value
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;

    #[test]
    fn parse_smoke_test() {
        assert_eq!(parse_unsigned(b"0"), 0);
        assert_eq!(parse_unsigned(b"7"), 7);
        assert_eq!(parse_unsigned(b"65"), 65);
        assert_eq!(parse_unsigned(b"114514"), 114_514);
        assert_eq!(parse_unsigned(b"4294967295"), u32::MAX);
    }

    #[test]
    fn leading_zeroes_are_ignored() {
        assert_eq!(parse_unsigned(b"007"), 7);
        assert_eq!(parse_unsigned(b"0000"), 0);
    }

    #[test]
    fn empty_run_is_zero() {
        assert_eq!(parse_unsigned(b""), 0);
    }

    #[test]
    fn overflow_wraps() {
        assert_eq!(parse_unsigned(b"4294967296"), 0);
        assert_eq!(parse_unsigned(b"4294967300"), 4);
    }

    #[test]
    fn matches_std_parsing() {
        for value in [1_u32, 10, 99, 100, 12_345, 999_999, 1_000_000_007] {
            let text = value.to_string();
            assert_eq!(parse_unsigned(text.as_bytes()), value);
        }
    }

    #[test]
    fn parse_in_const_context() {
        const PARSED: u32 = parse_unsigned(b"2024");
        assert_eq!(PARSED, 2024);
    }
}

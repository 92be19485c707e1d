/// Returns `true` if `byte` is an ASCII decimal digit (`0` through `9`).
///
/// Every other byte, including the bytes of multi-byte UTF-8 characters, separates numbers.
#[inline]
#[must_use]
pub const fn is_digit(byte: u8) -> bool {
    byte.is_ascii_digit()
}

/// Skips the leading bytes of `bytes` that are not digits.
pub(crate) const fn skip_noise(mut bytes: &[u8]) -> &[u8] {
    while let [first, rest @ ..] = bytes {
        if is_digit(*first) {
            break;
        }

        bytes = rest;
    }

    bytes
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;

    #[test]
    fn digits_are_digits() {
        for byte in b'0'..=b'9' {
            assert!(is_digit(byte));
        }
    }

    #[test]
    fn neighbors_of_digit_range_are_not_digits() {
        assert!(!is_digit(b'/'));
        assert!(!is_digit(b':'));
    }

    #[test]
    fn other_bytes_are_not_digits() {
        let non_digits = (0..=u8::MAX).filter(|byte| !is_digit(*byte)).count();

        assert_eq!(non_digits, 246);
        assert!(!is_digit(b'|'));
        assert!(!is_digit(b' '));
        assert!(!is_digit(0));
        assert!(!is_digit(0xE2));
    }

    #[test]
    fn is_digit_in_const_context() {
        const SEVEN: bool = is_digit(b'7');
        const PIPE: bool = is_digit(b'|');

        const {
            assert!(SEVEN);
            assert!(!PIPE);
        }
    }

    #[test]
    fn skip_noise_stops_at_first_digit() {
        assert_eq!(skip_noise(b"  | (12 | 3"), b"12 | 3");
        assert_eq!(skip_noise(b"42"), b"42");
    }

    #[test]
    fn skip_noise_without_digits_is_empty() {
        assert_eq!(skip_noise(b"| | |"), b"");
        assert_eq!(skip_noise(b""), b"");
    }
}

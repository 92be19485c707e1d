use crate::classify::skip_noise;

/// Counts the numbers that `text` is expected to contain: one more than the number of times
/// `delimiter` occurs in it.
///
/// Text without any delimiter, including empty text, counts as a single number.
///
/// # Examples
///
/// ```
/// assert_eq!(numsplit::count_tokens("1 | 2 | 6", '|'), 3);
/// assert_eq!(numsplit::count_tokens("42", '|'), 1);
/// ```
#[must_use]
pub const fn count_tokens(text: &str, delimiter: char) -> usize {
    count_tokens_in(text.as_bytes(), delimiter)
}

/// Counts the numbers that `text` is expected to contain, ignoring any delimiters that come
/// before the first digit.
///
/// This is the count that [`tokenize_array()`][crate::tokenize_array] and
/// [`tokenize_exact()`][crate::tokenize_exact] compare against the expected count before
/// scanning.
///
/// # Examples
///
/// ```
/// assert_eq!(numsplit::implied_count("| 1 | 2", '|'), 2);
/// assert_eq!(numsplit::count_tokens("| 1 | 2", '|'), 3);
/// ```
#[must_use]
pub const fn implied_count(text: &str, delimiter: char) -> usize {
    count_tokens_in(skip_noise(text.as_bytes()), delimiter)
}

pub(crate) const fn count_tokens_in(mut bytes: &[u8], delimiter: char) -> usize {
    let encoded = encode_utf8(delimiter);
    let (pattern, _) = encoded.split_at(delimiter.len_utf8());

    let mut count: usize = 1;

    while let [_, rest @ ..] = bytes {
        if starts_with(bytes, pattern) {
            count = count.wrapping_add(1);
        }

        bytes = rest;
    }

    count
}

const fn starts_with(mut bytes: &[u8], mut prefix: &[u8]) -> bool {
    while let [expected, prefix_rest @ ..] = prefix {
        match bytes {
            [actual, rest @ ..] if *actual == *expected => {
                bytes = rest;
                prefix = prefix_rest;
            }
            _ => return false,
        }
    }

    true
}

// The UTF-8 bytes of `c`, padded with zeroes to four bytes.
#[expect(
    clippy::cast_possible_truncation,
    reason = "every shifted and masked value fits in the byte it is written to"
)]
const fn encode_utf8(c: char) -> [u8; 4] {
    let code = c as u32;

    match c.len_utf8() {
        1 => [code as u8, 0, 0, 0],
        2 => [
            0xC0 | (code >> 6) as u8,
            0x80 | (code & 0x3F) as u8,
            0,
            0,
        ],
        3 => [
            0xE0 | (code >> 12) as u8,
            0x80 | ((code >> 6) & 0x3F) as u8,
            0x80 | (code & 0x3F) as u8,
            0,
        ],
        _ => [
            0xF0 | (code >> 18) as u8,
            0x80 | ((code >> 12) & 0x3F) as u8,
            0x80 | ((code >> 6) & 0x3F) as u8,
            0x80 | (code & 0x3F) as u8,
        ],
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;

    #[test]
    fn count_smoke_test() {
        assert_eq!(count_tokens("", '|'), 1);
        assert_eq!(count_tokens("1", '|'), 1);
        assert_eq!(count_tokens("1 | 2", '|'), 2);
        assert_eq!(count_tokens("1 | 2 | 6 | 7 | 11 | 52 | 57 | 58 | 65", '|'), 9);
    }

    #[test]
    fn only_the_delimiter_is_counted() {
        assert_eq!(count_tokens("1, 2 | 3; 4", ','), 2);
        assert_eq!(count_tokens("1, 2 | 3; 4", ';'), 2);
        assert_eq!(count_tokens("1, 2 | 3; 4", '/'), 1);
    }

    #[test]
    fn adjacent_delimiters_are_each_counted() {
        assert_eq!(count_tokens("||", '|'), 3);
        assert_eq!(count_tokens("1 || 2", '|'), 3);
    }

    #[test]
    fn count_equals_occurrences_plus_one() {
        for text in ["", "|", "a|b|c", "1|2|3|4|5|6|7|8|9|10", "no delimiters here"] {
            let occurrences = text.matches('|').count();
            assert_eq!(count_tokens(text, '|'), occurrences + 1, "text: {text:?}");
        }
    }

    #[test]
    fn multi_byte_delimiters() {
        assert_eq!(count_tokens("1 · 2 · 3", '·'), 3);
        assert_eq!(count_tokens("1 → 2", '→'), 2);
        assert_eq!(count_tokens("1 🦀 2 🦀 3 🦀 4", '🦀'), 4);
    }

    #[test]
    fn multi_byte_delimiter_does_not_match_other_characters() {
        // '→' and '←' share their first two UTF-8 bytes.
        assert_eq!(count_tokens("1 ← 2", '→'), 1);
    }

    #[test]
    fn encode_matches_std() {
        for c in ['|', 'é', '·', '→', '🦀'] {
            let mut expected = [0_u8; 4];
            let _ = c.encode_utf8(&mut expected);

            assert_eq!(encode_utf8(c), expected, "char: {c:?}");
        }
    }

    #[test]
    fn implied_count_skips_leading_noise() {
        assert_eq!(implied_count("| 1 | 2", '|'), 2);
        assert_eq!(implied_count("||| 1", '|'), 1);
        assert_eq!(implied_count("1 | 2", '|'), 2);
    }

    #[test]
    fn implied_count_without_digits_is_one() {
        assert_eq!(implied_count("| | |", '|'), 1);
    }

    #[test]
    fn count_in_const_context() {
        const COUNT: usize = count_tokens("1 | 2 | 6", '|');
        assert_eq!(COUNT, 3);
    }
}

use tracing::{debug, trace};

use crate::count::count_tokens_in;
use crate::scanner::Scanner;
use crate::{Item, implied_count};

/// Splits `text` into exactly `N` numbers, in the order they appear.
///
/// This is a `const fn`, so it can run at compile time with `N` derived from the text itself
/// via [`implied_count()`][crate::implied_count]. The [`numbers!`][crate::numbers!] macro does
/// exactly that.
///
/// See [package-level documentation][crate] for the format.
///
/// # Errors
///
/// * [`Error::SplitCountMismatch`][crate::Error::SplitCountMismatch] if the delimiters after the
///   leading noise do not imply `N` numbers. Nothing is scanned in this case.
/// * [`Error::ParsedCountMismatch`][crate::Error::ParsedCountMismatch] if the text does not
///   contain exactly `N` digit runs. Extra runs are reported, never silently truncated.
///
/// # Examples
///
/// ```
/// const TEXT: &str = "1 | 2 | 6";
///
/// const NUMBERS: [u32; 3] = match numsplit::tokenize_array::<3>(TEXT, '|') {
///     Ok(numbers) => numbers,
///     Err(error) => error.fail(),
/// };
///
/// assert_eq!(NUMBERS, [1, 2, 6]);
/// assert!(numsplit::tokenize_array::<2>(TEXT, '|').is_err());
/// ```
///
/// Evaluated in a constant, a count mismatch is a compile-time error:
///
/// ```compile_fail
/// // One delimiter implies two numbers, not three.
/// const NUMBERS: [u32; 3] = match numsplit::tokenize_array::<3>("1 | 2", '|') {
///     Ok(numbers) => numbers,
///     Err(error) => error.fail(),
/// };
/// # let _ = NUMBERS;
/// ```
#[expect(
    clippy::arithmetic_side_effects,
    clippy::indexing_slicing,
    reason = "slots are only written below N and there are fewer runs than bytes in the text"
)]
pub const fn tokenize_array<const N: usize>(
    text: &str,
    delimiter: char,
) -> crate::Result<[Item; N]> {
    let mut scanner = Scanner::new(text);

    let counted = count_tokens_in(scanner.remaining(), delimiter);
    if counted != N {
        return Err(crate::Error::SplitCountMismatch {
            expected: N,
            counted,
        });
    }

    let mut numbers = [0; N];
    let mut parsed: usize = 0;

    loop {
        match scanner.next_run() {
            Ok(Some(run)) => {
                if parsed < N {
                    numbers[parsed] = run.value();
                }

                parsed += 1;
            }
            Ok(None) => break,
            Err(error) => return Err(error),
        }
    }

    if parsed != N {
        return Err(crate::Error::ParsedCountMismatch {
            expected: N,
            parsed,
        });
    }

    Ok(numbers)
}

/// Splits `text` into all the numbers it contains, in the order they appear.
///
/// There is no expectation on the number of numbers; use [`validate_count()`] or
/// [`tokenize_exact()`] for that. Text without digits produces an empty result.
///
/// See [package-level documentation][crate] for the format.
///
/// # Examples
///
/// ```
/// assert_eq!(numsplit::tokenize("(1 | 2) + 6").unwrap(), vec![1, 2, 6]);
/// assert!(numsplit::tokenize("").unwrap().is_empty());
/// ```
pub fn tokenize(text: &str) -> crate::Result<Vec<Item>> {
    let mut scanner = Scanner::new(text);
    let mut numbers = Vec::new();

    while let Some(run) = scanner.next_run()? {
        let value = run.value();
        trace!(range = ?run.range(), value, "closed digit run");

        numbers.push(value);
    }

    Ok(numbers)
}

/// Splits `text` into exactly `expected` numbers, in the order they appear.
///
/// This is the runtime counterpart of [`tokenize_array()`], performing the same checks.
///
/// # Errors
///
/// See [`tokenize_array()`].
///
/// # Examples
///
/// ```
/// use numsplit::{Error, tokenize_exact};
///
/// assert_eq!(tokenize_exact("1 | 2 | 6", '|', 3).unwrap(), vec![1, 2, 6]);
///
/// assert_eq!(
///     tokenize_exact("1 | 2 | 6", '|', 2).unwrap_err(),
///     Error::SplitCountMismatch {
///         expected: 2,
///         counted: 3
///     }
/// );
/// ```
pub fn tokenize_exact(text: &str, delimiter: char, expected: usize) -> crate::Result<Vec<Item>> {
    let counted = implied_count(text, delimiter);

    if counted != expected {
        debug!(expected, counted, "delimiters imply an unexpected number of numbers");

        return Err(crate::Error::SplitCountMismatch { expected, counted });
    }

    let numbers = tokenize(text)?;
    validate_count(&numbers, expected)?;

    Ok(numbers)
}

/// Verifies that exactly `expected` numbers were produced.
///
/// # Errors
///
/// [`Error::ParsedCountMismatch`][crate::Error::ParsedCountMismatch] if the count differs.
///
/// # Examples
///
/// ```
/// let numbers = numsplit::tokenize("1 | 2 | 6").unwrap();
///
/// numsplit::validate_count(&numbers, 3).unwrap();
/// numsplit::validate_count(&numbers, 4).unwrap_err();
/// ```
pub fn validate_count(numbers: &[Item], expected: usize) -> crate::Result<()> {
    if numbers.len() == expected {
        return Ok(());
    }

    debug!(
        expected,
        parsed = numbers.len(),
        "text contains an unexpected number of numbers"
    );

    Err(crate::Error::ParsedCountMismatch {
        expected,
        parsed: numbers.len(),
    })
}

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Splits lists of unsigned integers embedded in source text into ordered sequences of numbers.
//!
//! The typical input is a stringified macro argument such as `1 | 2 | 6 | 7`, where the numbers
//! are separated by a delimiter and arbitrary formatting. The core of the package is made of
//! `const fn`s, so the whole conversion can happen at compile time:
//!
//! ```
//! const KEYS: [u32; 4] = numsplit::numbers!(1 | 2 | 6 | 7);
//!
//! assert_eq!(KEYS, [1, 2, 6, 7]);
//! ```
//!
//! The same logic is available at runtime, either with a fixed expected count or without one:
//!
//! ```
//! let keys = numsplit::tokenize("1 | 2 | 6 | 7 | 11").unwrap();
//! assert_eq!(keys, vec![1, 2, 6, 7, 11]);
//!
//! let checked = numsplit::tokenize_exact("1 | 2 | 6", '|', 3).unwrap();
//! assert_eq!(checked, vec![1, 2, 6]);
//!
//! numsplit::tokenize_exact("1 | 2 | 6", '|', 2).unwrap_err();
//! ```
//!
//! # Format
//!
//! A number is a maximal run of ASCII decimal digits. Every other character separates numbers,
//! including the nominal delimiter, whitespace and operators. The delimiter only matters for
//! predicting how many numbers the text contains: that prediction is `1 + occurrences`, counted
//! after any non-digit prefix of the text.
//!
//! Numbers are of type `u32` and are accumulated without overflow checks (wrapping on overflow).
//!
//! # Validation
//!
//! Functions that take an expected count verify two things and fail with an [`Error`] otherwise:
//!
//! * the delimiter-implied count matches the expected count, before scanning starts.
//! * the number of digit runs actually found matches the expected count, after scanning.

mod classify;
mod count;
mod error;
mod parse;
mod scanner;
mod tokenize;
mod tokenizer;

pub use classify::*;
pub use count::*;
pub use error::*;
pub use parse::*;
pub use tokenize::*;
pub use tokenizer::*;

pub(crate) type Item = u32;

/// The delimiter assumed by [`numbers!`] and [`Tokenizer`] when none is specified.
pub const DEFAULT_DELIMITER: char = '|';

/// Converts a delimited list of numbers written as macro tokens into a `[u32; N]` constant.
///
/// The tokens are stringified and split at compile time; the array length is derived from the
/// number of delimiters. Any mismatch between the delimiters and the numbers found is a
/// compile-time error.
///
/// The default delimiter is `|`. Another one can be chosen with a `delimiter = ...;` prefix.
///
/// ```
/// use numsplit::numbers;
///
/// let little_finger = numbers!(1 | 2 | 6 | 7 | 11 | 52 | 57 | 58 | 65);
/// assert_eq!(little_finger, [1, 2, 6, 7, 11, 52, 57, 58, 65]);
///
/// let commas = numbers!(delimiter = ','; 10, 20, 30);
/// assert_eq!(commas, [10, 20, 30]);
/// ```
///
/// ```compile_fail
/// // Two delimiters imply three numbers but only two are present.
/// let _ = numsplit::numbers!(1 | 2 | x);
/// ```
#[macro_export]
macro_rules! numbers {
    (delimiter = $delimiter:expr; $($tokens:tt)+) => {
        const {
            const TEXT: &str = ::core::stringify!($($tokens)+);
            const COUNT: usize = $crate::implied_count(TEXT, $delimiter);

            match $crate::tokenize_array::<COUNT>(TEXT, $delimiter) {
                ::core::result::Result::Ok(numbers) => numbers,
                ::core::result::Result::Err(error) => error.fail(),
            }
        }
    };
    ($($tokens:tt)+) => {
        $crate::numbers!(delimiter = $crate::DEFAULT_DELIMITER; $($tokens)+)
    };
}

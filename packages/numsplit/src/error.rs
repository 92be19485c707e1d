use thiserror::Error;

/// Errors that can occur when splitting text into a validated number of numbers.
#[derive(Clone, Copy, Debug, Eq, Error, PartialEq)]
#[non_exhaustive]
pub enum Error {
    /// The delimiters in the text imply a different number of numbers than the caller expected.
    ///
    /// This is detected before the text is scanned for numbers.
    #[error("wrong split count: expected {expected} numbers but the delimiters imply {counted}")]
    SplitCountMismatch {
        /// The number of numbers the caller expected.
        expected: usize,

        /// The number of numbers implied by the delimiters in the text.
        counted: usize,
    },

    /// A digit run was closed without a recorded start position.
    ///
    /// This indicates a defect in the tokenizer and is never expected to occur.
    #[error("unexpected state: digit run closed at byte {position} without a recorded start")]
    MissingRunStart {
        /// Byte offset in the text at which the digit run was being closed.
        position: usize,
    },

    /// The number of digit runs found in the text differs from the number the caller expected.
    #[error("error parsing text: expected {expected} numbers but found {parsed}")]
    ParsedCountMismatch {
        /// The number of numbers the caller expected.
        expected: usize,

        /// The number of digit runs actually found in the text.
        parsed: usize,
    },
}

impl Error {
    /// Aborts with a message that identifies the kind of error.
    ///
    /// This is meant for constant evaluation, where it turns the error into a compile-time error.
    /// The message cannot include the error details because constant evaluation can only panic
    /// with fixed messages.
    ///
    /// # Panics
    ///
    /// Always.
    #[cfg_attr(test, mutants::skip)] // Replacing a panic with another panic is not observable.
    pub const fn fail(self) -> ! {
        match self {
            Self::SplitCountMismatch { .. } => {
                panic!("wrong split count: the delimiters imply a different number of numbers")
            }
            Self::MissingRunStart { .. } => {
                panic!("unexpected state: digit run closed without a recorded start")
            }
            Self::ParsedCountMismatch { .. } => {
                panic!("error parsing text: the number of numbers found differs from the expected")
            }
        }
    }
}

/// A specialized `Result` type for numsplit operations, returning the crate's
/// [`Error`] type as the error value.
pub(crate) type Result<T> = std::result::Result<T, Error>;

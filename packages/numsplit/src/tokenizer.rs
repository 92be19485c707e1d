use crate::{DEFAULT_DELIMITER, Item, implied_count, tokenize_exact};

/// A reusable, configured tokenizer that validates the number of numbers in each text.
///
/// Unless a fixed expected count is configured, each text is expected to contain as many
/// numbers as its delimiters imply.
///
/// # Examples
///
/// ```
/// use numsplit::Tokenizer;
///
/// let tokenizer = Tokenizer::new();
/// assert_eq!(tokenizer.tokenize("1 | 2 | 6").unwrap(), vec![1, 2, 6]);
///
/// let tokenizer = Tokenizer::builder()
///     .delimiter(',')
///     .expected_count(2)
///     .build();
///
/// assert_eq!(tokenizer.tokenize("10, 20").unwrap(), vec![10, 20]);
/// tokenizer.tokenize("10, 20, 30").unwrap_err();
/// ```
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Tokenizer {
    delimiter: char,
    expected_count: Option<usize>,
}

impl Tokenizer {
    /// Creates a tokenizer with the default configuration: `|` as the delimiter and the
    /// expected count derived from each text.
    #[must_use]
    pub fn new() -> Self {
        Self::builder().build()
    }

    /// Starts building a tokenizer with a custom configuration.
    pub fn builder() -> TokenizerBuilder {
        TokenizerBuilder::new()
    }

    /// The delimiter that determines how many numbers a text is expected to contain.
    #[must_use]
    pub fn delimiter(&self) -> char {
        self.delimiter
    }

    /// The fixed number of numbers every text must contain, if one was configured.
    #[must_use]
    pub fn expected_count(&self) -> Option<usize> {
        self.expected_count
    }

    /// The number of numbers that `text` must contain to be accepted by this tokenizer.
    #[must_use]
    pub fn required_count(&self, text: &str) -> usize {
        self.expected_count.unwrap_or_else(|| implied_count(text, self.delimiter))
    }

    /// Splits `text` into numbers, verifying that it contains the
    /// [required count][Self::required_count].
    ///
    /// # Errors
    ///
    /// See [`tokenize_array()`][crate::tokenize_array].
    pub fn tokenize(&self, text: &str) -> crate::Result<Vec<Item>> {
        tokenize_exact(text, self.delimiter, self.required_count(text))
    }
}

impl Default for Tokenizer {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for creating an instance of [`Tokenizer`].
///
/// # Examples
///
/// ```
/// use numsplit::Tokenizer;
///
/// // Default tokenizer.
/// let tokenizer = Tokenizer::builder().build();
///
/// // Comma-separated lists of exactly three numbers.
/// let tokenizer = Tokenizer::builder()
///     .delimiter(',')
///     .expected_count(3)
///     .build();
/// ```
#[derive(Debug)]
#[must_use]
pub struct TokenizerBuilder {
    delimiter: char,
    expected_count: Option<usize>,
}

impl TokenizerBuilder {
    pub(crate) fn new() -> Self {
        Self {
            delimiter: DEFAULT_DELIMITER,
            expected_count: None,
        }
    }

    /// Sets the delimiter that determines how many numbers a text is expected to contain.
    ///
    /// Defaults to `|`. Note that every non-digit character separates numbers, whatever the
    /// delimiter is.
    pub fn delimiter(mut self, delimiter: char) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Requires every text to contain exactly `count` numbers, instead of the number implied by
    /// the delimiters of each text.
    ///
    /// The delimiters must still imply the same count.
    pub fn expected_count(mut self, count: usize) -> Self {
        self.expected_count = Some(count);
        self
    }

    /// Builds the tokenizer with the specified configuration.
    #[must_use]
    pub fn build(self) -> Tokenizer {
        Tokenizer {
            delimiter: self.delimiter,
            expected_count: self.expected_count,
        }
    }
}

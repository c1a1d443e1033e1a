//! Error types for the string calculator
//!
//! `add` fails synchronously with one of two kinds: a generic invalid-argument
//! error for malformed input, and a negative-argument error that always carries
//! every offending literal found in the input.

use thiserror::Error;

/// Message used when two delimiters meet or the input ends with a delimiter.
pub const EMPTY_ARGUMENT_MESSAGE: &str = "Empty argument is not allowed.";

/// Message used when a multi-character delimiter is not in `[...]` form.
pub const LONG_DELIMITER_FORMAT_MESSAGE: &str = "Incorrect long delimiter format.";

/// Error type for calculator operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CalculatorError {
    /// Malformed input: empty token or bad delimiter declaration
    #[error("{message}")]
    InvalidArgument { message: String },

    /// One or more negative numbers, in order of appearance
    #[error("Negatives not allowed: {}", negatives.join(", "))]
    NegativeArgument { negatives: Vec<String> },
}

impl CalculatorError {
    /// Create an invalid argument error
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument { message: message.into() }
    }

    /// Create a negative argument error from the offending literals
    pub fn negative_argument(negatives: Vec<String>) -> Self {
        Self::NegativeArgument { negatives }
    }

    /// Create the error raised for an empty token
    pub fn empty_argument() -> Self {
        Self::invalid_argument(EMPTY_ARGUMENT_MESSAGE)
    }

    /// Create the error raised for a malformed long delimiter
    pub fn long_delimiter_format() -> Self {
        Self::invalid_argument(LONG_DELIMITER_FORMAT_MESSAGE)
    }

    /// Negative arguments are a specialization of invalid arguments, so this
    /// holds for every variant.
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, Self::InvalidArgument { .. } | Self::NegativeArgument { .. })
    }

    pub fn is_negative_argument(&self) -> bool {
        matches!(self, Self::NegativeArgument { .. })
    }

    /// The offending literals for a negative argument error, empty otherwise
    pub fn negatives(&self) -> &[String] {
        match self {
            Self::NegativeArgument { negatives } => negatives,
            Self::InvalidArgument { .. } => &[],
        }
    }
}

/// Result type alias for calculator operations
pub type CalculatorResult<T> = Result<T, CalculatorError>;

//! Delimiter handling
//!
//! An input may start with a header of the form `//<declaration>\n` declaring
//! extra delimiters. A one-character declaration is taken literally; longer
//! declarations must be bracketed (`[***]`, `[*][%]`). Declared delimiters
//! are appended to the owning calculator's set and stay there for later calls.

use crate::error::{CalculatorError, CalculatorResult};

/// Canonical separator every delimiter is rewritten to before splitting
pub const MAIN_DELIMITER: &str = ",";

/// Delimiter every calculator recognizes alongside the main one
pub const DEFAULT_DELIMITER: &str = "\n";

/// Prefix announcing a delimiter declaration
pub const HEADER_MARKER: &str = "//";

const HEADER_TERMINATOR: char = '\n';
const OPEN_BRACKET: char = '[';
const CLOSE_BRACKET: char = ']';

/// Ordered, append-only collection of recognized delimiters.
///
/// Always holds the default delimiter in first position. Entries are never
/// removed or deduplicated; replacement during normalization follows
/// insertion order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DelimiterSet {
    delimiters: Vec<String>,
}

impl Default for DelimiterSet {
    fn default() -> Self {
        Self::new(DEFAULT_DELIMITER)
    }
}

impl DelimiterSet {
    pub fn new(default_delimiter: impl Into<String>) -> Self {
        Self { delimiters: vec![default_delimiter.into()] }
    }

    pub fn push(&mut self, delimiter: impl Into<String>) {
        self.delimiters.push(delimiter.into());
    }

    pub fn as_slice(&self) -> &[String] {
        &self.delimiters
    }

    pub fn len(&self) -> usize {
        self.delimiters.len()
    }

    /// False for any set built through [`DelimiterSet::new`], which seeds the
    /// default delimiter; entries cannot be removed afterwards.
    pub fn is_empty(&self) -> bool {
        self.delimiters.is_empty()
    }

    /// Rewrites every known delimiter to [`MAIN_DELIMITER`], in set order.
    ///
    /// Empty delimiters (from `//\n` or `[]`) match nothing and are skipped.
    pub fn normalize(&self, input: &str) -> String {
        self.delimiters
            .iter()
            .filter(|delimiter| !delimiter.is_empty())
            .fold(input.to_string(), |acc, delimiter| acc.replace(delimiter.as_str(), MAIN_DELIMITER))
    }
}

impl Extend<String> for DelimiterSet {
    fn extend<T: IntoIterator<Item = String>>(&mut self, iter: T) {
        self.delimiters.extend(iter);
    }
}

/// Splits a leading `//<declaration>\n` header off the input.
///
/// Returns the declaration (between the marker and the first newline) and
/// the remaining input, or `None` when the input carries no header. A marker
/// with no newline anywhere after it is not a header.
pub fn extract_header(input: &str) -> Option<(&str, &str)> {
    if !input.starts_with(HEADER_MARKER) {
        return None;
    }
    let newline = input.find(HEADER_TERMINATOR)?;
    let declaration = &input[HEADER_MARKER.len()..newline];
    let rest = &input[newline + HEADER_TERMINATOR.len_utf8()..];
    Some((declaration, rest))
}

/// Interprets a delimiter declaration taken from a header.
///
/// Zero or one character is used as-is. Anything longer must start with `[`
/// and end with `]`; otherwise the declaration is rejected.
pub fn parse_declaration(declaration: &str) -> CalculatorResult<Vec<String>> {
    if declaration.chars().count() <= 1 {
        return Ok(vec![declaration.to_string()]);
    }
    if !is_long_format(declaration) {
        return Err(CalculatorError::long_delimiter_format());
    }
    Ok(split_bracketed(declaration))
}

fn is_long_format(declaration: &str) -> bool {
    declaration.starts_with(OPEN_BRACKET) && declaration.ends_with(CLOSE_BRACKET)
}

/// Splits `[a][bc]` into `a` and `bc`.
///
/// `[` is dropped wherever it appears and every `]` closes the characters
/// gathered since the previous `]`, so `[a]b[c]` yields `a` and `bc`.
fn split_bracketed(declaration: &str) -> Vec<String> {
    let mut delimiters = Vec::new();
    let mut current = String::new();

    for ch in declaration.chars() {
        match ch {
            OPEN_BRACKET => continue,
            CLOSE_BRACKET => delimiters.push(std::mem::take(&mut current)),
            other => current.push(other),
        }
    }
    delimiters
}

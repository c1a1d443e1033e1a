use tracing::{debug, instrument, warn};

use crate::collaborator::{Logger, Notifier};
use crate::config::{CalculatorConfig, ConfigError};
use crate::delimiter::{self, DelimiterSet};
use crate::error::CalculatorResult;
use crate::number;

/// Prefix of the message sent to the notifier when logging fails
pub const LOGGING_FAILED_PREFIX: &str = "Logging has failed: ";

/// Sums integers encoded in a delimited string.
///
/// Delimiters declared through a `//<declaration>\n` header are remembered by
/// the instance and apply to every later call. Not internally synchronized;
/// `add` takes `&mut self`.
pub struct Calculator {
    delimiters: DelimiterSet,
    maximum_number: i64,
    logger: Option<Box<dyn Logger>>,
    notifier: Option<Box<dyn Notifier>>,
}

impl Default for Calculator {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for Calculator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Calculator")
            .field("delimiters", &self.delimiters)
            .field("maximum_number", &self.maximum_number)
            .field("has_logger", &self.logger.is_some())
            .field("has_notifier", &self.notifier.is_some())
            .finish()
    }
}

impl Calculator {
    pub fn new() -> Self {
        Self::from_valid_config(CalculatorConfig::default())
    }

    /// Builds a calculator from `config`, rejecting settings that
    /// [`CalculatorConfig::validate`] does not accept.
    pub fn with_config(config: CalculatorConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::from_valid_config(config))
    }

    fn from_valid_config(config: CalculatorConfig) -> Self {
        Self {
            delimiters: DelimiterSet::new(config.default_delimiter),
            maximum_number: config.maximum_number,
            logger: None,
            notifier: None,
        }
    }

    pub fn with_logger(mut self, logger: Box<dyn Logger>) -> Self {
        self.logger = Some(logger);
        self
    }

    pub fn with_notifier(mut self, notifier: Box<dyn Notifier>) -> Self {
        self.notifier = Some(notifier);
        self
    }

    /// Delimiters currently recognized, in the order they were added
    pub fn delimiters(&self) -> &[String] {
        self.delimiters.as_slice()
    }

    pub fn maximum_number(&self) -> i64 {
        self.maximum_number
    }

    /// Adds the numbers in `input`.
    ///
    /// Empty input sums to 0 without any parsing. Numbers above the configured
    /// maximum are skipped. Fails on empty tokens, on a malformed delimiter
    /// header, and on negative numbers (all of them reported at once).
    #[instrument(skip(self), level = "debug")]
    pub fn add(&mut self, input: &str) -> CalculatorResult<i64> {
        if input.is_empty() {
            return Ok(0);
        }

        let input = self.handle_custom_delimiter(input)?;
        let normalized = self.delimiters.normalize(input);
        let tokens = number::tokenize(&normalized);
        number::validate(&tokens)?;

        let sum = number::sum_within(&tokens, self.maximum_number);
        debug!(sum, token_count = tokens.len(), "Computed sum");

        self.log(sum);
        Ok(sum)
    }

    /// Registers delimiters declared in a header and returns the input
    /// without it.
    fn handle_custom_delimiter<'a>(&mut self, input: &'a str) -> CalculatorResult<&'a str> {
        let Some((declaration, rest)) = delimiter::extract_header(input) else {
            return Ok(input);
        };

        let declared = delimiter::parse_declaration(declaration)?;
        debug!(?declared, "Registering custom delimiters");
        self.delimiters.extend(declared);
        Ok(rest)
    }

    fn log(&self, sum: i64) {
        let Some(logger) = &self.logger else {
            return;
        };

        if let Err(err) = logger.log(&sum.to_string()) {
            warn!(error = %err, "Logging calculation result failed");
            if let Some(notifier) = &self.notifier {
                notifier.notify(&format!("{LOGGING_FAILED_PREFIX}{err}"));
            }
        }
    }
}

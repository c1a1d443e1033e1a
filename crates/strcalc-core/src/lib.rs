//! String calculator core.
//!
//! This crate provides the [`Calculator`], which sums the integers encoded in a
//! delimited string, together with the [`Logger`] and [`Notifier`] traits used
//! to attach optional side effects to a calculation.
//!
//! ```
//! use strcalc_core::Calculator;
//!
//! let mut calculator = Calculator::new();
//! assert_eq!(calculator.add("//[*][%]\n1*2%3").unwrap(), 6);
//! // Declared delimiters stay registered on the instance.
//! assert_eq!(calculator.add("4*5").unwrap(), 9);
//! ```

pub mod calculator;
pub mod collaborator;
pub mod config;
pub mod delimiter;
pub mod error;
pub mod number;

pub use calculator::{Calculator, LOGGING_FAILED_PREFIX};
pub use collaborator::{Logger, Notifier};
pub use config::{CalculatorConfig, ConfigError};
pub use delimiter::DelimiterSet;
pub use error::{CalculatorError, CalculatorResult};

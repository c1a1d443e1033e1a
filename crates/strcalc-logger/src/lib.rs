//! Collaborators for the string calculator.
//!
//! [`FileLogger`] appends calculation results to plain-text log files, one
//! line per result. [`TracingNotifier`] reports logging failures as `tracing`
//! events.

pub mod file;
pub mod notifier;

pub use file::{FileLogger, FileLoggerConfig};
pub use notifier::TracingNotifier;

//! Optional side-effect collaborators attached to a calculator.

/// Receives the decimal form of every successful sum.
///
/// A failing logger never fails the calculation; the error is handed to the
/// [`Notifier`] instead, if one is attached.
#[cfg_attr(test, mockall::automock)]
pub trait Logger: Send + Sync {
    fn log(&self, message: &str) -> anyhow::Result<()>;
}

/// Told about logging failures.
#[cfg_attr(test, mockall::automock)]
pub trait Notifier: Send + Sync {
    fn notify(&self, message: &str);
}

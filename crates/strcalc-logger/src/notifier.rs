use strcalc_core::Notifier;
use tracing::error;

/// Notifier that emits each notification as an error-level `tracing` event.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingNotifier;

impl TracingNotifier {
    pub fn new() -> Self {
        Self
    }
}

impl Notifier for TracingNotifier {
    fn notify(&self, message: &str) {
        error!(notification = %message, "Calculator notification");
    }
}

//! Terminal notifications.

use foodapp_application::ports::NotificationSink;

/// Writes notifications to stderr, keeping stdout for command output.
#[derive(Debug, Default, Clone, Copy)]
pub struct ConsoleSink;

impl NotificationSink for ConsoleSink {
    fn error(&self, message: &str) {
        eprintln!("✖ {message}");
    }

    fn success(&self, message: &str) {
        eprintln!("✔ {message}");
    }
}

//! Notification port

/// Port for showing messages to the user.
pub trait NotificationSink: Send + Sync {
    /// Shows an error message.
    fn error(&self, message: &str);

    /// Shows a success message.
    fn success(&self, message: &str);
}

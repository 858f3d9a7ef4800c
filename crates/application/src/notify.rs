//! User-facing error notifications.

use std::sync::Arc;

use parking_lot::Mutex;

use crate::error::ApiError;
use crate::ports::{Clock, NotificationSink};

/// Window in which a repeated message is suppressed.
pub const DEDUPE_WINDOW_MS: i64 = 1_000;

/// Shows API errors, skipping 401s and rapid repeats.
pub struct Notifier {
    sink: Arc<dyn NotificationSink>,
    clock: Arc<dyn Clock>,
    last: Mutex<Option<(String, i64)>>,
}

impl Notifier {
    /// Creates a notifier writing to `sink`.
    #[must_use]
    pub fn new(sink: Arc<dyn NotificationSink>, clock: Arc<dyn Clock>) -> Self {
        Self {
            sink,
            clock,
            last: Mutex::new(None),
        }
    }

    /// Shows `error` unless it is a 401 (the login redirect already handles
    /// those) or the same message was shown less than a second ago.
    ///
    /// Returns true if the message was shown.
    pub fn notify_error(&self, error: &ApiError) -> bool {
        if error.is_unauthorized() {
            return false;
        }
        self.show(error)
    }

    /// Shows `error` even when it is a 401.
    ///
    /// On the login screen a 401 means rejected credentials and there is no
    /// redirect to explain it.
    pub fn notify_login_error(&self, error: &ApiError) -> bool {
        self.show(error)
    }

    /// Shows a success message. Not deduplicated.
    pub fn notify_success(&self, message: &str) {
        self.sink.success(message);
    }

    fn show(&self, error: &ApiError) -> bool {
        let message = error.message();
        if message.is_empty() || !self.should_show(&message) {
            return false;
        }
        self.sink.error(&message);
        true
    }

    fn should_show(&self, message: &str) -> bool {
        let now = self.clock.now_millis();
        let mut last = self.last.lock();
        let repeated = last
            .as_ref()
            .is_some_and(|(previous, at)| previous == message && now - at < DEDUPE_WINDOW_MS);
        if repeated {
            return false;
        }
        *last = Some((message.to_string(), now));
        true
    }
}

impl std::fmt::Debug for Notifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Notifier").finish_non_exhaustive()
    }
}

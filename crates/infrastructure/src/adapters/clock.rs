//! Wall-clock time for token expiry and notification dedupe.

use chrono::{DateTime, Utc};
use foodapp_application::ports::Clock;

/// Reads the operating system clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl SystemClock {
    /// Creates a system clock.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }

    fn now_millis(&self) -> i64 {
        Utc::now().timestamp_millis()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // 2024-01-01T00:00:00Z
    const EARLIER: i64 = 1_704_067_200_000;

    #[test]
    fn test_millis_follow_wall_clock() {
        let clock = SystemClock::new();
        let first = clock.now_millis();
        let second = clock.now().timestamp_millis();

        assert!(first > EARLIER);
        assert!(second >= first);
    }
}

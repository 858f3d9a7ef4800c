//! Navigator for a command-line session.
//!
//! There is no address bar; the "current location" is the admin page the
//! running command corresponds to. A redirect moves the session there and is
//! kept until the caller takes it, so it can tell the user to log in again.

use foodapp_application::ports::Navigator;
use foodapp_domain::{HOME_PATH, Location};
use parking_lot::Mutex;
use tracing::{info, warn};

#[derive(Debug, Default)]
struct NavState {
    current: Location,
    pending: Option<String>,
}

/// Navigator holding the session's current location in memory.
#[derive(Debug)]
pub struct SessionNavigator {
    state: Mutex<NavState>,
}

impl SessionNavigator {
    /// Creates a navigator positioned on the home page.
    #[must_use]
    pub fn new() -> Self {
        Self::at(Location::new(HOME_PATH))
    }

    /// Creates a navigator positioned on `location`.
    #[must_use]
    pub fn at(location: Location) -> Self {
        Self {
            state: Mutex::new(NavState {
                current: location,
                pending: None,
            }),
        }
    }

    /// Moves to `location` without recording a redirect.
    pub fn visit(&self, location: Location) {
        self.state.lock().current = location;
    }

    /// Takes the last redirect target, if any.
    #[must_use]
    pub fn take_redirect(&self) -> Option<String> {
        self.state.lock().pending.take()
    }
}

impl Default for SessionNavigator {
    fn default() -> Self {
        Self::new()
    }
}

impl Navigator for SessionNavigator {
    fn current_location(&self) -> Location {
        self.state.lock().current.clone()
    }

    fn redirect(&self, target: &str) {
        let mut state = self.state.lock();
        match Location::parse(target) {
            Ok(location) => state.current = location,
            Err(e) => warn!(target, error = %e, "Redirect target is not a path"),
        }
        info!(target, "Redirecting");
        state.pending = Some(target.to_string());
    }
}

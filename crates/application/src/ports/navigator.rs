//! Navigator port
//!
//! The front-end's notion of "where the user is". The 401 handler reads the
//! current location to remember it and sends the user to the login page.

use foodapp_domain::Location;

/// Port for reading and changing the current location.
pub trait Navigator: Send + Sync {
    /// The location the user is currently on.
    fn current_location(&self) -> Location;

    /// Sends the user to `target`, a full path such as
    /// `/login?redirect=%2Facl%2Faccounts`.
    fn redirect(&self, target: &str);
}

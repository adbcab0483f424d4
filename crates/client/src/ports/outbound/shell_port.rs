//! Shell Port - user-facing side effects
//!
//! The editors and the browser never render anything themselves; every
//! blocking alert, confirmation dialog, and navigation goes through this
//! port so the state machines stay headless and testable.

use crate::routes::Route;

/// Port for the hosting shell (browser page, desktop window, test harness).
#[cfg_attr(any(test, feature = "testing"), mockall::automock)]
pub trait ShellPort: Send + Sync {
    /// Show a blocking alert to the user.
    fn alert(&self, message: &str);

    /// Ask the user to confirm an irreversible action.
    fn confirm(&self, message: &str) -> bool;

    /// Leave the current page.
    fn navigate(&self, route: Route);
}

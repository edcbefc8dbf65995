//! Navigator port — the "reflect new server state" side effects.

/// Changes what the user is looking at after a successful command.
pub trait Navigator {
    /// Replace the current view with `location`.
    fn navigate(&self, location: &str);

    /// Reload the current view in place.
    fn reload(&self);
}

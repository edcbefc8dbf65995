//! Modal controller — single point of control for a page's confirmation dialog.

use chainwatch_domain::command::Command;
use chainwatch_domain::modal::ClickTarget;

use crate::ports::ModalStore;

/// Capability surface over the page's [`ModalState`](chainwatch_domain::modal::ModalState).
#[derive(Debug, Clone)]
pub struct ModalController<S> {
    store: S,
}

impl<S: ModalStore> ModalController<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Show the dialog armed with `command`.
    ///
    /// A confirmation that is still pending is discarded, not queued.
    pub fn show(&self, command: Command) {
        self.store.update(|modal| {
            if let Some(previous) = modal.bound() {
                tracing::debug!(
                    %previous,
                    replacement = %command,
                    "replacing pending confirmation"
                );
            }
            modal.show(command);
        });
    }

    /// Hide and disarm the dialog. Safe to call when already hidden.
    pub fn hide(&self) {
        self.store.update(|modal| modal.hide());
    }

    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.store.read(|modal| modal.is_visible())
    }

    /// The command currently armed on the affirmative control.
    #[must_use]
    pub fn bound(&self) -> Option<Command> {
        self.store.read(|modal| modal.bound().cloned())
    }

    /// Press the affirmative control. The dialog stays open; whoever runs the
    /// returned command is responsible for hiding it.
    #[must_use]
    pub fn confirm(&self) -> Option<Command> {
        self.store.read(|modal| modal.confirm())
    }

    /// Route a page-wide click. Returns whether the dialog was dismissed.
    pub fn on_click(&self, target: ClickTarget) -> bool {
        let mut dismissed = false;
        self.store.update(|modal| dismissed = modal.on_click(target));
        dismissed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chainwatch_domain::command::CommandRequest;
    use chainwatch_domain::modal::ModalState;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn controller() -> ModalController<Rc<RefCell<ModalState>>> {
        ModalController::new(Rc::new(RefCell::new(ModalState::new())))
    }

    fn reload(action: &str) -> Command {
        Command::reload(CommandRequest::new(action).unwrap())
    }

    #[test]
    fn should_bind_latest_command_when_shown_twice() {
        let modal = controller();
        modal.show(reload("cb1"));
        modal.show(reload("cb2"));

        assert!(modal.is_visible());
        assert_eq!(modal.bound(), Some(reload("cb2")));
    }

    #[test]
    fn should_share_state_between_clones() {
        let modal = controller();
        let other = modal.clone();

        modal.show(reload("resetDB"));

        assert!(other.is_visible());
        other.hide();
        assert!(!modal.is_visible());
    }

    #[test]
    fn should_leave_dialog_open_when_confirmed() {
        let modal = controller();
        modal.show(reload("resetDB"));

        assert_eq!(modal.confirm(), Some(reload("resetDB")));
        assert!(modal.is_visible());
    }

    #[test]
    fn should_hide_once_and_stay_hidden() {
        let modal = controller();
        modal.show(reload("resetDB"));

        modal.hide();
        modal.hide();

        assert!(!modal.is_visible());
        assert_eq!(modal.bound(), None);
        assert_eq!(modal.confirm(), None);
    }

    #[test]
    fn should_dismiss_only_on_backdrop_click() {
        let modal = controller();
        modal.show(reload("resetDB"));

        assert!(!modal.on_click(ClickTarget::Dialog));
        assert!(modal.is_visible());

        assert!(modal.on_click(ClickTarget::Backdrop));
        assert!(!modal.is_visible());
    }
}

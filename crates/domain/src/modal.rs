//! Modal — the single confirmation dialog of a console page.
//!
//! ```text
//!            show(cmd)                 show(cmd')  (rebind, last writer wins)
//! Hidden ─────────────────▶ Visible ◀────────────┐
//!   ▲                          │ └───────────────┘
//!   └──────────────────────────┘
//!     hide() / backdrop click / settled gated dispatch
//! ```
//!
//! Confirming does not hide the dialog; the dispatcher hides it once the
//! bound command settles.

use crate::command::Command;

/// Where a page-wide click landed relative to the dialog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickTarget {
    /// Exactly the backdrop element surrounding the dialog.
    Backdrop,
    /// The dialog body or any of its descendants (buttons included).
    Dialog,
    /// Anything else on the page.
    Elsewhere,
}

impl ClickTarget {
    /// Place a click from two facts about its target: whether it is the
    /// backdrop element itself, and whether the dialog contains it.
    /// Being the backdrop wins, since the backdrop wraps the dialog.
    #[must_use]
    pub fn locate(is_backdrop: bool, inside_dialog: bool) -> Self {
        if is_backdrop {
            Self::Backdrop
        } else if inside_dialog {
            Self::Dialog
        } else {
            Self::Elsewhere
        }
    }
}

/// Visibility plus the command armed on the affirmative control.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ModalState {
    visible: bool,
    on_confirm: Option<Command>,
}

impl ModalState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Show the dialog armed with `command`, replacing any earlier binding.
    pub fn show(&mut self, command: Command) {
        self.visible = true;
        self.on_confirm = Some(command);
    }

    /// Hide the dialog and disarm it. Idempotent.
    pub fn hide(&mut self) {
        self.visible = false;
        self.on_confirm = None;
    }

    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// The command the affirmative control would run right now.
    #[must_use]
    pub fn bound(&self) -> Option<&Command> {
        self.on_confirm.as_ref()
    }

    /// Press the affirmative control: hands out the armed command, if any,
    /// and leaves the dialog visible.
    #[must_use]
    pub fn confirm(&self) -> Option<Command> {
        if self.visible {
            self.on_confirm.clone()
        } else {
            None
        }
    }

    /// Page-wide click handling. Only a click landing exactly on the backdrop
    /// dismisses the dialog. Returns whether the dialog was hidden.
    pub fn on_click(&mut self, target: ClickTarget) -> bool {
        if self.visible && target == ClickTarget::Backdrop {
            self.hide();
            return true;
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::command::CommandRequest;

    fn command(action: &str) -> Command {
        Command::reload(CommandRequest::new(action).unwrap())
    }

    #[test]
    fn should_start_hidden_and_unbound() {
        let modal = ModalState::new();
        assert!(!modal.is_visible());
        assert!(modal.bound().is_none());
    }

    #[test]
    fn should_keep_last_binding_when_shown_twice() {
        let mut modal = ModalState::new();
        modal.show(command("first"));
        modal.show(command("second"));

        assert!(modal.is_visible());
        assert_eq!(modal.bound(), Some(&command("second")));
    }

    #[test]
    fn should_be_idempotent_when_hidden_twice() {
        let mut once = ModalState::new();
        once.show(command("resetDB"));
        once.hide();

        let mut twice = once.clone();
        twice.hide();

        assert_eq!(once, twice);
        assert!(!twice.is_visible());
    }

    #[test]
    fn should_stay_visible_when_confirmed() {
        let mut modal = ModalState::new();
        modal.show(command("resetDB"));

        assert_eq!(modal.confirm(), Some(command("resetDB")));
        assert!(modal.is_visible());
    }

    #[test]
    fn should_do_nothing_when_confirmed_while_hidden() {
        let mut modal = ModalState::new();
        modal.show(command("resetDB"));
        modal.hide();
        assert_eq!(modal.confirm(), None);
    }

    #[test]
    fn should_hide_when_backdrop_clicked() {
        let mut modal = ModalState::new();
        modal.show(command("resetDB"));

        assert!(modal.on_click(ClickTarget::Backdrop));
        assert!(!modal.is_visible());
        assert!(modal.bound().is_none());
    }

    #[test]
    fn should_stay_visible_when_dialog_body_clicked() {
        let mut modal = ModalState::new();
        modal.show(command("resetDB"));

        assert!(!modal.on_click(ClickTarget::Dialog));
        assert!(!modal.on_click(ClickTarget::Elsewhere));
        assert!(modal.is_visible());
        assert_eq!(modal.bound(), Some(&command("resetDB")));
    }

    #[test]
    fn should_locate_backdrop_before_dialog() {
        assert_eq!(ClickTarget::locate(true, false), ClickTarget::Backdrop);
        assert_eq!(ClickTarget::locate(true, true), ClickTarget::Backdrop);
    }

    #[test]
    fn should_locate_dialog_descendants_and_outside_clicks() {
        assert_eq!(ClickTarget::locate(false, true), ClickTarget::Dialog);
        assert_eq!(ClickTarget::locate(false, false), ClickTarget::Elsewhere);
    }

    #[test]
    fn should_hide_only_for_located_backdrop_click() {
        let mut modal = ModalState::new();
        modal.show(command("resetDB"));

        assert!(!modal.on_click(ClickTarget::locate(false, true)));
        assert!(modal.is_visible());
        assert!(modal.on_click(ClickTarget::locate(true, false)));
        assert!(!modal.is_visible());
    }
}

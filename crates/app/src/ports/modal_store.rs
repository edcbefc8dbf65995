//! Modal store port — where the page's single [`ModalState`] lives.
//!
//! The browser adapter backs it with a reactive signal so the dialog
//! re-renders on every transition; tests and non-reactive callers use
//! `Rc<RefCell<ModalState>>`.

use std::cell::RefCell;
use std::rc::Rc;

use chainwatch_domain::modal::ModalState;

/// Shared access to the one modal of a page.
pub trait ModalStore {
    /// Read the current state.
    fn read<R>(&self, f: impl FnOnce(&ModalState) -> R) -> R;

    /// Mutate the state in place.
    fn update(&self, f: impl FnOnce(&mut ModalState));
}

impl ModalStore for Rc<RefCell<ModalState>> {
    fn read<R>(&self, f: impl FnOnce(&ModalState) -> R) -> R {
        f(&self.borrow())
    }

    fn update(&self, f: impl FnOnce(&mut ModalState)) {
        f(&mut self.borrow_mut());
    }
}

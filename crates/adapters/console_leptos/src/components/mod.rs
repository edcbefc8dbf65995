mod action_button;
mod config_table;
mod confirm_modal;
mod nav;

pub use action_button::ActionButton;
pub use config_table::ConfigForm;
pub use confirm_modal::ConfirmModal;
pub use nav::Nav;

//! Port definitions — traits that adapters implement.
//!
//! Ports are the boundaries between the application core and the outside world.
//! They are defined here (in `app`) so that both the use-case layer and the
//! adapter layer can depend on them without creating circular dependencies.
//!
//! The browser-facing ports (`CommandTransport`, `Navigator`, `ModalStore`)
//! are single-threaded; the server-facing ones (`CommandHandler`,
//! `ConfigurationStore`) return `Send` futures.

pub mod command_handler;
pub mod configuration;
pub mod modal_store;
pub mod navigator;
pub mod transport;

pub use command_handler::CommandHandler;
pub use configuration::ConfigurationStore;
pub use modal_store::ModalStore;
pub use navigator::Navigator;
pub use transport::{CommandTransport, TransportError};

//! # chainwatch-app
//!
//! Application layer — use-cases and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define **port traits** that adapters must implement:
//!   - `CommandTransport` — send a command to the backend endpoint (browser)
//!   - `Navigator` — navigate or reload after a successful command (browser)
//!   - `ModalStore` — where the page's single modal state lives (browser)
//!   - `CommandHandler` — accept or refuse endpoint calls (server)
//!   - `ConfigurationStore` — configuration documents (server)
//! - Define **driving/inbound ports** as use-case structs:
//!   - `ModalController` — show, hide, confirm, backdrop dismissal
//!   - `ActionDispatcher` — dispatch commands and settle the modal
//!   - `CommandService` — validate endpoint calls
//!   - `ConfigurationService` — render and update configuration tables
//! - Provide **in-process infrastructure** that doesn't need IO
//!   (action bus, in-memory configuration store)
//!
//! ## Dependency rule
//! Depends on `chainwatch-domain` only (plus `tokio::sync` for channels and locks).
//! Never imports adapter crates. Adapters depend on *this* crate, not the reverse.

pub mod action_bus;
pub mod config_store;
pub mod ports;
pub mod services;

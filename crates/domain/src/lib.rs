//! # chainwatch-domain
//!
//! Pure domain model for the ChainWatch admin console.
//!
//! ## Responsibilities
//! - Error conventions shared by every layer
//! - **Commands** sent to the backend command endpoint, tagged with what the
//!   console does once they succeed
//! - The **modal** state machine behind the single confirmation dialog
//! - **Configuration documents** and the field descriptors rendered from them
//! - **Dirty tracking** for configuration tables and their submit controls
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod error;

pub mod command;
pub mod config;
pub mod form;
pub mod modal;

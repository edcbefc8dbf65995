//! # chainwatch-adapter-http-axum
//!
//! HTTP adapter built on [axum](https://docs.rs/axum).
//!
//! ## Responsibilities
//! - Serve the **command endpoint** `GET /api?action=<name>[&param=<value>]`:
//!   200 `{"status":"ok","code":200}` when accepted, 400 `{"error": …}` otherwise
//! - Serve the **render-time configuration tables** the console composes its
//!   forms from (`/api/configuration`, `/api/configuration/{table}`), and
//!   accept their submissions
//! - Serve the built console (wasm bundle, `index.html`) as static files
//! - Map HTTP requests into application service calls (driving adapter)
//!
//! ## Dependency rule
//! Depends on `chainwatch-app` (for port traits and services) and
//! `chainwatch-domain` (for types used in request/response mapping). Never
//! leaks axum types into the domain.

pub mod api;
pub mod error;
pub mod router;
pub mod state;

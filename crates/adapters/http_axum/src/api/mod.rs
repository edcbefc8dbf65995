//! JSON API handler modules.

#[allow(clippy::missing_errors_doc)]
pub mod commands;
#[allow(clippy::missing_errors_doc)]
pub mod configuration;

use axum::Router;
use axum::routing::get;

use chainwatch_app::ports::{CommandHandler, ConfigurationStore};

use crate::state::AppState;

/// Build the API routes (`/api` and `/api/configuration/*`).
pub fn routes<H, C>() -> Router<AppState<H, C>>
where
    H: CommandHandler + Send + Sync + 'static,
    C: ConfigurationStore + Send + Sync + 'static,
{
    Router::new()
        // Command endpoint
        .route("/api", get(commands::execute::<H, C>))
        // Configuration tables
        .route("/api/configuration", get(configuration::list::<H, C>))
        .route(
            "/api/configuration/{table}",
            get(configuration::get::<H, C>).post(configuration::submit::<H, C>),
        )
}

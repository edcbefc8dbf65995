//! Axum router assembly.

use std::path::Path;

use axum::Router;
use axum::routing::get;
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;

use chainwatch_app::ports::{CommandHandler, ConfigurationStore};

use crate::state::AppState;

/// Build the top-level axum [`Router`].
///
/// Serves the API routes and, when `assets` is given, the built console from
/// that directory. Unknown paths under `assets` fall back to `index.html` so
/// client-side routes survive a reload.
/// Includes a [`TraceLayer`] that logs each HTTP request/response at the
/// `DEBUG` level using the `tracing` ecosystem.
pub fn build<H, C>(state: AppState<H, C>, assets: Option<&Path>) -> Router
where
    H: CommandHandler + Send + Sync + 'static,
    C: ConfigurationStore + Send + Sync + 'static,
{
    let mut router = Router::new()
        .route("/health", get(health_check))
        .merge(crate::api::routes());

    if let Some(dir) = assets {
        let console = ServeDir::new(dir).fallback(ServeFile::new(dir.join("index.html")));
        router = router.fallback_service(console);
    }

    router.layer(TraceLayer::new_for_http()).with_state(state)
}

async fn health_check() -> &'static str {
    "OK"
}

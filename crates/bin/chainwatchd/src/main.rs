//! # chainwatchd — `ChainWatch` console daemon
//!
//! Composition root that wires all adapters together and starts the server.
//!
//! ## Responsibilities
//! - Parse configuration (config file, env vars)
//! - Load the configuration documents shown as editable tables
//! - Construct the action bus and the in-memory configuration store
//! - Construct application services, injecting adapters via port traits
//! - Build the axum router, injecting application services
//! - Bind to a TCP port and serve
//! - Handle graceful shutdown (SIGINT)
//!
//! ## Dependency rule
//! This is the **only** crate that depends on all other crates.
//! It is the wiring layer — no domain logic belongs here.

mod config;

use std::sync::Arc;

use tokio::sync::broadcast;
use tracing_subscriber::EnvFilter;

use chainwatch_adapter_http_axum::state::AppState;
use chainwatch_app::action_bus::InProcessActionBus;
use chainwatch_app::config_store::InMemoryConfigurationStore;
use chainwatch_app::services::command_service::CommandService;
use chainwatch_app::services::configuration_service::ConfigurationService;
use chainwatch_domain::command::CommandRequest;

use crate::config::Config;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load()?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&config.logging.filter))
        .init();

    // Configuration tables
    let mut documents = Vec::with_capacity(config.tables.len());
    for source in &config.tables {
        let document = source.load().await?;
        tracing::debug!(
            table = %source.name,
            path = %source.path.display(),
            "configuration document loaded"
        );
        documents.push(document);
    }
    let store = InMemoryConfigurationStore::new(documents);

    // Action bus
    let bus = config
        .actions
        .registered
        .iter()
        .fold(InProcessActionBus::new(64), |bus, action| {
            bus.with_action(action.name.clone(), action.param.into())
        });
    tokio::spawn(log_accepted(bus.subscribe()));
    let bus = Arc::new(bus);

    // HTTP
    let state = AppState::new(CommandService::new(bus), ConfigurationService::new(store));
    let app =
        chainwatch_adapter_http_axum::router::build(state, config.console.assets_dir.as_deref());

    let bind_addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    tracing::info!(
        address = %bind_addr,
        tables = config.tables.len(),
        actions = config.actions.registered.len(),
        "chainwatchd listening"
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("chainwatchd stopped");
    Ok(())
}

/// Record every request the bus accepts until the bus is dropped.
async fn log_accepted(mut receiver: broadcast::Receiver<CommandRequest>) {
    loop {
        match receiver.recv().await {
            Ok(request) => {
                tracing::info!(
                    action = request.action(),
                    param = request.param(),
                    "action dispatched"
                );
            }
            Err(broadcast::error::RecvError::Lagged(skipped)) => {
                tracing::warn!(skipped, "action log lagging behind");
            }
            Err(broadcast::error::RecvError::Closed) => break,
        }
    }
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %err, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("shutdown requested");
}

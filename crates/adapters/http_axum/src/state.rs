//! Shared application state for axum handlers.

use std::sync::Arc;

use chainwatch_app::ports::{CommandHandler, ConfigurationStore};
use chainwatch_app::services::command_service::CommandService;
use chainwatch_app::services::configuration_service::ConfigurationService;

/// Application state shared across all axum handlers.
///
/// Generic over the command handler and configuration store to avoid dynamic
/// dispatch. `Clone` is implemented manually so the underlying types themselves
/// do not need to be `Clone` — only the `Arc` wrappers are cloned.
pub struct AppState<H, C> {
    /// Command endpoint service.
    pub command_service: Arc<CommandService<H>>,
    /// Configuration tables service.
    pub configuration_service: Arc<ConfigurationService<C>>,
}

impl<H, C> Clone for AppState<H, C> {
    fn clone(&self) -> Self {
        Self {
            command_service: Arc::clone(&self.command_service),
            configuration_service: Arc::clone(&self.configuration_service),
        }
    }
}

impl<H, C> AppState<H, C>
where
    H: CommandHandler + Send + Sync + 'static,
    C: ConfigurationStore + Send + Sync + 'static,
{
    /// Create a new application state from service instances.
    pub fn new(
        command_service: CommandService<H>,
        configuration_service: ConfigurationService<C>,
    ) -> Self {
        Self {
            command_service: Arc::new(command_service),
            configuration_service: Arc::new(configuration_service),
        }
    }
}

//! The console's callable surface, shared with every component through context.

use std::sync::Arc;

use indexmap::IndexMap;
use leptos::prelude::*;
use leptos::task::spawn_local;

use chainwatch_app::services::dispatcher::ActionDispatcher;
use chainwatch_app::services::modal_controller::ModalController;
use chainwatch_domain::command::Command;
use chainwatch_domain::config::RenderedTable;
use chainwatch_domain::form::ConfigTable;
use chainwatch_domain::modal::ClickTarget;

use crate::api::{self, GlooTransport};
use crate::browser::{BrowserNavigator, ReactiveModal};

type Dispatcher = ActionDispatcher<GlooTransport, BrowserNavigator, ReactiveModal>;

/// Handlers markup calls from `on:click` and `on:input`.
///
/// Holds the page's single dispatcher (and through it the single modal) plus
/// the dirty-tracking state of every configuration table on the page.
#[derive(Clone)]
pub struct ConsoleHooks {
    dispatcher: Arc<Dispatcher>,
    modal: ReactiveModal,
    tables: RwSignal<IndexMap<String, ConfigTable>>,
}

impl ConsoleHooks {
    pub fn new() -> Self {
        let modal = ReactiveModal::new();
        Self {
            dispatcher: Arc::new(ActionDispatcher::new(
                GlooTransport::default(),
                BrowserNavigator,
                ModalController::new(modal),
            )),
            modal,
            tables: RwSignal::new(IndexMap::new()),
        }
    }

    // -- modal ----------------------------------------------------------------

    /// Open the confirmation dialog armed with `command`.
    pub fn show(&self, command: Command) {
        self.dispatcher.request_confirmation(command);
    }

    pub fn hide(&self) {
        self.dispatcher.modal().hide();
    }

    /// Tracked; re-runs the calling view on every transition.
    pub fn is_modal_visible(&self) -> bool {
        self.modal.is_visible()
    }

    /// The affirmative control was pressed.
    pub fn confirm(&self) {
        let dispatcher = Arc::clone(&self.dispatcher);
        spawn_local(async move {
            if dispatcher.confirm().await.is_none() {
                tracing::debug!("confirm pressed with nothing bound");
            }
        });
    }

    /// A click landed somewhere on the page.
    pub fn on_click(&self, target: ClickTarget) {
        if self.dispatcher.modal().on_click(target) {
            tracing::debug!("confirmation dismissed from backdrop");
        }
    }

    // -- dispatch -------------------------------------------------------------

    /// Send `command` without blocking the UI.
    pub fn dispatch(&self, command: Command) {
        let dispatcher = Arc::clone(&self.dispatcher);
        spawn_local(async move {
            dispatcher.dispatch(command).await;
        });
    }

    // -- configuration tables -------------------------------------------------

    /// Register a table with its render-time values, replacing any earlier
    /// composition of the same table. Returns the DOM id of its submit control.
    pub fn compose(&self, rendered: &RenderedTable) -> String {
        let table = ConfigTable::from_rendered(rendered);
        let submit_id = table.submit_id();
        self.tables.update(|tables| {
            tables.insert(table.name().to_string(), table);
        });
        submit_id
    }

    /// An input event fired on `field` of `table`.
    pub fn field_changed(&self, table: &str, field: &str, value: String) {
        self.tables.update(|tables| {
            let result = match tables.get_mut(table) {
                Some(t) => t.on_field_changed(field, value),
                None => {
                    tracing::error!(table, "input event for a table that was never composed");
                    return;
                }
            };
            if let Err(err) = result {
                tracing::error!(table, error = %err, "input event ignored");
            }
        });
    }

    /// Restore `table` to its render-time values.
    pub fn reset(&self, table: &str) {
        self.tables.update(|tables| {
            if let Some(t) = tables.get_mut(table) {
                t.reset();
            }
        });
    }

    /// Tracked live value of a field.
    pub fn current(&self, table: &str, field: &str) -> String {
        self.tables.with(|tables| {
            tables
                .get(table)
                .and_then(|t| t.field(field))
                .map(|f| f.current().to_string())
                .unwrap_or_default()
        })
    }

    /// Tracked change marker of a field.
    pub fn is_changed(&self, table: &str, field: &str) -> bool {
        self.tables.with(|tables| {
            tables
                .get(table)
                .and_then(|t| t.field(field))
                .is_some_and(|f| f.is_changed())
        })
    }

    /// Tracked state of a table's submit control.
    pub fn is_submit_enabled(&self, table: &str) -> bool {
        self.tables
            .with(|tables| tables.get(table).is_some_and(ConfigTable::is_submit_enabled))
    }

    /// Send the live values of `table`; on success the saved values become the
    /// new render-time originals.
    pub fn submit(&self, table: &str) {
        let Some(values) = self
            .tables
            .with_untracked(|tables| tables.get(table).map(ConfigTable::values))
        else {
            return;
        };
        let hooks = self.clone();
        let name = table.to_string();
        spawn_local(async move {
            match api::submit_table(&name, &values).await {
                Ok(saved) => {
                    tracing::info!(table = %name, "configuration saved");
                    hooks.compose(&saved);
                }
                Err(err) => {
                    tracing::warn!(table = %name, error = %err, "configuration not saved");
                }
            }
        });
    }
}

impl Default for ConsoleHooks {
    fn default() -> Self {
        Self::new()
    }
}

/// Access the hooks from Leptos context.
///
/// Must be called within a component tree below [`crate::App`].
pub fn use_hooks() -> ConsoleHooks {
    use_context::<ConsoleHooks>().expect("ConsoleHooks not found in context")
}

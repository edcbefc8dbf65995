//! Action dispatcher — sends commands to the backend and settles the UI.
//!
//! Transport and error handling are identical for every call shape; the
//! [`CommandKind`] only decides whether the modal is closed on settlement and
//! what happens after a success.

use chainwatch_domain::command::{Command, CommandKind};

use crate::ports::{CommandTransport, ModalStore, Navigator, TransportError};
use crate::services::modal_controller::ModalController;

/// How a dispatched command settled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DispatchOutcome {
    /// The endpoint answered with a 2xx status.
    Succeeded { status: u16 },
    /// The endpoint answered with any other status.
    Rejected { status: u16 },
    /// No status was ever received.
    Failed(TransportError),
}

impl DispatchOutcome {
    fn from_response(response: Result<u16, TransportError>) -> Self {
        match response {
            Ok(status) if (200..300).contains(&status) => Self::Succeeded { status },
            Ok(status) => Self::Rejected { status },
            Err(err) => Self::Failed(err),
        }
    }

    #[must_use]
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Succeeded { .. })
    }
}

/// Dispatches [`Command`]s through a [`CommandTransport`].
///
/// Every call issues exactly one request. Nothing is retried, queued or
/// cancelled; overlapping dispatches settle independently and in any order.
pub struct ActionDispatcher<T, N, S> {
    transport: T,
    navigator: N,
    modal: ModalController<S>,
}

impl<T, N, S> ActionDispatcher<T, N, S>
where
    T: CommandTransport,
    N: Navigator,
    S: ModalStore,
{
    pub fn new(transport: T, navigator: N, modal: ModalController<S>) -> Self {
        Self {
            transport,
            navigator,
            modal,
        }
    }

    /// The modal this dispatcher closes on settlement.
    pub fn modal(&self) -> &ModalController<S> {
        &self.modal
    }

    /// Ask for confirmation before running `command`.
    pub fn request_confirmation(&self, command: Command) {
        self.modal.show(command);
    }

    /// Send `command` and settle it.
    ///
    /// Gated commands close the modal whatever the outcome. Only a success
    /// triggers navigation or reload.
    #[tracing::instrument(skip(self, command), fields(command = %command))]
    pub async fn dispatch(&self, command: Command) -> DispatchOutcome {
        let gated = command.is_gated();
        self.settle(command, gated).await
    }

    /// Press the affirmative control: run the bound command, if any.
    ///
    /// Returns `None` when the dialog is hidden or unarmed. The dialog stays
    /// visible until the command settles.
    #[tracing::instrument(skip(self))]
    pub async fn confirm(&self) -> Option<DispatchOutcome> {
        let command = self.modal.confirm()?;
        Some(self.settle(command, true).await)
    }

    async fn settle(&self, command: Command, close_modal: bool) -> DispatchOutcome {
        let request = &command.request;
        tracing::debug!(
            action = request.action(),
            param = request.param(),
            "dispatching command"
        );

        let outcome = DispatchOutcome::from_response(self.transport.send(request).await);
        match &outcome {
            DispatchOutcome::Succeeded { status } => {
                tracing::info!(
                    action = request.action(),
                    param = request.param(),
                    status,
                    "command succeeded"
                );
            }
            DispatchOutcome::Rejected { status } => {
                tracing::warn!(
                    action = request.action(),
                    param = request.param(),
                    status,
                    "command rejected"
                );
            }
            DispatchOutcome::Failed(err) => {
                tracing::warn!(
                    action = request.action(),
                    param = request.param(),
                    error = %err,
                    "command failed"
                );
            }
        }

        if close_modal {
            self.modal.hide();
        }

        if outcome.is_success() {
            match &command.kind {
                CommandKind::Direct => {}
                CommandKind::Navigate { location } => self.navigator.navigate(location),
                CommandKind::Reload => self.navigator.reload(),
            }
        }

        outcome
    }
}

//! Command service — the server side of the command endpoint.

use chainwatch_domain::command::CommandRequest;
use chainwatch_domain::error::{CommandError, ConsoleError};

use crate::ports::CommandHandler;

/// Turns raw `action`/`param` query values into a [`CommandRequest`] and
/// hands it to a [`CommandHandler`].
pub struct CommandService<H> {
    handler: H,
}

impl<H: CommandHandler> CommandService<H> {
    /// Create a new service backed by the given handler.
    pub fn new(handler: H) -> Self {
        Self { handler }
    }

    /// Execute one endpoint call.
    ///
    /// # Errors
    ///
    /// Returns [`CommandError::MissingAction`] when `action` is absent or
    /// blank, or whatever the handler refuses the request with.
    #[tracing::instrument(skip(self))]
    pub async fn execute(
        &self,
        action: Option<&str>,
        param: Option<&str>,
    ) -> Result<CommandRequest, ConsoleError> {
        let mut request = CommandRequest::new(action.unwrap_or_default())
            .map_err(|_| CommandError::MissingAction)?;
        if let Some(param) = param {
            request = request.with_param(param);
        }

        if let Err(err) = self.handler.handle(&request).await {
            tracing::warn!(
                action = request.action(),
                param = request.param(),
                error = %err,
                "command refused"
            );
            return Err(err.into());
        }

        tracing::info!(
            action = request.action(),
            param = request.param(),
            "command accepted"
        );
        Ok(request)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::future::Future;
    use std::sync::Mutex;

    /// Accepts `resetDB` only and remembers what it saw.
    #[derive(Default)]
    struct RecordingHandler {
        seen: Mutex<Vec<CommandRequest>>,
    }

    impl CommandHandler for RecordingHandler {
        fn handle(
            &self,
            request: &CommandRequest,
        ) -> impl Future<Output = Result<(), CommandError>> + Send {
            self.seen.lock().unwrap().push(request.clone());
            let result = if request.action() == "resetDB" {
                Ok(())
            } else {
                Err(CommandError::Unsupported {
                    action: request.action().to_string(),
                })
            };
            async { result }
        }
    }

    #[tokio::test]
    async fn should_pass_action_and_param_to_handler() {
        let svc = CommandService::new(RecordingHandler::default());

        let request = svc.execute(Some("resetDB"), Some("3")).await.unwrap();

        assert_eq!(request.action(), "resetDB");
        assert_eq!(request.param(), Some("3"));
        assert_eq!(svc.handler.seen.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn should_reject_missing_action_without_calling_handler() {
        let svc = CommandService::new(RecordingHandler::default());

        for action in [None, Some(""), Some("   ")] {
            let result = svc.execute(action, Some("3")).await;
            assert!(matches!(
                result,
                Err(ConsoleError::Command(CommandError::MissingAction))
            ));
        }
        assert!(svc.handler.seen.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn should_surface_handler_refusal() {
        let svc = CommandService::new(RecordingHandler::default());

        let result = svc.execute(Some("launch"), None).await;

        assert!(matches!(
            result,
            Err(ConsoleError::Command(CommandError::Unsupported { action })) if action == "launch"
        ));
    }
}

//! In-process action bus backed by a tokio broadcast channel.
//!
//! The bus knows which actions exist and what parameter each accepts. Accepted
//! requests are broadcast to subscribers, which carry out the actual work.

use std::collections::HashMap;
use std::future::Future;

use tokio::sync::broadcast;

use chainwatch_domain::command::CommandRequest;
use chainwatch_domain::error::CommandError;

use crate::ports::CommandHandler;

/// What an action accepts as `param`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamRule {
    /// Any `param` is ignored.
    Ignored,
    /// `param` is optional but must parse as an integer when present.
    OptionalInteger,
    /// `param` must be present; its content is not checked.
    Required,
}

impl ParamRule {
    fn check(self, request: &CommandRequest) -> Result<(), CommandError> {
        let invalid = |param: &str| CommandError::InvalidParam {
            action: request.action().to_string(),
            param: param.to_string(),
        };
        match (self, request.param()) {
            (Self::OptionalInteger, Some(param)) if param.parse::<i64>().is_err() => {
                Err(invalid(param))
            }
            (Self::Required, None) => Err(invalid("")),
            _ => Ok(()),
        }
    }
}

/// Registry of supported actions plus a broadcast channel of accepted requests.
///
/// Handling succeeds even when there are no active subscribers (the request
/// is simply dropped after validation).
pub struct InProcessActionBus {
    actions: HashMap<String, ParamRule>,
    sender: broadcast::Sender<CommandRequest>,
}

impl InProcessActionBus {
    /// Create an empty bus with the given channel capacity.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);
        Self {
            actions: HashMap::new(),
            sender,
        }
    }

    /// Register an action name and its parameter rule.
    #[must_use]
    pub fn with_action(mut self, action: impl Into<String>, rule: ParamRule) -> Self {
        self.actions.insert(action.into(), rule);
        self
    }

    /// Subscribe to accepted requests.
    ///
    /// Returns a receiver that will get all requests accepted *after*
    /// the subscription is created.
    #[must_use]
    pub fn subscribe(&self) -> broadcast::Receiver<CommandRequest> {
        self.sender.subscribe()
    }

    fn accept(&self, request: &CommandRequest) -> Result<(), CommandError> {
        let rule = self
            .actions
            .get(request.action())
            .ok_or_else(|| CommandError::Unsupported {
                action: request.action().to_string(),
            })?;
        rule.check(request)?;
        // send fails only when there are zero receivers, which is fine.
        let _ = self.sender.send(request.clone());
        Ok(())
    }
}

impl CommandHandler for InProcessActionBus {
    fn handle(
        &self,
        request: &CommandRequest,
    ) -> impl Future<Output = Result<(), CommandError>> + Send {
        let result = self.accept(request);
        async { result }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bus() -> InProcessActionBus {
        InProcessActionBus::new(16)
            .with_action("updateQR", ParamRule::Ignored)
            .with_action("resetDB", ParamRule::OptionalInteger)
            .with_action("deleteImg", ParamRule::Required)
    }

    fn request(action: &str, param: Option<&str>) -> CommandRequest {
        let req = CommandRequest::new(action).unwrap();
        match param {
            Some(p) => req.with_param(p),
            None => req,
        }
    }

    #[tokio::test]
    async fn should_deliver_accepted_request_to_subscriber() {
        let bus = bus();
        let mut rx = bus.subscribe();

        bus.handle(&request("resetDB", Some("12"))).await.unwrap();

        let received = rx.recv().await.unwrap();
        assert_eq!(received, request("resetDB", Some("12")));
    }

    #[tokio::test]
    async fn should_succeed_when_no_subscribers() {
        let result = bus().handle(&request("updateQR", None)).await;
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn should_reject_unregistered_action() {
        let result = bus().handle(&request("launch", None)).await;
        assert_eq!(
            result,
            Err(CommandError::Unsupported {
                action: "launch".to_string()
            })
        );
    }

    #[tokio::test]
    async fn should_reject_non_integer_param_when_integer_expected() {
        let bus = bus();
        let mut rx = bus.subscribe();

        let result = bus.handle(&request("resetDB", Some("all"))).await;

        assert!(matches!(result, Err(CommandError::InvalidParam { .. })));
        assert!(rx.try_recv().is_err());
    }

    #[tokio::test]
    async fn should_accept_optional_integer_when_absent() {
        assert!(bus().handle(&request("resetDB", None)).await.is_ok());
    }

    #[tokio::test]
    async fn should_require_param_when_rule_demands_it() {
        let bus = bus();
        assert!(bus.handle(&request("deleteImg", None)).await.is_err());
        assert!(bus.handle(&request("deleteImg", Some("42"))).await.is_ok());
    }

    #[tokio::test]
    async fn should_ignore_param_for_actions_without_one() {
        assert!(bus().handle(&request("updateQR", Some("x"))).await.is_ok());
    }
}

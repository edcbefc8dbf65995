//! Command handler port — the server side of the command endpoint.

use std::future::Future;

use chainwatch_domain::command::CommandRequest;
use chainwatch_domain::error::CommandError;

/// Accepts or refuses a request that reached the command endpoint.
///
/// What an accepted action actually does is up to the implementation.
pub trait CommandHandler {
    /// Handle `request`.
    fn handle(
        &self,
        request: &CommandRequest,
    ) -> impl Future<Output = Result<(), CommandError>> + Send;
}

impl<T: CommandHandler + Send + Sync> CommandHandler for std::sync::Arc<T> {
    fn handle(
        &self,
        request: &CommandRequest,
    ) -> impl Future<Output = Result<(), CommandError>> + Send {
        (**self).handle(request)
    }
}

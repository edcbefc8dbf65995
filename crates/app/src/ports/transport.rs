//! Transport port — sends a command request to the backend command endpoint.

use std::future::Future;

use chainwatch_domain::command::CommandRequest;

/// The request never produced an HTTP status (network down, CORS, aborted page, …).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("transport failure: {message}")]
pub struct TransportError {
    pub message: String,
}

impl TransportError {
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Issues one `GET <endpoint>?action=…[&param=…]` per call.
///
/// Browser transports run on the UI thread, so the returned future is not
/// required to be `Send`. No retry, no timeout beyond what the transport
/// does natively.
pub trait CommandTransport {
    /// Send `request` and resolve with the HTTP status code of the response.
    /// The response body is not interpreted.
    fn send(&self, request: &CommandRequest) -> impl Future<Output = Result<u16, TransportError>>;
}

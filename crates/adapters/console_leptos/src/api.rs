//! HTTP API client wrapping `gloo-net` for calls to `/api/*`.

use std::future::Future;

use gloo_net::http::{Request, Response};
use indexmap::IndexMap;
use serde::Deserialize;

use chainwatch_app::ports::{CommandTransport, TransportError};
use chainwatch_domain::command::CommandRequest;
use chainwatch_domain::config::RenderedTable;

/// Path of the backend command endpoint.
pub const COMMAND_ENDPOINT: &str = "/api";

/// Error returned by API client methods.
#[derive(Debug, Clone)]
pub struct ApiError {
    pub message: String,
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.message)
    }
}

impl From<gloo_net::Error> for ApiError {
    fn from(err: gloo_net::Error) -> Self {
        Self {
            message: err.to_string(),
        }
    }
}

/// JSON error body returned by the server on non-2xx responses.
#[derive(Deserialize)]
struct ErrorBody {
    error: String,
}

/// Check the HTTP response status and extract an error if non-2xx.
async fn check_response(resp: Response) -> Result<Response, ApiError> {
    if resp.ok() {
        return Ok(resp);
    }
    let message = match resp.json::<ErrorBody>().await {
        Ok(body) => body.error,
        Err(_) => format!("HTTP {}", resp.status()),
    };
    Err(ApiError { message })
}

/// [`CommandTransport`] issuing a `fetch` GET per command.
#[derive(Debug, Clone)]
pub struct GlooTransport {
    endpoint: String,
}

impl GlooTransport {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
        }
    }
}

impl Default for GlooTransport {
    fn default() -> Self {
        Self::new(COMMAND_ENDPOINT)
    }
}

impl CommandTransport for GlooTransport {
    fn send(&self, request: &CommandRequest) -> impl Future<Output = Result<u16, TransportError>> {
        let url = request.url(&self.endpoint);
        async move {
            Request::get(&url)
                .send()
                .await
                .map(|resp| resp.status())
                .map_err(|err| TransportError::new(err.to_string()))
        }
    }
}

/// Fetch every configuration table.
pub async fn fetch_tables() -> Result<Vec<RenderedTable>, ApiError> {
    let resp = check_response(Request::get("/api/configuration").send().await?).await?;
    let tables: Vec<RenderedTable> = resp.json().await?;
    Ok(tables)
}

/// Submit edited values of one table via POST /api/configuration/{name}.
pub async fn submit_table(
    name: &str,
    values: &IndexMap<String, String>,
) -> Result<RenderedTable, ApiError> {
    let url = format!("/api/configuration/{name}");
    let resp = check_response(Request::post(&url).json(values)?.send().await?).await?;
    let table: RenderedTable = resp.json().await?;
    Ok(table)
}

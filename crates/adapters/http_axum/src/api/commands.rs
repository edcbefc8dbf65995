//! The command endpoint: `GET /api?action=<name>[&param=<value>]`.

use axum::Json;
use axum::extract::{Query, State};
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};

use chainwatch_app::ports::{CommandHandler, ConfigurationStore};

use crate::error::ApiError;
use crate::state::AppState;

/// Query string of the command endpoint.
#[derive(Deserialize)]
pub struct CommandQuery {
    pub action: Option<String>,
    pub param: Option<String>,
}

/// Body returned when a command is accepted.
#[derive(Serialize)]
pub struct Accepted {
    status: &'static str,
    code: u16,
}

/// Possible responses from the command endpoint.
pub enum ExecuteResponse {
    Ok(Json<Accepted>),
}

impl IntoResponse for ExecuteResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// `GET /api`
pub async fn execute<H, C>(
    State(state): State<AppState<H, C>>,
    Query(query): Query<CommandQuery>,
) -> Result<ExecuteResponse, ApiError>
where
    H: CommandHandler + Send + Sync + 'static,
    C: ConfigurationStore + Send + Sync + 'static,
{
    state
        .command_service
        .execute(query.action.as_deref(), query.param.as_deref())
        .await?;
    Ok(ExecuteResponse::Ok(Json(Accepted {
        status: "ok",
        code: 200,
    })))
}

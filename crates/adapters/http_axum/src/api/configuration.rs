//! JSON handlers for the render-time configuration tables.

use axum::Json;
use axum::extract::{Path, State};
use axum::response::{IntoResponse, Response};
use indexmap::IndexMap;

use chainwatch_app::ports::{CommandHandler, ConfigurationStore};
use chainwatch_domain::config::RenderedTable;

use crate::error::ApiError;
use crate::state::AppState;

/// Possible responses from the list endpoint.
pub enum ListResponse {
    Ok(Json<Vec<RenderedTable>>),
}

impl IntoResponse for ListResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the get and submit endpoints.
pub enum TableResponse {
    Ok(Json<RenderedTable>),
}

impl IntoResponse for TableResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// `GET /api/configuration`
pub async fn list<H, C>(State(state): State<AppState<H, C>>) -> Result<ListResponse, ApiError>
where
    H: CommandHandler + Send + Sync + 'static,
    C: ConfigurationStore + Send + Sync + 'static,
{
    let tables = state.configuration_service.list_tables().await?;
    Ok(ListResponse::Ok(Json(tables)))
}

/// `GET /api/configuration/{table}`
pub async fn get<H, C>(
    State(state): State<AppState<H, C>>,
    Path(table): Path<String>,
) -> Result<TableResponse, ApiError>
where
    H: CommandHandler + Send + Sync + 'static,
    C: ConfigurationStore + Send + Sync + 'static,
{
    let table = state.configuration_service.get_table(&table).await?;
    Ok(TableResponse::Ok(Json(table)))
}

/// `POST /api/configuration/{table}` with a `{ "<field>": "<value>" }` body.
pub async fn submit<H, C>(
    State(state): State<AppState<H, C>>,
    Path(table): Path<String>,
    Json(values): Json<IndexMap<String, String>>,
) -> Result<TableResponse, ApiError>
where
    H: CommandHandler + Send + Sync + 'static,
    C: ConfigurationStore + Send + Sync + 'static,
{
    let table = state.configuration_service.submit(&table, &values).await?;
    Ok(TableResponse::Ok(Json(table)))
}

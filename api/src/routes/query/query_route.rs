//! POST /api/query: answers one natural-language question.

use std::sync::Arc;

use ad_insights::QueryResult;
use axum::{Json, body::Bytes, extract::State};
use serde_json::Value;
use tracing::info;

use crate::{
    core::app_state::AppState,
    error_handler::{AppError, AppResult},
    routes::query::query_request::QueryRequest,
};

/// Handler: POST /api/query
///
/// The body is read raw so that a non-JSON body and a bad `query` field map
/// to different errors (500 and 400).
///
/// # Example
/// ```bash
/// curl -X POST http://127.0.0.1:8080/api/query \
///   -H 'content-type: application/json' \
///   -d '{"query":"Which ad performed best in June?"}'
/// ```
pub async fn query(
    State(state): State<Arc<AppState>>,
    body: Bytes,
) -> AppResult<Json<QueryResult>> {
    let value: Value =
        serde_json::from_slice(&body).map_err(|e| AppError::Internal(e.to_string()))?;
    let req = QueryRequest::try_from(value)?;

    info!(query_len = req.query.len(), "query received");
    let result = state.engine.process(&req.query).await;

    Ok(Json(result))
}

use serde_json::Value;

use crate::error_handler::AppError;

pub const QUERY_REQUIRED: &str = "query is required and must be a string";

/// Request payload for /api/query.
#[derive(Debug, PartialEq)]
pub struct QueryRequest {
    /// Natural language question.
    pub query: String,
}

impl TryFrom<Value> for QueryRequest {
    type Error = AppError;

    /// `query` must be present, a JSON string, and non-empty. Whitespace-only
    /// text is a valid (if vague) question.
    fn try_from(body: Value) -> Result<Self, Self::Error> {
        match body.get("query").and_then(Value::as_str) {
            Some(q) if !q.is_empty() => Ok(Self {
                query: q.to_string(),
            }),
            _ => Err(AppError::BadRequest(QUERY_REQUIRED.to_string())),
        }
    }
}

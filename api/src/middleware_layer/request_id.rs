use axum::{
    body::Body,
    http::{HeaderName, HeaderValue, Request},
    middleware::Next,
    response::Response,
};
use chrono::Utc;
use tracing::{Instrument, info_span};

pub const REQUEST_ID_HEADER: HeaderName = HeaderName::from_static("x-request-id");

/// Client-supplied id if present and non-blank, otherwise `req-<unix-nanos>`.
fn ensure_request_id(req: &Request<Body>) -> HeaderValue {
    if let Some(h) = req.headers().get(&REQUEST_ID_HEADER) {
        if let Ok(v) = h.to_str() {
            if !v.trim().is_empty() {
                return h.clone();
            }
        }
    }
    let nanos = Utc::now()
        .timestamp_nanos_opt()
        .unwrap_or_else(|| Utc::now().timestamp_micros() * 1000);
    HeaderValue::from_str(&format!("req-{nanos}"))
        .unwrap_or_else(|_| HeaderValue::from_static("req-unknown"))
}

/// Tags the request with an id, runs it inside a span carrying that id and
/// echoes the id on the response.
pub async fn request_id(mut req: Request<Body>, next: Next) -> Response {
    let id = ensure_request_id(&req);
    req.headers_mut().insert(REQUEST_ID_HEADER, id.clone());

    let span = info_span!(
        "request",
        request_id = id.to_str().unwrap_or_default(),
        method = %req.method(),
        path = %req.uri().path(),
    );

    let mut res = next.run(req).instrument(span).await;
    res.headers_mut().insert(REQUEST_ID_HEADER, id);
    res
}

//! Middleware for logging requests and responses.

use axum::{
    body::Body,
    extract::Request,
    http::StatusCode,
    middleware::Next,
    response::{IntoResponse, Response},
};
use unicode_segmentation::UnicodeSegmentation;

/// Bodies longer than this many characters are truncated in the `info` log.
pub const LOG_BODY_LENGTH_LIMIT: usize = 64;

/// Log the request and response for each request.
///
/// Both the request and response are logged at the `info` level.
/// If the response body is longer than [LOG_BODY_LENGTH_LIMIT] characters, it is
/// truncated and the full body is logged at the `debug` level.
pub async fn logging_middleware(request: Request, next: Next) -> Response {
    let (parts, body) = request.into_parts();
    let request_text = match body_text(body).await {
        Ok(text) => text,
        Err(error) => {
            tracing::error!("Could not read request body: {error}");
            return StatusCode::BAD_REQUEST.into_response();
        }
    };

    log_body("Received request", &parts, &request_text);

    let request = Request::from_parts(parts, request_text.into());
    let response = next.run(request).await;

    let (parts, body) = response.into_parts();
    let response_text = match body_text(body).await {
        Ok(text) => text,
        Err(error) => {
            tracing::error!("Could not read response body: {error}");
            return StatusCode::INTERNAL_SERVER_ERROR.into_response();
        }
    };

    log_body("Sending response", &parts, &response_text);

    Response::from_parts(parts, response_text.into())
}

async fn body_text(body: Body) -> Result<String, axum::Error> {
    let bytes = axum::body::to_bytes(body, usize::MAX).await?;

    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

/// Cut `text` down to at most `limit` characters, keeping grapheme clusters whole.
///
/// Returns `None` if `text` is already short enough.
fn truncate(text: &str, limit: usize) -> Option<String> {
    let mut graphemes = text.graphemes(true);
    let truncated: String = graphemes.by_ref().take(limit).collect();

    graphemes.next().map(|_| truncated)
}

fn log_body(label: &str, parts: &impl std::fmt::Debug, body: &str) {
    match truncate(body, LOG_BODY_LENGTH_LIMIT) {
        Some(truncated) => {
            tracing::info!("{label}: {parts:#?}\nbody: {truncated}...");
            tracing::debug!("Full body: {body:?}");
        }
        None => tracing::info!("{label}: {parts:#?}\nbody: {body:?}"),
    }
}

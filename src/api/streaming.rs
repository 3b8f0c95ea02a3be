//! Streaming utilities for Server-Sent Events (SSE)
//!
//! Turns a typing reveal sequence into an SSE response.

use crate::error::AppError;
use crate::session::TypingRevealer;
use axum::{
    body::Body,
    http::{header, StatusCode},
    response::Response,
};
use futures_util::{stream::Stream, StreamExt};
use serde::Serialize;
use tokio::sync::mpsc;
use tracing::error;

/// SSE stream termination signal
pub const SSE_DONE_SIGNAL: &str = "[DONE]";

/// One reveal step as sent over the wire
#[derive(Debug, Serialize)]
pub struct RevealEvent {
    /// The prefix revealed so far
    pub prefix: String,
}

/// Create an SSE response from a reveal sequence
///
/// # Arguments
/// * `revealer` - The revealer driving the sequence; kept alive for the
///   duration of the stream so its timer is not aborted early
/// * `rx` - Prefix sequence produced by the revealer
///
/// # Returns
/// * `Result<Response, AppError>` - SSE HTTP response or error
pub fn create_reveal_sse(
    revealer: TypingRevealer,
    rx: mpsc::Receiver<String>,
) -> Result<Response, AppError> {
    let stream = reveal_event_stream(revealer, rx);

    let sse_stream = stream.map(|payload| Ok::<_, std::io::Error>(format!("data: {}\n\n", payload)));

    Response::builder()
        .status(StatusCode::OK)
        .header(header::CONTENT_TYPE, "text/event-stream")
        .header(header::CACHE_CONTROL, "no-cache")
        .header(header::CONNECTION, "keep-alive")
        .body(Body::from_stream(sse_stream))
        .map_err(|e| AppError::Internal(anyhow::anyhow!("Failed to build SSE response: {}", e)))
}

/// Serialize each revealed prefix as a JSON event, ending with the done
/// signal
fn reveal_event_stream(
    revealer: TypingRevealer,
    mut rx: mpsc::Receiver<String>,
) -> impl Stream<Item = String> {
    use async_stream::stream;

    stream! {
        // Dropping the revealer aborts its timer, so it rides along until
        // the sequence finishes
        let _revealer = revealer;

        while let Some(prefix) = rx.recv().await {
            match serde_json::to_string(&RevealEvent { prefix }) {
                Ok(json) => yield json,
                Err(e) => {
                    error!(error = %e, "Failed to serialize reveal event");
                    break;
                }
            }
        }

        yield SSE_DONE_SIGNAL.to_string();
    }
}

use axum::{http::StatusCode, Json};

use super::LogOnError;
use crate::player::{BridgeMessage, TracingSink};

/// `POST /telemetry`: the browser-side player's bridge.
///
/// Fire-and-forget: any well-formed message is acknowledged, even one the
/// sink rejects.
pub async fn telemetry(Json(message): Json<BridgeMessage>) -> StatusCode {
  message
    .deliver(&TracingSink)
    .log_warn("Dropping telemetry message");
  StatusCode::NO_CONTENT
}

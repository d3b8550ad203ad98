//! Fire-and-forget playback telemetry.
//!
//! Player events are forwarded to an injected bridge when one exists and
//! logged locally otherwise. Sink failures are logged and dropped; they never
//! reach playback state.

use std::rc::Rc;

use serde::Deserialize;
use serde_json::Value;

use crate::config;

/// Action types understood by the native bridge
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NativeAction {
  Analytics,
  Close,
  Retry,
  Loaded,
  Play,
  Pause,
  Threshold,
  Completed,
}

impl NativeAction {
  pub fn as_str(&self) -> &'static str {
    match self {
      Self::Analytics => "ANALYTICS",
      Self::Close => "CLOSE",
      Self::Retry => "RETRY",
      Self::Loaded => "LOADED",
      Self::Play => "PLAY",
      Self::Pause => "PAUSE",
      Self::Threshold => "THRESHOLD",
      Self::Completed => "COMPLETED",
    }
  }

  pub fn from_str(s: &str) -> Option<Self> {
    match s {
      "ANALYTICS" => Some(Self::Analytics),
      "CLOSE" => Some(Self::Close),
      "RETRY" => Some(Self::Retry),
      "LOADED" => Some(Self::Loaded),
      "PLAY" => Some(Self::Play),
      "PAUSE" => Some(Self::Pause),
      "THRESHOLD" => Some(Self::Threshold),
      "COMPLETED" => Some(Self::Completed),
      _ => None,
    }
  }
}

/// Events emitted by the embedded player
#[derive(Debug, Clone, PartialEq)]
pub enum PlayerEvent {
  Loaded(Value),
  Play(Value),
  Pause(Value),
  /// `percent` is the watched fraction, 0.0 to 1.0
  TimeUpdate { percent: f64, data: Value },
  Ended(Value),
  Error(Value),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SinkError(pub String);

impl std::fmt::Display for SinkError {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    write!(f, "telemetry sink error: {}", self.0)
  }
}

impl std::error::Error for SinkError {}

/// The externally injected bridge: `dispatch(type, payload)` and `error(payload)`
pub trait TelemetrySink {
  fn dispatch(&self, action: NativeAction, payload: &Value) -> Result<(), SinkError>;
  fn error(&self, payload: &Value) -> Result<(), SinkError>;
}

/// Maps player events onto bridge calls for one player instance
pub struct TelemetryForwarder {
  bridge: Option<Rc<dyn TelemetrySink>>,
  threshold: f64,
  threshold_sent: bool,
}

impl TelemetryForwarder {
  pub fn new(bridge: Option<Rc<dyn TelemetrySink>>) -> Self {
    Self::with_threshold(bridge, config::WATCH_THRESHOLD)
  }

  pub fn with_threshold(bridge: Option<Rc<dyn TelemetrySink>>, threshold: f64) -> Self {
    Self {
      bridge,
      threshold,
      threshold_sent: false,
    }
  }

  /// Start over for a fresh player instance
  pub fn reset(&mut self) {
    self.threshold_sent = false;
  }

  pub fn forward(&mut self, event: &PlayerEvent) {
    match event {
      PlayerEvent::Loaded(data) => {
        self.analytics("WVP_LOADED");
        self.send(NativeAction::Loaded, data);
      }
      PlayerEvent::Play(data) => self.send(NativeAction::Play, data),
      PlayerEvent::Pause(data) => self.send(NativeAction::Pause, data),
      PlayerEvent::TimeUpdate { percent, data } => {
        if *percent >= self.threshold && !self.threshold_sent {
          self.threshold_sent = true;
          self.send(NativeAction::Threshold, data);
        }
      }
      PlayerEvent::Ended(data) => {
        self.analytics("WVP_COMPLETED");
        self.send(NativeAction::Completed, data);
      }
      PlayerEvent::Error(data) => {
        self.analytics("WVP_ERROR");
        match &self.bridge {
          Some(bridge) => {
            if let Err(e) = bridge.error(data) {
              tracing::warn!("Dropping player error report: {}", e);
            }
          }
          None => tracing::warn!("[telemetry] player error: {}", data),
        }
      }
    }
  }

  fn analytics(&self, name: &str) {
    self.send(NativeAction::Analytics, &Value::String(name.to_string()));
  }

  fn send(&self, action: NativeAction, payload: &Value) {
    match &self.bridge {
      Some(bridge) => {
        if let Err(e) = bridge.dispatch(action, payload) {
          tracing::warn!("Dropping {} event: {}", action.as_str(), e);
        }
      }
      None => tracing::info!("[telemetry] {}: {}", action.as_str(), payload),
    }
  }
}

/// Server-side bridge that records events in the application log
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl TelemetrySink for TracingSink {
  fn dispatch(&self, action: NativeAction, payload: &Value) -> Result<(), SinkError> {
    tracing::info!(action = action.as_str(), %payload, "player telemetry");
    Ok(())
  }

  fn error(&self, payload: &Value) -> Result<(), SinkError> {
    tracing::warn!(%payload, "player error");
    Ok(())
  }
}

/// JSON body posted by the browser-side player: `{ "type": ..., "payload": ... }`
#[derive(Debug, Clone, Deserialize)]
pub struct BridgeMessage {
  #[serde(rename = "type")]
  pub kind: String,
  #[serde(default)]
  pub payload: Value,
}

impl BridgeMessage {
  /// Deliver to a sink. `ERROR` goes to the error channel.
  pub fn deliver(&self, sink: &dyn TelemetrySink) -> Result<(), SinkError> {
    if self.kind == "ERROR" {
      return sink.error(&self.payload);
    }
    let action = NativeAction::from_str(&self.kind)
      .ok_or_else(|| SinkError(format!("unknown action type '{}'", self.kind)))?;
    sink.dispatch(action, &self.payload)
  }
}

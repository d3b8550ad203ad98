//! Embedded video playback: activation, fullscreen and orientation handling,
//! the auto-hiding control overlay, and telemetry forwarding.
//!
//! The controller is platform-agnostic. The browser side (or a test double)
//! implements [`Platform`], [`Timers`] and [`DocumentEvents`] and feeds input
//! back in through the `on_*` methods.

pub mod controller;
pub mod listeners;
pub mod overlay;
pub mod platform;
pub mod telemetry;

pub use controller::{Activation, ControllerSettings, Host, UserGesture, VideoController};
pub use listeners::{DocumentEvents, FullscreenEvent, FullscreenSubscription, ListenerId};
pub use overlay::{ControlOverlay, TimerId, Timers, Visibility};
pub use platform::{Attempt, DeviceProfile, Orientation, Platform};
pub use telemetry::{
  BridgeMessage, NativeAction, PlayerEvent, SinkError, TelemetryForwarder, TelemetrySink,
  TracingSink,
};

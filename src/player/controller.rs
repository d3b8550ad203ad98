//! Video playback controller.
//!
//! Reconciles three independent dimensions for one embedded player:
//! activation (`Idle`/`Active`), fullscreen (observed from the document's
//! fullscreen-change signal, never assumed), and the control overlay
//! (`Shown`/`Hidden`, only live while fullscreen).
//!
//! Fullscreen is only ever requested from [`VideoController::activate`], which
//! takes a [`UserGesture`]. Events coming back from the embedded player are
//! telemetry and cannot reach that path.

use std::rc::Rc;
use std::time::Duration;

use super::listeners::{DocumentEvents, FullscreenSubscription};
use super::overlay::{ControlOverlay, TimerId, Timers, Visibility};
use super::platform::{Attempt, DeviceProfile, Orientation, Platform};
use super::telemetry::{PlayerEvent, TelemetryForwarder, TelemetrySink};
use crate::config;

/// Everything the controller needs from its environment
pub trait Host: Platform + Timers + DocumentEvents {}

impl<T: Platform + Timers + DocumentEvents> Host for T {}

/// Proof that the caller is running inside a tap or click handler.
///
/// Browsers only honour fullscreen requests made synchronously from a user
/// gesture. The value is consumed by [`VideoController::activate`], so one
/// gesture starts playback at most once.
#[derive(Debug)]
pub struct UserGesture {
  _private: (),
}

impl UserGesture {
  /// For input adapters only: call from inside a touch handler, never from
  /// timers, message handlers or other async continuations.
  pub fn tap() -> Self {
    Self { _private: () }
  }

  /// Mouse counterpart of [`UserGesture::tap`], with the same restriction.
  pub fn click() -> Self {
    Self { _private: () }
  }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Activation {
  /// Dormant; mobile shows the tap-to-play overlay
  Idle,
  /// The user has started playback
  Active,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ControllerSettings {
  pub hide_delay: Duration,
  pub watch_threshold: f64,
}

impl Default for ControllerSettings {
  fn default() -> Self {
    Self {
      hide_delay: Duration::from_millis(config::CONTROLS_HIDE_DELAY_MS),
      watch_threshold: config::WATCH_THRESHOLD,
    }
  }
}

impl ControllerSettings {
  /// Settings with the hide delay clamped to the supported 3-5s window
  pub fn with_hide_delay_ms(ms: u64) -> Self {
    Self {
      hide_delay: Duration::from_millis(config::clamp_hide_delay_ms(ms)),
      ..Self::default()
    }
  }
}

pub struct VideoController<H: Host> {
  host: Rc<H>,
  mobile: bool,
  activation: Activation,
  fullscreen: bool,
  overlay: ControlOverlay,
  video_id: String,
  generation: u64,
  telemetry: TelemetryForwarder,
  subscription: Option<FullscreenSubscription<H>>,
}

impl<H: Host> VideoController<H> {
  /// Mount a controller for `video_id` and register the fullscreen listeners
  pub fn mount(
    host: Rc<H>,
    device: &DeviceProfile,
    video_id: &str,
    settings: ControllerSettings,
    bridge: Option<Rc<dyn TelemetrySink>>,
  ) -> Self {
    let subscription = FullscreenSubscription::subscribe(host.clone());
    let mobile = device.is_mobile();
    tracing::debug!("Mounting player for video {} (mobile: {})", video_id, mobile);

    Self {
      host,
      mobile,
      activation: Activation::Idle,
      fullscreen: false,
      overlay: ControlOverlay::new(settings.hide_delay),
      video_id: video_id.to_string(),
      generation: 0,
      telemetry: TelemetryForwarder::with_threshold(bridge, settings.watch_threshold),
      subscription: Some(subscription),
    }
  }

  pub fn activation(&self) -> Activation {
    self.activation
  }

  pub fn is_fullscreen(&self) -> bool {
    self.fullscreen
  }

  pub fn is_mobile(&self) -> bool {
    self.mobile
  }

  pub fn is_mounted(&self) -> bool {
    self.subscription.is_some()
  }

  pub fn controls(&self) -> Visibility {
    self.overlay.visibility()
  }

  pub fn pending_timer(&self) -> Option<TimerId> {
    self.overlay.pending_timer()
  }

  /// Mobile shows a tap-to-play layer over the dimmed player until activated
  pub fn shows_tap_overlay(&self) -> bool {
    self.mobile && self.activation == Activation::Idle
  }

  pub fn video_id(&self) -> &str {
    &self.video_id
  }

  /// Identifies the current player instance; events tagged with an older
  /// generation come from a destroyed player.
  pub fn generation(&self) -> u64 {
    self.generation
  }

  /// Start playback from a tap or click.
  ///
  /// On mobile this requests fullscreen and, once granted, a landscape lock.
  /// Either may fail; activation happens regardless.
  pub async fn activate(&mut self, _gesture: UserGesture) {
    if !self.is_mounted() {
      return;
    }
    self.activation = Activation::Active;

    if !self.mobile || self.fullscreen {
      return;
    }

    match self.host.request_fullscreen().await {
      Attempt::Ok => match self.host.lock_orientation(Orientation::Landscape).await {
        Attempt::Ok => tracing::debug!("Orientation locked to landscape"),
        other => tracing::warn!("Orientation lock failed: {}", other),
      },
      other => tracing::warn!("Fullscreen request failed: {}", other),
    }
  }

  /// The document reported a fullscreen change (standard or webkit variant).
  pub fn on_fullscreen_change(&mut self, is_fullscreen: bool) {
    if !self.is_mounted() || is_fullscreen == self.fullscreen {
      return;
    }
    self.fullscreen = is_fullscreen;

    if is_fullscreen {
      self.activation = Activation::Active;
      self.overlay.show(&*self.host);
    } else {
      let unlock = self.host.unlock_orientation();
      if !unlock.is_ok() {
        tracing::debug!("Orientation unlock skipped: {}", unlock);
      }
      self.overlay.reset(&*self.host);
      if self.mobile {
        self.activation = Activation::Idle;
      }
    }
  }

  /// Pointer or touch movement over the player
  pub fn on_pointer_activity(&mut self) {
    if self.fullscreen && self.is_mounted() {
      self.overlay.show(&*self.host);
    }
  }

  /// Explicit tap on the overlay toggles it
  pub fn on_overlay_tap(&mut self) {
    if self.fullscreen && self.is_mounted() {
      self.overlay.toggle(&*self.host);
    }
  }

  /// A scheduled timer fired
  pub fn on_timer(&mut self, id: TimerId) -> bool {
    self.is_mounted() && self.overlay.timer_fired(id)
  }

  /// An event from the embedded player. Only forwarded as telemetry.
  ///
  /// Returns false when the event belongs to a destroyed instance.
  pub fn on_player_event(&mut self, generation: u64, event: PlayerEvent) -> bool {
    if !self.is_mounted() || generation != self.generation {
      tracing::debug!("Ignoring stale player event from generation {}", generation);
      return false;
    }
    self.telemetry.forward(&event);
    true
  }

  /// Replace the underlying video, recreating the player instance.
  ///
  /// Returns the generation of the instance now current.
  pub fn change_video(&mut self, video_id: &str) -> u64 {
    if video_id == self.video_id || !self.is_mounted() {
      return self.generation;
    }
    tracing::debug!("Recreating player: {} -> {}", self.video_id, video_id);

    self.video_id = video_id.to_string();
    self.generation += 1;
    self.telemetry.reset();

    if self.fullscreen {
      self.activation = Activation::Active;
      self.overlay.show(&*self.host);
    } else {
      self.activation = Activation::Idle;
      self.overlay.reset(&*self.host);
    }
    self.generation
  }

  /// Cancel the pending timer and deregister every document listener.
  pub fn teardown(&mut self) {
    self.overlay.cancel_timer(&*self.host);
    if self.subscription.take().is_some() {
      tracing::debug!("Player for video {} torn down", self.video_id);
    }
  }
}

impl<H: Host> Drop for VideoController<H> {
  fn drop(&mut self) {
    self.teardown();
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::player::FullscreenEvent;
  use crate::testing::{FakeHost, HostCall, RecordingSink};
  use serde_json::json;

  const IPHONE: &str = "Mozilla/5.0 (iPhone; CPU iPhone OS 17_0 like Mac OS X)";
  const DESKTOP: &str = "Mozilla/5.0 (Macintosh; Intel Mac OS X 14_0)";

  fn mount(host: &Rc<FakeHost>, ua: &str) -> VideoController<FakeHost> {
    VideoController::mount(
      host.clone(),
      &DeviceProfile::from_user_agent(ua),
      "76979871",
      ControllerSettings::default(),
      None,
    )
  }

  fn position(calls: &[HostCall], wanted: &HostCall) -> usize {
    calls
      .iter()
      .position(|c| c == wanted)
      .unwrap_or_else(|| panic!("{:?} not in {:?}", wanted, calls))
  }

  #[test]
  fn test_mount_registers_listeners() {
    let host = Rc::new(FakeHost::new());
    let c = mount(&host, IPHONE);
    assert_eq!(host.listener_count(), 2);
    assert_eq!(host.listener_events(), FullscreenEvent::ALL.to_vec());
    assert_eq!(c.activation(), Activation::Idle);
    assert!(c.shows_tap_overlay());
  }

  #[test]
  fn test_desktop_shows_player_directly() {
    let host = Rc::new(FakeHost::new());
    let c = mount(&host, DESKTOP);
    assert!(!c.shows_tap_overlay());
  }

  #[tokio::test]
  async fn test_mobile_activation_locks_orientation_after_fullscreen() {
    let host = Rc::new(FakeHost::new());
    let mut c = mount(&host, IPHONE);
    c.activate(UserGesture::tap()).await;

    let calls = host.calls();
    let resolved = position(&calls, &HostCall::FullscreenResolved(Attempt::Ok));
    let lock = position(&calls, &HostCall::OrientationLockRequested(Orientation::Landscape));
    assert!(position(&calls, &HostCall::FullscreenRequested) < resolved);
    assert!(resolved < lock);
    assert_eq!(c.activation(), Activation::Active);
  }

  #[tokio::test]
  async fn test_denied_fullscreen_still_activates_without_lock() {
    let host = Rc::new(FakeHost::new().with_fullscreen(Attempt::Denied("not allowed".into())));
    let mut c = mount(&host, IPHONE);
    c.activate(UserGesture::tap()).await;

    assert_eq!(c.activation(), Activation::Active);
    assert!(!c.shows_tap_overlay());
    assert!(!host
      .calls()
      .iter()
      .any(|call| matches!(call, HostCall::OrientationLockRequested(_))));
  }

  #[tokio::test]
  async fn test_unsupported_orientation_lock_still_activates() {
    let host = Rc::new(FakeHost::new().with_orientation(Attempt::Unsupported));
    let mut c = mount(&host, IPHONE);
    c.activate(UserGesture::tap()).await;
    assert_eq!(c.activation(), Activation::Active);
    assert!(host
      .calls()
      .contains(&HostCall::OrientationLockResolved(Attempt::Unsupported)));
  }

  #[tokio::test]
  async fn test_desktop_activation_never_requests_fullscreen() {
    let host = Rc::new(FakeHost::new());
    let mut c = mount(&host, DESKTOP);
    c.activate(UserGesture::click()).await;
    assert_eq!(c.activation(), Activation::Active);
    assert!(!host.calls().contains(&HostCall::FullscreenRequested));
  }

  #[test]
  fn test_play_event_never_requests_fullscreen() {
    let host = Rc::new(FakeHost::new());
    let mut c = mount(&host, IPHONE);
    assert!(c.on_player_event(0, PlayerEvent::Play(json!({"seconds": 0}))));
    assert!(!host.calls().contains(&HostCall::FullscreenRequested));
    assert_eq!(c.activation(), Activation::Idle);
  }

  #[test]
  fn test_entering_fullscreen_shows_controls_and_schedules_hide() {
    let host = Rc::new(FakeHost::new());
    let mut c = mount(&host, IPHONE);
    c.on_fullscreen_change(true);

    assert!(c.is_fullscreen());
    assert_eq!(c.activation(), Activation::Active);
    assert_eq!(c.controls(), Visibility::Shown);
    assert_eq!(host.pending_timers().len(), 1);

    let id = c.pending_timer().unwrap();
    host.fire(id);
    assert!(c.on_timer(id));
    assert_eq!(c.controls(), Visibility::Hidden);
  }

  #[test]
  fn test_duplicate_change_signals_are_idempotent() {
    let host = Rc::new(FakeHost::new());
    let mut c = mount(&host, IPHONE);
    c.on_fullscreen_change(true);
    c.on_fullscreen_change(true);
    assert_eq!(host.pending_timers().len(), 1);
    assert_eq!(host.scheduled_count(), 1);
  }

  #[test]
  fn test_activity_reschedules_single_timer() {
    let host = Rc::new(FakeHost::new());
    let mut c = mount(&host, IPHONE);
    c.on_fullscreen_change(true);
    let first = c.pending_timer().unwrap();

    c.on_pointer_activity();
    c.on_pointer_activity();
    assert_eq!(host.pending_timers().len(), 1);
    assert_ne!(c.pending_timer(), Some(first));
    assert!(!c.on_timer(first));
    assert_eq!(c.controls(), Visibility::Shown);
  }

  #[test]
  fn test_activity_outside_fullscreen_is_ignored() {
    let host = Rc::new(FakeHost::new());
    let mut c = mount(&host, DESKTOP);
    c.on_pointer_activity();
    c.on_overlay_tap();
    assert!(host.pending_timers().is_empty());
    assert_eq!(c.controls(), Visibility::Shown);
  }

  #[test]
  fn test_tap_toggles_overlay() {
    let host = Rc::new(FakeHost::new());
    let mut c = mount(&host, IPHONE);
    c.on_fullscreen_change(true);

    c.on_overlay_tap();
    assert_eq!(c.controls(), Visibility::Hidden);
    assert!(host.pending_timers().is_empty());

    c.on_overlay_tap();
    assert_eq!(c.controls(), Visibility::Shown);
    assert_eq!(host.pending_timers().len(), 1);
  }

  #[tokio::test]
  async fn test_exit_fullscreen_on_mobile_returns_to_idle() {
    let host = Rc::new(FakeHost::new());
    let mut c = mount(&host, IPHONE);
    c.activate(UserGesture::tap()).await;
    c.on_fullscreen_change(true);
    c.on_fullscreen_change(false);

    assert!(!c.is_fullscreen());
    assert_eq!(c.activation(), Activation::Idle);
    assert!(c.shows_tap_overlay());
    assert_eq!(c.controls(), Visibility::Shown);
    assert!(host.pending_timers().is_empty());
    assert!(host.calls().contains(&HostCall::OrientationUnlocked));
  }

  #[tokio::test]
  async fn test_exit_fullscreen_on_desktop_stays_active() {
    let host = Rc::new(FakeHost::new());
    let mut c = mount(&host, DESKTOP);
    c.activate(UserGesture::click()).await;
    c.on_fullscreen_change(true);
    c.on_fullscreen_change(false);
    assert_eq!(c.activation(), Activation::Active);
  }

  #[test]
  fn test_failed_unlock_does_not_block_exit() {
    let host = Rc::new(FakeHost::new().with_unlock(Attempt::Unsupported));
    let mut c = mount(&host, IPHONE);
    c.on_fullscreen_change(true);
    c.on_fullscreen_change(false);
    assert!(!c.is_fullscreen());
    assert_eq!(c.activation(), Activation::Idle);
  }

  #[test]
  fn test_teardown_with_pending_timer_leaves_nothing_behind() {
    let host = Rc::new(FakeHost::new());
    let mut c = mount(&host, IPHONE);
    c.on_fullscreen_change(true);
    assert_eq!(host.pending_timers().len(), 1);

    c.teardown();
    assert!(host.pending_timers().is_empty());
    assert_eq!(host.listener_count(), 0);
    assert!(!c.is_mounted());

    c.teardown();
    assert_eq!(host.listener_count(), 0);
  }

  #[test]
  fn test_drop_tears_down() {
    let host = Rc::new(FakeHost::new());
    {
      let mut c = mount(&host, IPHONE);
      c.on_fullscreen_change(true);
    }
    assert!(host.pending_timers().is_empty());
    assert_eq!(host.listener_count(), 0);
  }

  #[test]
  fn test_events_after_teardown_are_ignored() {
    let host = Rc::new(FakeHost::new());
    let mut c = mount(&host, IPHONE);
    c.teardown();
    c.on_fullscreen_change(true);
    assert!(!c.is_fullscreen());
    assert!(!c.on_player_event(0, PlayerEvent::Pause(json!({}))));
  }

  #[test]
  fn test_change_video_recreates_instance_and_ignores_stale_events() {
    let host = Rc::new(FakeHost::new());
    let sink = Rc::new(RecordingSink::default());
    let mut c = VideoController::mount(
      host.clone(),
      &DeviceProfile::from_user_agent(DESKTOP),
      "111",
      ControllerSettings::default(),
      Some(sink.clone() as Rc<dyn TelemetrySink>),
    );
    let old = c.generation();

    assert_eq!(c.change_video("111"), old);
    let new = c.change_video("222");
    assert_ne!(new, old);
    assert_eq!(c.video_id(), "222");
    assert_eq!(c.activation(), Activation::Idle);

    assert!(!c.on_player_event(old, PlayerEvent::Play(json!({}))));
    assert!(sink.actions().is_empty());

    assert!(c.on_player_event(new, PlayerEvent::Play(json!({}))));
    assert_eq!(sink.actions(), vec!["PLAY:{}".to_string()]);
  }

  #[test]
  fn test_threshold_resets_with_new_instance() {
    let host = Rc::new(FakeHost::new());
    let sink = Rc::new(RecordingSink::default());
    let mut c = VideoController::mount(
      host.clone(),
      &DeviceProfile::from_user_agent(DESKTOP),
      "111",
      ControllerSettings::default(),
      Some(sink.clone() as Rc<dyn TelemetrySink>),
    );
    let watched = |p: f64| PlayerEvent::TimeUpdate { percent: p, data: json!(p) };

    c.on_player_event(0, watched(0.85));
    c.on_player_event(0, watched(0.9));
    let g = c.change_video("222");
    c.on_player_event(g, watched(0.95));

    assert_eq!(
      sink.actions(),
      vec!["THRESHOLD:0.85".to_string(), "THRESHOLD:0.95".to_string()]
    );
  }

  #[test]
  fn test_hide_delay_clamped() {
    assert_eq!(ControllerSettings::with_hide_delay_ms(10).hide_delay, Duration::from_secs(3));
    assert_eq!(ControllerSettings::with_hide_delay_ms(9000).hide_delay, Duration::from_secs(5));
  }
}

//! Auto-hiding control overlay shown while the player is fullscreen.

use std::time::Duration;

/// Handle for a scheduled one-shot timer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerId(pub u64);

/// One-shot timers. A fired timer is delivered back to the controller by id.
pub trait Timers {
  fn schedule(&self, delay: Duration) -> TimerId;
  fn cancel(&self, id: TimerId);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visibility {
  Shown,
  Hidden,
}

/// Two-state overlay owning at most one live hide timer.
///
/// Every transition cancels the current timer before optionally scheduling a
/// new one.
#[derive(Debug)]
pub struct ControlOverlay {
  visibility: Visibility,
  timer: Option<TimerId>,
  delay: Duration,
}

impl ControlOverlay {
  pub fn new(delay: Duration) -> Self {
    Self {
      visibility: Visibility::Shown,
      timer: None,
      delay,
    }
  }

  pub fn visibility(&self) -> Visibility {
    self.visibility
  }

  pub fn pending_timer(&self) -> Option<TimerId> {
    self.timer
  }

  pub fn cancel_timer<T: Timers + ?Sized>(&mut self, timers: &T) {
    if let Some(id) = self.timer.take() {
      timers.cancel(id);
    }
  }

  /// Show and restart the hide countdown
  pub fn show<T: Timers + ?Sized>(&mut self, timers: &T) {
    self.cancel_timer(timers);
    self.visibility = Visibility::Shown;
    self.timer = Some(timers.schedule(self.delay));
  }

  pub fn hide<T: Timers + ?Sized>(&mut self, timers: &T) {
    self.cancel_timer(timers);
    self.visibility = Visibility::Hidden;
  }

  pub fn toggle<T: Timers + ?Sized>(&mut self, timers: &T) {
    match self.visibility {
      Visibility::Shown => self.hide(timers),
      Visibility::Hidden => self.show(timers),
    }
  }

  /// Back to the resting state: shown, no countdown
  pub fn reset<T: Timers + ?Sized>(&mut self, timers: &T) {
    self.cancel_timer(timers);
    self.visibility = Visibility::Shown;
  }

  /// Handle a fired timer. Stale ids are ignored.
  pub fn timer_fired(&mut self, id: TimerId) -> bool {
    if self.timer != Some(id) {
      return false;
    }
    self.timer = None;
    self.visibility = Visibility::Hidden;
    true
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::testing::FakeHost;

  const DELAY: Duration = Duration::from_millis(4000);

  #[test]
  fn test_show_schedules_single_timer() {
    let host = FakeHost::new();
    let mut overlay = ControlOverlay::new(DELAY);
    overlay.show(&host);
    overlay.show(&host);
    overlay.show(&host);
    assert_eq!(host.pending_timers().len(), 1);
    assert_eq!(overlay.pending_timer(), host.pending_timers().first().copied());
  }

  #[test]
  fn test_timer_hides_overlay() {
    let host = FakeHost::new();
    let mut overlay = ControlOverlay::new(DELAY);
    overlay.show(&host);
    let id = overlay.pending_timer().unwrap();
    host.fire(id);
    assert!(overlay.timer_fired(id));
    assert_eq!(overlay.visibility(), Visibility::Hidden);
    assert!(overlay.pending_timer().is_none());
  }

  #[test]
  fn test_stale_timer_ignored() {
    let host = FakeHost::new();
    let mut overlay = ControlOverlay::new(DELAY);
    overlay.show(&host);
    let first = overlay.pending_timer().unwrap();
    overlay.show(&host);
    assert!(!overlay.timer_fired(first));
    assert_eq!(overlay.visibility(), Visibility::Shown);
  }

  #[test]
  fn test_toggle_cancels_and_reschedules() {
    let host = FakeHost::new();
    let mut overlay = ControlOverlay::new(DELAY);
    overlay.show(&host);

    overlay.toggle(&host);
    assert_eq!(overlay.visibility(), Visibility::Hidden);
    assert!(host.pending_timers().is_empty());

    overlay.toggle(&host);
    assert_eq!(overlay.visibility(), Visibility::Shown);
    assert_eq!(host.pending_timers().len(), 1);
  }

  #[test]
  fn test_reset_clears_timer() {
    let host = FakeHost::new();
    let mut overlay = ControlOverlay::new(DELAY);
    overlay.hide(&host);
    overlay.show(&host);
    overlay.reset(&host);
    assert_eq!(overlay.visibility(), Visibility::Shown);
    assert!(host.pending_timers().is_empty());
  }
}

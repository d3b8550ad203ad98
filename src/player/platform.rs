//! Browser capabilities the playback controller depends on.
//!
//! Fullscreen and orientation lock are unreliable across devices (iOS Safari
//! supports neither on arbitrary elements), so every call reports an
//! [`Attempt`] instead of failing. Call sites branch on it.

use std::future::Future;

use crate::config;

/// Outcome of a best-effort platform request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Attempt {
  Ok,
  /// The API does not exist on this platform
  Unsupported,
  /// The API exists but refused the request
  Denied(String),
}

impl Attempt {
  pub fn is_ok(&self) -> bool {
    matches!(self, Attempt::Ok)
  }
}

impl std::fmt::Display for Attempt {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match self {
      Attempt::Ok => write!(f, "ok"),
      Attempt::Unsupported => write!(f, "unsupported"),
      Attempt::Denied(reason) => write!(f, "denied: {}", reason),
    }
  }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
  Landscape,
  Portrait,
}

impl Orientation {
  pub fn as_str(&self) -> &'static str {
    match self {
      Orientation::Landscape => "landscape",
      Orientation::Portrait => "portrait",
    }
  }
}

/// Fullscreen and screen-orientation APIs.
///
/// The futures resolve when the platform settles the request (the browser
/// promise resolves or rejects).
pub trait Platform {
  fn request_fullscreen(&self) -> impl Future<Output = Attempt>;

  fn lock_orientation(&self, orientation: Orientation) -> impl Future<Output = Attempt>;

  fn unlock_orientation(&self) -> Attempt;
}

/// What the controller knows about the device it runs on
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeviceProfile {
  pub user_agent: String,
  pub viewport_width: Option<u32>,
}

const MOBILE_UA_MARKERS: [&str; 4] = ["iphone", "ipad", "ipod", "android"];

impl DeviceProfile {
  pub fn new(user_agent: impl Into<String>, viewport_width: Option<u32>) -> Self {
    Self {
      user_agent: user_agent.into(),
      viewport_width,
    }
  }

  pub fn from_user_agent(user_agent: &str) -> Self {
    Self::new(user_agent, None)
  }

  /// Phones and tablets, or any viewport narrower than the mobile breakpoint
  pub fn is_mobile(&self) -> bool {
    let ua = self.user_agent.to_lowercase();
    MOBILE_UA_MARKERS.iter().any(|m| ua.contains(m))
      || self
        .viewport_width
        .is_some_and(|w| w < config::MOBILE_MAX_WIDTH)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  const IPHONE_UA: &str =
    "Mozilla/5.0 (iPhone; CPU iPhone OS 17_0 like Mac OS X) AppleWebKit/605.1.15 Mobile/15E148";
  const DESKTOP_UA: &str =
    "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/126.0 Safari/537.36";

  #[test]
  fn test_mobile_user_agents() {
    assert!(DeviceProfile::from_user_agent(IPHONE_UA).is_mobile());
    assert!(DeviceProfile::from_user_agent("Mozilla/5.0 (Linux; Android 14; Pixel 8)").is_mobile());
    assert!(DeviceProfile::from_user_agent("Mozilla/5.0 (iPad; CPU OS 16_0)").is_mobile());
  }

  #[test]
  fn test_desktop_user_agent() {
    assert!(!DeviceProfile::from_user_agent(DESKTOP_UA).is_mobile());
    assert!(!DeviceProfile::default().is_mobile());
  }

  #[test]
  fn test_narrow_viewport_counts_as_mobile() {
    assert!(DeviceProfile::new(DESKTOP_UA, Some(500)).is_mobile());
    assert!(!DeviceProfile::new(DESKTOP_UA, Some(768)).is_mobile());
    assert!(!DeviceProfile::new(DESKTOP_UA, Some(1440)).is_mobile());
  }

  #[test]
  fn test_attempt_display() {
    assert_eq!(Attempt::Ok.to_string(), "ok");
    assert_eq!(Attempt::Unsupported.to_string(), "unsupported");
    assert_eq!(Attempt::Denied("no gesture".into()).to_string(), "denied: no gesture");
    assert!(!Attempt::Unsupported.is_ok());
  }
}

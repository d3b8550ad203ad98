//! Light/dark appearance preference, persisted in a cookie.

use axum_extra::extract::cookie::{Cookie, CookieJar};

use crate::config;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ThemeMode {
  Light,
  #[default]
  Dark,
}

impl ThemeMode {
  pub fn from_str(s: &str) -> Option<Self> {
    match s {
      "light" => Some(Self::Light),
      "dark" => Some(Self::Dark),
      _ => None,
    }
  }

  pub fn as_str(&self) -> &'static str {
    match self {
      Self::Light => "light",
      Self::Dark => "dark",
    }
  }

  pub fn toggled(self) -> Self {
    match self {
      Self::Light => Self::Dark,
      Self::Dark => Self::Light,
    }
  }

  /// Read the persisted preference; absent or unknown values give the default
  pub fn from_jar(jar: &CookieJar) -> Self {
    jar
      .get(config::THEME_COOKIE_NAME)
      .and_then(|c| Self::from_str(c.value()))
      .unwrap_or_default()
  }

  pub fn cookie(self) -> Cookie<'static> {
    Cookie::build((config::THEME_COOKIE_NAME, self.as_str()))
      .path("/")
      .http_only(false)
      .secure(false)
      .max_age(time::Duration::days(config::THEME_COOKIE_MAX_AGE_DAYS))
      .build()
  }
}

/// Flip the persisted mode and return the jar carrying the new cookie
pub fn toggle(jar: CookieJar) -> (CookieJar, ThemeMode) {
  let mode = ThemeMode::from_jar(&jar).toggled();
  tracing::debug!("Theme switched to {}", mode.as_str());
  (jar.add(mode.cookie()), mode)
}

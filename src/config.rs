//! Application configuration constants.
//!
//! Tunables for the server, the catalog source, the video player and the
//! theme cookie live here instead of being scattered through handlers.

use serde::Deserialize;
use std::path::PathBuf;

// ==================== Catalog Configuration ====================

/// Configuration file structure for config.toml
#[derive(Debug, Default, Deserialize)]
struct AppConfig {
  catalog: Option<CatalogConfig>,
}

#[derive(Debug, Deserialize)]
struct CatalogConfig {
  path: Option<String>,
}

/// Load the catalog override path with priority: config.toml > .env > embedded catalog.
///
/// Returns None when no override is configured, meaning the catalog compiled
/// into the binary is used.
pub fn load_catalog_path() -> Option<PathBuf> {
  // Load .env file if present
  let _ = dotenvy::dotenv();

  // Priority 1: config.toml
  if let Ok(contents) = std::fs::read_to_string("config.toml") {
    match toml::from_str::<AppConfig>(&contents) {
      Ok(config) => {
        if let Some(path) = config.catalog.and_then(|c| c.path) {
          tracing::info!("Using catalog from config.toml: {}", path);
          return Some(PathBuf::from(path));
        }
      }
      Err(e) => tracing::warn!("Ignoring malformed config.toml: {}", e),
    }
  }

  // Priority 2: .env CATALOG_PATH
  if let Ok(path) = std::env::var("CATALOG_PATH") {
    tracing::info!("Using catalog from CATALOG_PATH env: {}", path);
    return Some(PathBuf::from(path));
  }

  // Priority 3: curriculum.json inside an explicit DATA_DIR
  if std::env::var("DATA_DIR").is_ok() {
    let path = PathBuf::from(crate::paths::catalog_file());
    if path.exists() {
      tracing::info!("Using catalog from DATA_DIR: {}", path.display());
      return Some(path);
    }
  }

  tracing::info!("Using embedded catalog");
  None
}

// ==================== Server Configuration ====================

/// Server address to bind to
pub const SERVER_ADDR: &str = "0.0.0.0";

/// Default server port
pub const SERVER_PORT: u16 = 3000;

/// Server port, overridable with the PORT env var
pub fn server_port() -> u16 {
  std::env::var("PORT")
    .ok()
    .and_then(|p| p.parse().ok())
    .unwrap_or(SERVER_PORT)
}

/// Get the full server bind address
pub fn server_bind_addr() -> String {
  format!("{}:{}", SERVER_ADDR, server_port())
}

// ==================== Branding ====================

/// Shown in the library top bar
pub const SITE_NAME: &str = "AfterAcademy";

/// Publisher caption under material titles
pub const PUBLISHER: &str = "BeforeAcademy";

// ==================== Player Configuration ====================

/// Delay before the fullscreen control overlay hides itself
pub const CONTROLS_HIDE_DELAY_MS: u64 = 4000;

/// Allowed range for the hide delay
pub const CONTROLS_HIDE_DELAY_RANGE_MS: (u64, u64) = (3000, 5000);

/// Fraction of a video that counts as "watched"
pub const WATCH_THRESHOLD: f64 = 0.8;

/// Player accent color (hex, no leading #)
pub const PLAYER_ACCENT_COLOR: &str = "FF7739";

/// Embedded player base URL
pub const PLAYER_BASE_URL: &str = "https://player.vimeo.com/video";

/// Application id passed to the embedded player
pub const PLAYER_APP_ID: &str = "58479";

/// Viewports narrower than this are treated as mobile
pub const MOBILE_MAX_WIDTH: u32 = 768;

/// Clamp a requested hide delay into the supported window
pub fn clamp_hide_delay_ms(ms: u64) -> u64 {
  let (min, max) = CONTROLS_HIDE_DELAY_RANGE_MS;
  ms.clamp(min, max)
}

// ==================== Theme Configuration ====================

/// Cookie holding the light/dark preference
pub const THEME_COOKIE_NAME: &str = "themeMode";

/// Theme cookie lifetime in days
pub const THEME_COOKIE_MAX_AGE_DAYS: i64 = 365;

// ==================== Content Placeholders ====================

/// Shown for articles and problems with no body text
pub const EMPTY_BODY_PLACEHOLDER: &str = "Content coming soon.";

/// Shown for videos with neither a structured nor a legacy source
pub const MISSING_VIDEO_MESSAGE: &str = "Video source missing.";

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_clamp_hide_delay() {
    assert_eq!(clamp_hide_delay_ms(100), 3000);
    assert_eq!(clamp_hide_delay_ms(4000), 4000);
    assert_eq!(clamp_hide_delay_ms(60_000), 5000);
  }

  #[test]
  fn test_default_delay_within_range() {
    assert_eq!(clamp_hide_delay_ms(CONTROLS_HIDE_DELAY_MS), CONTROLS_HIDE_DELAY_MS);
  }

  #[test]
  fn test_config_toml_catalog_section_parses() {
    let config: AppConfig = toml::from_str("[catalog]\npath = \"data/custom.json\"\n").unwrap();
    assert_eq!(config.catalog.and_then(|c| c.path).as_deref(), Some("data/custom.json"));
  }
}

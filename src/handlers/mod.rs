pub mod browse;
pub mod reactions;
pub mod reader;
pub mod telemetry;
pub mod theme;
pub mod views;

use askama::Template;
use axum::{
  http::{header, HeaderMap, HeaderName, HeaderValue},
  response::Html,
  routing::{get, post},
  Router,
};
use axum_extra::extract::cookie::CookieJar;
use tower_http::{services::ServeDir, set_header::SetResponseHeaderLayer, trace::TraceLayer};

use crate::config;
use crate::paths;
use crate::player::DeviceProfile;
use crate::state::AppState;
use crate::theme::ThemeMode;

pub use browse::browse;
pub use reactions::react;
pub use reader::reader;
pub use telemetry::telemetry;
pub use theme::toggle_theme;

/// Extension trait for logging errors before discarding them
pub trait LogOnError<T> {
  /// Log the error at warn level and return None
  fn log_warn(self, context: &str) -> Option<T>;
  /// Log the error at warn level and return the default
  fn log_warn_default(self, context: &str) -> T
  where
    T: Default;
}

impl<T, E: std::fmt::Display> LogOnError<T> for std::result::Result<T, E> {
  fn log_warn(self, context: &str) -> Option<T> {
    match self {
      Ok(v) => Some(v),
      Err(e) => {
        tracing::warn!("{}: {}", context, e);
        None
      }
    }
  }

  fn log_warn_default(self, context: &str) -> T
  where
    T: Default,
  {
    match self {
      Ok(v) => v,
      Err(e) => {
        tracing::warn!("{}: {}", context, e);
        T::default()
      }
    }
  }
}

/// Shared top bar state for every full page
pub struct NavContext {
  pub site_name: &'static str,
  /// Active mode, written to `data-theme` on the root element
  pub theme: &'static str,
  pub toggle_label: &'static str,
  /// Where the theme toggle should land afterwards
  pub return_to: String,
}

impl NavContext {
  pub fn new(jar: &CookieJar, return_to: impl Into<String>) -> Self {
    let mode = ThemeMode::from_jar(jar);
    Self {
      site_name: config::SITE_NAME,
      theme: mode.as_str(),
      toggle_label: match mode {
        ThemeMode::Dark => "Light mode",
        ThemeMode::Light => "Dark mode",
      },
      return_to: return_to.into(),
    }
  }
}

/// Render a template, falling back to an empty body when rendering fails
pub fn render<T: Template>(template: &T) -> Html<String> {
  Html(template.render().log_warn_default("Template render failed"))
}

/// Device profile from the request's User-Agent and viewport client hint.
///
/// Browsers only send `Sec-CH-Viewport-Width` once opted in, so the page
/// re-checks its own width before relying on the result.
pub fn device_profile(headers: &HeaderMap) -> DeviceProfile {
  let header_str = |name: &str| headers.get(name).and_then(|v| v.to_str().ok());
  let ua = header_str(header::USER_AGENT.as_str()).unwrap_or_default();
  let width = header_str("sec-ch-viewport-width")
    .or_else(|| header_str("viewport-width"))
    .and_then(|v| v.trim().parse::<f64>().ok())
    .filter(|w| w.is_finite() && *w >= 0.0)
    .map(|w| w as u32);
  DeviceProfile::new(ua, width)
}

pub async fn health() -> &'static str {
  "ok"
}

pub fn router(state: AppState) -> Router {
  Router::new()
    .route("/", get(browse))
    .route("/material/{slug}", get(reader))
    .route("/material/{slug}/react", post(react))
    .route("/theme/toggle", post(toggle_theme))
    .route("/telemetry", post(telemetry))
    .route("/health", get(health))
    .nest_service("/static", ServeDir::new(paths::static_dir()))
    // Ask for the viewport width hint on subsequent requests
    .layer(SetResponseHeaderLayer::if_not_present(
      HeaderName::from_static("accept-ch"),
      HeaderValue::from_static("Sec-CH-Viewport-Width"),
    ))
    .layer(TraceLayer::new_for_http())
    .with_state(state)
}

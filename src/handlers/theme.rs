use axum::{
  response::{IntoResponse, Redirect},
  Form,
};
use axum_extra::extract::cookie::CookieJar;
use serde::Deserialize;

use crate::theme;

#[derive(Deserialize)]
pub struct ToggleForm {
  #[serde(default)]
  pub return_to: Option<String>,
}

/// Only same-site absolute paths; anything else (including `//host`) goes home
fn safe_return_path(return_to: Option<&str>) -> &str {
  match return_to {
    Some(path) if path.starts_with('/') && !path.starts_with("//") && !path.contains('\\') => path,
    _ => "/",
  }
}

/// `POST /theme/toggle`
pub async fn toggle_theme(jar: CookieJar, Form(form): Form<ToggleForm>) -> impl IntoResponse {
  let (jar, _mode) = theme::toggle(jar);
  let target = safe_return_path(form.return_to.as_deref());
  (jar, Redirect::to(target))
}

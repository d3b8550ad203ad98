//! Reaction bar fragment. Counts live in the page, not on the server: the
//! form carries the current counters and the response is the bar with one
//! of them bumped.

use askama::Template;
use axum::{
  extract::{Path, State},
  http::StatusCode,
  response::{Html, IntoResponse, Response},
  Form,
};
use serde::Deserialize;

use super::render;
use super::views::ReactionsView;
use crate::domain::{ReactionCounts, ReactionKind};
use crate::state::AppState;

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReactForm {
  pub kind: String,
  #[serde(default)]
  pub fire: u32,
  #[serde(default)]
  pub heart: u32,
  #[serde(default)]
  pub thumbs_up: u32,
  #[serde(default)]
  pub thumbs_down: u32,
}

impl ReactForm {
  fn counts(&self) -> ReactionCounts {
    ReactionCounts {
      fire: self.fire,
      heart: self.heart,
      thumbs_up: self.thumbs_up,
      thumbs_down: self.thumbs_down,
    }
  }
}

#[derive(Template)]
#[template(path = "partials/reactions.html")]
pub struct ReactionsFragment {
  pub reactions: ReactionsView,
}

/// `POST /material/{slug}/react`
pub async fn react(
  State(state): State<AppState>,
  Path(slug): Path<String>,
  Form(form): Form<ReactForm>,
) -> Response {
  if state.catalog.material_by_slug(&slug).is_none() {
    return (
      StatusCode::NOT_FOUND,
      Html("<p class=\"error\">Material not found</p>".to_string()),
    )
      .into_response();
  }
  let Some(kind) = ReactionKind::from_str(&form.kind) else {
    return (
      StatusCode::BAD_REQUEST,
      Html(format!("<p class=\"error\">Unknown reaction: {}</p>", html_escape::encode_text(&form.kind))),
    )
      .into_response();
  };

  let mut counts = form.counts();
  counts.react(kind);
  tracing::debug!("{} reacted {} -> {}", slug, kind.as_str(), counts.get(kind));

  render(&ReactionsFragment {
    reactions: ReactionsView::new(&slug, counts),
  })
  .into_response()
}

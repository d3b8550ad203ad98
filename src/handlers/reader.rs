use askama::Template;
use axum::{
  extract::{Path, State},
  http::{HeaderMap, StatusCode},
  response::{IntoResponse, Response},
};
use axum_extra::extract::cookie::CookieJar;

use super::views::{MaterialView, ReactionsView};
use super::{device_profile, render, NavContext};
use crate::navigation::DeepLink;
use crate::state::AppState;

#[derive(Template)]
#[template(path = "reader.html")]
pub struct ReaderTemplate {
  pub nav: NavContext,
  pub material: MaterialView,
  pub reactions: ReactionsView,
  /// Same material inside the browse view
  pub browse_href: String,
}

#[derive(Template)]
#[template(path = "not_found.html")]
pub struct NotFoundTemplate {
  pub nav: NavContext,
  pub message: &'static str,
}

/// `GET /material/{slug}`: standalone reader for one material
pub async fn reader(
  State(state): State<AppState>,
  Path(slug): Path<String>,
  jar: CookieJar,
  headers: HeaderMap,
) -> Response {
  let return_to = format!("/material/{}", urlencoding::encode(&slug));
  let catalog = &state.catalog;

  let Some(loc) = catalog.locate_slug(&slug) else {
    tracing::debug!("No material with slug '{}'", slug);
    let page = NotFoundTemplate {
      nav: NavContext::new(&jar, return_to),
      message: "Material not found",
    };
    return (StatusCode::NOT_FOUND, render(&page)).into_response();
  };

  let subject = &catalog.subjects()[loc.subject];
  let topic = &subject.topics[loc.topic];
  let material = &topic.subtopics[loc.subtopic].materials[loc.material];

  let page = ReaderTemplate {
    nav: NavContext::new(&jar, return_to),
    material: MaterialView::new(material, device_profile(&headers).is_mobile()),
    reactions: ReactionsView::for_material(material),
    browse_href: DeepLink::material(&subject.id, &topic.id, &material.id).href("/"),
  };
  render(&page).into_response()
}

//! The browse view: library, subject overview, topic overview or material,
//! depending on which deep-link keys resolve.

use askama::Template;
use axum::{
  extract::{rejection::QueryRejection, Query, State},
  http::HeaderMap,
  response::Html,
};
use axum_extra::extract::cookie::CookieJar;

use super::views::{
  sidebar, topic_cards, MaterialView, ReactionsView, SequenceView, SidebarSubject, SubjectCard, TopicCard,
  TopicOverview,
};
use super::{device_profile, render, NavContext};
use crate::navigation::{DeepLink, Navigator, View};
use crate::state::AppState;

#[derive(Template)]
#[template(path = "library.html")]
pub struct LibraryTemplate {
  pub nav: NavContext,
  pub title: String,
  pub description: String,
  pub subjects: Vec<SubjectCard>,
}

#[derive(Template)]
#[template(path = "subject.html")]
pub struct SubjectTemplate {
  pub nav: NavContext,
  pub back_href: String,
  pub back_label: &'static str,
  pub subject: SubjectCard,
  pub topics: Vec<TopicCard>,
  pub sidebar: Vec<SidebarSubject>,
}

#[derive(Template)]
#[template(path = "topic.html")]
pub struct TopicTemplate {
  pub nav: NavContext,
  pub back_href: String,
  pub back_label: &'static str,
  pub subject_title: String,
  pub overview: TopicOverview,
  pub sidebar: Vec<SidebarSubject>,
}

#[derive(Template)]
#[template(path = "material.html")]
pub struct MaterialTemplate {
  pub nav: NavContext,
  pub back_href: String,
  pub back_label: &'static str,
  pub subject_title: String,
  pub topic_title: String,
  pub material: MaterialView,
  pub reactions: ReactionsView,
  pub sequence: Option<SequenceView>,
  pub sidebar: Vec<SidebarSubject>,
}

/// `GET /?subject=&topic=&material=`
pub async fn browse(
  State(state): State<AppState>,
  query: Result<Query<DeepLink>, QueryRejection>,
  jar: CookieJar,
  headers: HeaderMap,
) -> Html<String> {
  // A query that doesn't deserialize (e.g. a repeated key) is just an unresolvable link
  let link = match query {
    Ok(Query(link)) => link,
    Err(e) => {
      tracing::debug!("Ignoring deep link query: {}", e);
      DeepLink::none()
    }
  };
  let nav = Navigator::from_link(state.catalog.clone(), &link);
  let page = NavContext::new(&jar, nav.link().href("/"));
  let back_href = nav.back_link().href("/");

  match nav.view() {
    View::Library => {
      let curriculum = nav.catalog().curriculum();
      render(&LibraryTemplate {
        nav: page,
        title: curriculum.title.clone(),
        description: curriculum.description.clone(),
        subjects: nav.catalog().subjects().iter().map(SubjectCard::from_subject).collect(),
      })
    }
    View::SubjectOverview => {
      let Some(subject) = nav.active_subject() else {
        return Html(String::new());
      };
      render(&SubjectTemplate {
        nav: page,
        back_href,
        back_label: nav.back_label(),
        subject: SubjectCard::from_subject(subject),
        topics: topic_cards(subject),
        sidebar: sidebar(&nav),
      })
    }
    View::TopicOverview => {
      let (Some(subject), Some(topic)) = (nav.active_subject(), nav.active_topic()) else {
        return Html(String::new());
      };
      render(&TopicTemplate {
        nav: page,
        back_href,
        back_label: nav.back_label(),
        subject_title: subject.title.clone(),
        overview: TopicOverview::new(subject, topic),
        sidebar: sidebar(&nav),
      })
    }
    View::Material => {
      let (Some(subject), Some(topic), Some(material)) =
        (nav.active_subject(), nav.active_topic(), nav.active_material())
      else {
        return Html(String::new());
      };
      let mobile = device_profile(&headers).is_mobile();
      render(&MaterialTemplate {
        nav: page,
        back_href,
        back_label: nav.back_label(),
        subject_title: subject.title.clone(),
        topic_title: topic.title.clone(),
        material: MaterialView::new(material, mobile),
        reactions: ReactionsView::for_material(material),
        sequence: SequenceView::from_nav(&nav),
        sidebar: sidebar(&nav),
      })
    }
  }
}

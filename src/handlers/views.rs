//! View models handed to the askama templates.
//!
//! Templates only see plain strings, flags and lists; every decision about
//! what to show is made here.

use crate::config;
use crate::domain::{LayoutHint, Material, ReactionCounts, Subject, Topic};
use crate::navigation::{DeepLink, Navigator};
use crate::player::ControllerSettings;
use crate::viewer::{reaction_chips, MaterialBody, PlayerOptions, ReactionChip};

pub struct SubjectCard {
  pub title: String,
  pub description: String,
  pub cover: Option<String>,
  pub score: Option<String>,
  pub topic_count: usize,
  pub material_count: usize,
  pub href: String,
}

impl SubjectCard {
  pub fn from_subject(subject: &Subject) -> Self {
    Self {
      title: subject.title.clone(),
      description: subject.description.clone().unwrap_or_default(),
      cover: subject.cover_img_url.clone(),
      score: subject.score_label(),
      topic_count: subject.topics.len(),
      material_count: subject.material_count(),
      href: DeepLink::subject(&subject.id).href("/"),
    }
  }
}

pub struct TopicCard {
  pub title: String,
  pub description: String,
  pub material_count: usize,
  pub href: String,
}

pub fn topic_cards(subject: &Subject) -> Vec<TopicCard> {
  let mut topics: Vec<&Topic> = subject.topics.iter().collect();
  topics.sort_by_key(|t| t.order);
  topics
    .into_iter()
    .map(|t| TopicCard {
      title: t.title.clone(),
      description: t.display_description(),
      material_count: t.material_count(),
      href: DeepLink::topic(&subject.id, &t.id).href("/"),
    })
    .collect()
}

pub struct MaterialLink {
  pub title: String,
  pub category: &'static str,
  pub difficulty: Option<&'static str>,
  pub href: String,
  pub active: bool,
}

pub struct SidebarTopic {
  pub title: String,
  pub href: String,
  pub active: bool,
  pub materials: Vec<MaterialLink>,
}

/// One collapsible subject section; only the active one starts open
pub struct SidebarSubject {
  pub title: String,
  pub href: String,
  pub active: bool,
  pub topics: Vec<SidebarTopic>,
}

fn material_links(subject: &Subject, topic: &Topic, active: Option<&str>) -> Vec<MaterialLink> {
  topic
    .materials()
    .map(|m| MaterialLink {
      title: m.title.clone(),
      category: m.category.as_str(),
      difficulty: m.difficulty.map(|d| d.as_str()),
      href: DeepLink::material(&subject.id, &topic.id, &m.id).href("/"),
      active: active == Some(m.id.as_str()),
    })
    .collect()
}

pub fn sidebar(nav: &Navigator) -> Vec<SidebarSubject> {
  let active_subject = nav.active_subject().map(|s| s.id.as_str());
  let active_topic = nav.active_topic().map(|t| t.id.as_str());
  let active_material = nav.active_material().map(|m| m.id.as_str());

  nav
    .catalog()
    .subjects()
    .iter()
    .map(|subject| {
      let subject_active = active_subject == Some(subject.id.as_str());
      let topics = subject
        .topics
        .iter()
        .map(|topic| SidebarTopic {
          title: topic.title.clone(),
          href: DeepLink::topic(&subject.id, &topic.id).href("/"),
          active: subject_active && active_topic == Some(topic.id.as_str()),
          materials: material_links(subject, topic, active_material.filter(|_| subject_active)),
        })
        .collect();
      SidebarSubject {
        title: subject.title.clone(),
        href: DeepLink::subject(&subject.id).href("/"),
        active: subject_active,
        topics,
      }
    })
    .collect()
}

pub struct SubtopicCard {
  pub number: usize,
  pub title: String,
  pub description: Option<String>,
  pub grid: bool,
  pub materials: Vec<MaterialLink>,
}

pub struct TopicOverview {
  pub title: String,
  pub heading: Option<String>,
  pub description: String,
  pub material_count: usize,
  pub subtopics: Vec<SubtopicCard>,
}

impl TopicOverview {
  pub fn new(subject: &Subject, topic: &Topic) -> Self {
    let subtopics = topic
      .subtopics
      .iter()
      .enumerate()
      .map(|(i, st)| SubtopicCard {
        number: i + 1,
        title: st.title.clone(),
        description: st.description.clone(),
        grid: st.layout == LayoutHint::Grid,
        materials: st
          .materials
          .iter()
          .map(|m| MaterialLink {
            title: m.title.clone(),
            category: m.category.as_str(),
            difficulty: m.difficulty.map(|d| d.as_str()),
            href: DeepLink::material(&subject.id, &topic.id, &m.id).href("/"),
            active: false,
          })
          .collect(),
      })
      .collect();

    Self {
      title: topic.title.clone(),
      heading: topic.heading.clone(),
      description: topic.display_description(),
      material_count: topic.material_count(),
      subtopics,
    }
  }
}

/// Reaction bar state; also the body of the reaction fragment
pub struct ReactionsView {
  pub slug: String,
  pub react_href: String,
  pub chips: Vec<ReactionChip>,
  pub counts: ReactionCounts,
}

impl ReactionsView {
  pub fn new(slug: &str, counts: ReactionCounts) -> Self {
    Self {
      slug: slug.to_string(),
      react_href: format!("/material/{}/react", urlencoding::encode(slug)),
      chips: reaction_chips(&counts),
      counts,
    }
  }

  /// Bar seeded with the catalog's initial counts
  pub fn for_material(material: &Material) -> Self {
    Self::new(&material.slug, material.initial_reactions())
  }
}

pub struct MaterialView {
  pub title: String,
  pub category: &'static str,
  pub is_video: bool,
  pub difficulty: Option<&'static str>,
  pub publisher: &'static str,
  pub companies: Vec<String>,
  /// "player", "legacy", "missing" or "text"
  pub body_kind: &'static str,
  pub embed_url: Option<String>,
  pub video_id: Option<String>,
  pub text: Option<String>,
  pub placeholder: bool,
  pub missing_message: &'static str,
  /// Server-side guess; the page falls back to its own viewport width
  pub mobile: bool,
  pub hide_delay_ms: u64,
  pub watch_threshold: f64,
  pub reader_href: Option<String>,
}

impl MaterialView {
  pub fn new(material: &Material, mobile: bool) -> Self {
    let body = MaterialBody::for_material(material, &PlayerOptions::default());
    let body_kind = body.kind();
    let settings = ControllerSettings::default();
    let (embed_url, video_id, text, placeholder) = match body {
      MaterialBody::Player { video_id, embed_url } => (Some(embed_url), Some(video_id), None, false),
      MaterialBody::LegacyFrame { embed_url } => (Some(embed_url), None, None, false),
      MaterialBody::VideoMissing => (None, None, None, false),
      MaterialBody::Text { body, placeholder } => (None, None, Some(body), placeholder),
    };

    Self {
      title: material.title.clone(),
      category: material.category.as_str(),
      is_video: material.is_video(),
      difficulty: material.difficulty.map(|d| d.as_str()),
      publisher: config::PUBLISHER,
      companies: material.companies.clone(),
      body_kind,
      mobile,
      hide_delay_ms: settings.hide_delay.as_millis() as u64,
      watch_threshold: settings.watch_threshold,
      embed_url,
      video_id,
      text,
      placeholder,
      missing_message: config::MISSING_VIDEO_MESSAGE,
      reader_href: (!material.is_video()).then(|| format!("/material/{}", urlencoding::encode(&material.slug))),
    }
  }
}

/// Previous/next controls and topic progress
pub struct SequenceView {
  pub prev_href: Option<String>,
  pub next_href: Option<String>,
  pub position: String,
  pub completion: u8,
}

impl SequenceView {
  pub fn from_nav(nav: &Navigator) -> Option<Self> {
    let seq = nav.sequence()?;
    Some(Self {
      prev_href: nav.neighbour_link(false).map(|l| l.href("/")),
      next_href: nav.neighbour_link(true).map(|l| l.href("/")),
      position: seq.position_label(),
      completion: seq.completion_percent(),
    })
  }
}

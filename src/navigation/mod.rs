//! Navigation controller: the learner's current position in the catalog.
//!
//! Selection is a stack of at most three levels (subject, topic, material).
//! Every successful navigation action mirrors the selection into the query
//! string and records one history entry. Reconstructing from a query string
//! never fails: anything that does not resolve lands on the library view.

pub mod query;

pub use query::DeepLink;

use std::sync::Arc;

use crate::content::Catalog;
use crate::domain::{Material, Subject, Topic};
use crate::viewer::MaterialSequence;

/// Which level of the tree is on screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
  Library,
  SubjectOverview,
  TopicOverview,
  Material,
}

#[derive(Debug, Clone)]
pub struct Navigator {
  catalog: Arc<Catalog>,
  subject: Option<usize>,
  topic: Option<usize>,
  /// Index into the active topic's flattened material list
  material: Option<usize>,
  history: Vec<String>,
  scroll_to_top: bool,
}

impl Navigator {
  pub fn new(catalog: Arc<Catalog>) -> Self {
    Self {
      catalog,
      subject: None,
      topic: None,
      material: None,
      history: Vec::new(),
      scroll_to_top: false,
    }
  }

  /// Build a navigator already positioned at `link`
  pub fn from_link(catalog: Arc<Catalog>, link: &DeepLink) -> Self {
    let mut nav = Self::new(catalog);
    nav.sync_from_query(link);
    nav
  }

  pub fn catalog(&self) -> &Catalog {
    &self.catalog
  }

  pub fn active_subject(&self) -> Option<&Subject> {
    self.catalog.subjects().get(self.subject?)
  }

  pub fn active_topic(&self) -> Option<&Topic> {
    self.active_subject()?.topics.get(self.topic?)
  }

  pub fn active_material(&self) -> Option<&Material> {
    self.active_topic()?.material_at(self.material?)
  }

  pub fn view(&self) -> View {
    match (self.subject, self.topic, self.material) {
      (None, _, _) => View::Library,
      (Some(_), None, _) => View::SubjectOverview,
      (Some(_), Some(_), None) => View::TopicOverview,
      (Some(_), Some(_), Some(_)) => View::Material,
    }
  }

  /// Current selection as a deep link
  pub fn link(&self) -> DeepLink {
    DeepLink {
      subject: self.active_subject().map(|s| s.id.clone()),
      topic: self.active_topic().map(|t| t.id.clone()),
      material: self.active_material().map(|m| m.id.clone()),
    }
  }

  pub fn history(&self) -> &[String] {
    &self.history
  }

  /// Consume the pending scroll-to-top request raised by `select_subject`
  pub fn take_scroll_to_top(&mut self) -> bool {
    std::mem::take(&mut self.scroll_to_top)
  }

  fn push_history(&mut self) {
    let entry = self.link().to_query_string();
    tracing::debug!("navigate: {}", if entry.is_empty() { "/" } else { &entry });
    self.history.push(entry);
  }

  /// Select a subject, clearing any topic and material.
  ///
  /// Returns false (and changes nothing) when the id is unknown.
  pub fn select_subject(&mut self, id: &str) -> bool {
    let Some(index) = self.catalog.subject_index(id) else {
      return false;
    };
    self.subject = Some(index);
    self.topic = None;
    self.material = None;
    self.scroll_to_top = true;
    self.push_history();
    true
  }

  /// Select a topic of the active subject, clearing any material.
  pub fn select_topic(&mut self, id: &str) -> bool {
    let Some(index) = self
      .active_subject()
      .and_then(|s| s.topics.iter().position(|t| t.id == id))
    else {
      return false;
    };
    self.topic = Some(index);
    self.material = None;
    self.push_history();
    true
  }

  /// Select a material of the active topic (flattened across subtopics).
  pub fn select_material(&mut self, id: &str) -> bool {
    let Some(index) = self.active_topic().and_then(|t| t.material_index(id)) else {
      return false;
    };
    self.material = Some(index);
    self.push_history();
    true
  }

  /// Pop one level: material, then topic, then subject.
  ///
  /// Returns false when already at the library view.
  pub fn go_back(&mut self) -> bool {
    if self.material.is_some() {
      self.material = None;
    } else if self.topic.is_some() {
      self.topic = None;
    } else if self.subject.is_some() {
      self.subject = None;
    } else {
      return false;
    }
    self.push_history();
    true
  }

  /// Re-derive the selection after an external query change.
  ///
  /// Every present key must resolve inside its parent; otherwise the
  /// selection falls back to the library view. No history entry is recorded
  /// because the host already owns this navigation.
  pub fn sync_from_query(&mut self, link: &DeepLink) {
    match self.resolve(link) {
      Some((subject, topic, material)) => {
        self.subject = subject;
        self.topic = topic;
        self.material = material;
      }
      None => {
        if !link.is_empty() {
          tracing::debug!("Unresolvable deep link {:?}, showing library", link);
        }
        self.subject = None;
        self.topic = None;
        self.material = None;
      }
    }
  }

  #[allow(clippy::type_complexity)]
  fn resolve(&self, link: &DeepLink) -> Option<(Option<usize>, Option<usize>, Option<usize>)> {
    let Some(subject_id) = link.subject.as_deref() else {
      return link.is_empty().then_some((None, None, None));
    };
    let si = self.catalog.subject_index(subject_id)?;
    let subject = &self.catalog.subjects()[si];

    let Some(topic_id) = link.topic.as_deref() else {
      return link.material.is_none().then_some((Some(si), None, None));
    };
    let ti = subject.topics.iter().position(|t| t.id == topic_id)?;

    let Some(material_id) = link.material.as_deref() else {
      return Some((Some(si), Some(ti), None));
    };
    let mi = subject.topics[ti].material_index(material_id)?;
    Some((Some(si), Some(ti), Some(mi)))
  }

  /// Position of the active material within its topic
  pub fn sequence(&self) -> Option<MaterialSequence> {
    let topic = self.active_topic()?;
    MaterialSequence::new(self.material?, topic.material_count())
  }

  /// Link that the next/previous control would navigate to
  pub fn neighbour_link(&self, forward: bool) -> Option<DeepLink> {
    let seq = self.sequence()?;
    let index = if forward { seq.next_index()? } else { seq.prev_index()? };
    let topic = self.active_topic()?;
    let material = topic.material_at(index)?;
    Some(DeepLink::material(&self.active_subject()?.id, &topic.id, &material.id))
  }

  /// Advance to the next material; no-op at the end of the topic
  pub fn next_material(&mut self) -> bool {
    self.step(true)
  }

  /// Go back to the previous material; no-op at the start of the topic
  pub fn prev_material(&mut self) -> bool {
    self.step(false)
  }

  fn step(&mut self, forward: bool) -> bool {
    match self.neighbour_link(forward).and_then(|l| l.material) {
      Some(id) => self.select_material(&id),
      None => false,
    }
  }

  /// Label for the top bar back button
  pub fn back_label(&self) -> &'static str {
    if self.topic.is_some() || self.material.is_some() {
      "Back to Overview"
    } else {
      "Back to Library"
    }
  }

  /// Where the back button leads, without changing this navigator
  pub fn back_link(&self) -> DeepLink {
    let mut copy = self.clone();
    copy.go_back();
    copy.link()
  }
}

use serde::{Deserialize, Serialize};

use super::material::Material;

/// How a subtopic lists its materials
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LayoutHint {
  #[default]
  List,
  Grid,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Curriculum {
  #[serde(rename = "_id")]
  pub id: String,
  pub title: String,
  #[serde(default)]
  pub slug: String,
  #[serde(default)]
  pub description: String,
  #[serde(default)]
  pub subjects: Vec<Subject>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Subject {
  #[serde(rename = "_id")]
  pub id: String,
  pub title: String,
  #[serde(default)]
  pub slug: String,
  #[serde(default)]
  pub description: Option<String>,
  #[serde(default)]
  pub cover_img_url: Option<String>,
  /// Rating out of 5
  #[serde(default)]
  pub score: Option<f32>,
  #[serde(default)]
  pub topics: Vec<Topic>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Topic {
  #[serde(rename = "_id")]
  pub id: String,
  pub title: String,
  pub slug: String,
  #[serde(default)]
  pub description: Option<String>,
  #[serde(default)]
  pub heading: Option<String>,
  #[serde(default)]
  pub subheading: Option<String>,
  #[serde(default)]
  pub order: u32,
  #[serde(default)]
  pub subtopics: Vec<Subtopic>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Subtopic {
  #[serde(rename = "_id")]
  pub id: String,
  pub title: String,
  #[serde(default)]
  pub description: Option<String>,
  #[serde(default)]
  pub layout: LayoutHint,
  #[serde(default)]
  pub materials: Vec<Material>,
}

impl Subject {
  pub fn topic(&self, id: &str) -> Option<&Topic> {
    self.topics.iter().find(|t| t.id == id)
  }

  pub fn material_count(&self) -> usize {
    self.topics.iter().map(Topic::material_count).sum()
  }

  /// Score formatted for the subject card, e.g. "4.8"
  pub fn score_label(&self) -> Option<String> {
    self.score.map(|s| format!("{:.1}", s))
  }
}

impl Topic {
  /// Materials in sequence order, flattened across subtopics
  pub fn materials(&self) -> impl Iterator<Item = &Material> {
    self.subtopics.iter().flat_map(|st| st.materials.iter())
  }

  pub fn material_count(&self) -> usize {
    self.subtopics.iter().map(|st| st.materials.len()).sum()
  }

  /// Position of a material in the flattened sequence
  pub fn material_index(&self, id: &str) -> Option<usize> {
    self.materials().position(|m| m.id == id)
  }

  pub fn material_at(&self, index: usize) -> Option<&Material> {
    self.materials().nth(index)
  }

  pub fn display_description(&self) -> String {
    self
      .description
      .clone()
      .unwrap_or_else(|| format!("Conceptual deep dive into {}.", self.title))
  }
}

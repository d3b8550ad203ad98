use serde::{Deserialize, Serialize};

use super::reaction::ReactionCounts;

/// What kind of learnable unit a material is
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MaterialCategory {
  Video,
  Article,
  Problem,
}

impl MaterialCategory {
  pub fn as_str(&self) -> &'static str {
    match self {
      Self::Video => "video",
      Self::Article => "article",
      Self::Problem => "problem",
    }
  }
}

impl std::fmt::Display for MaterialCategory {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    write!(f, "{}", self.as_str())
  }
}

impl std::str::FromStr for MaterialCategory {
  type Err = String;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s.to_lowercase().as_str() {
      "video" => Ok(Self::Video),
      "article" => Ok(Self::Article),
      "problem" => Ok(Self::Problem),
      _ => Err(format!("Invalid material category: {}", s)),
    }
  }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
  Easy,
  Medium,
  Hard,
}

impl Difficulty {
  pub fn as_str(&self) -> &'static str {
    match self {
      Self::Easy => "easy",
      Self::Medium => "medium",
      Self::Hard => "hard",
    }
  }
}

/// Structured reference to a video hosted by the embedded player provider
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoRef {
  pub vimeo_id: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Material {
  #[serde(rename = "_id")]
  pub id: String,
  pub title: String,
  pub slug: String,
  pub category: MaterialCategory,
  #[serde(default)]
  pub difficulty: Option<Difficulty>,
  #[serde(default)]
  pub description: Option<String>,
  /// Body text for articles and problems
  #[serde(default)]
  pub content: Option<String>,
  #[serde(default)]
  pub solution: Option<String>,
  #[serde(default)]
  pub video: Vec<VideoRef>,
  /// Legacy external watch URL, used when no structured video exists
  #[serde(default)]
  pub path: Option<String>,
  #[serde(default)]
  pub companies: Vec<String>,
  #[serde(default)]
  pub reactions: Option<ReactionCounts>,
}

impl Material {
  pub fn is_video(&self) -> bool {
    self.category == MaterialCategory::Video
  }

  /// First non-empty provider video id, if this is a video with a structured reference
  pub fn structured_video_id(&self) -> Option<&str> {
    if !self.is_video() {
      return None;
    }
    self
      .video
      .first()
      .map(|v| v.vimeo_id.trim())
      .filter(|id| !id.is_empty())
  }

  pub fn legacy_path(&self) -> Option<&str> {
    non_empty(self.path.as_deref())
  }

  /// Video materials need at least one playable source
  pub fn has_video_source(&self) -> bool {
    self.structured_video_id().is_some() || self.legacy_path().is_some()
  }

  /// Readable body: content, then solution
  pub fn body_text(&self) -> Option<&str> {
    non_empty(self.content.as_deref()).or_else(|| non_empty(self.solution.as_deref()))
  }

  pub fn initial_reactions(&self) -> ReactionCounts {
    self.reactions.unwrap_or_default()
  }
}

fn non_empty(s: Option<&str>) -> Option<&str> {
  s.filter(|s| !s.trim().is_empty())
}

#[cfg(test)]
mod tests {
  use super::*;

  fn material(category: MaterialCategory) -> Material {
    Material {
      id: "m-1".to_string(),
      title: "Closures".to_string(),
      slug: "closures".to_string(),
      category,
      difficulty: None,
      description: None,
      content: None,
      solution: None,
      video: Vec::new(),
      path: None,
      companies: Vec::new(),
      reactions: None,
    }
  }

  #[test]
  fn test_category_from_str() {
    assert_eq!("video".parse::<MaterialCategory>(), Ok(MaterialCategory::Video));
    assert_eq!("Article".parse::<MaterialCategory>(), Ok(MaterialCategory::Article));
    assert_eq!("problem".parse::<MaterialCategory>(), Ok(MaterialCategory::Problem));
    assert!("podcast".parse::<MaterialCategory>().is_err());
  }

  #[test]
  fn test_category_deserializes_lowercase() {
    let c: MaterialCategory = serde_json::from_str("\"video\"").unwrap();
    assert_eq!(c, MaterialCategory::Video);
  }

  #[test]
  fn test_structured_video_id_requires_video_category() {
    let mut m = material(MaterialCategory::Article);
    m.video = vec![VideoRef { vimeo_id: "76979871".to_string() }];
    assert_eq!(m.structured_video_id(), None);

    m.category = MaterialCategory::Video;
    assert_eq!(m.structured_video_id(), Some("76979871"));
  }

  #[test]
  fn test_blank_video_id_is_not_a_source() {
    let mut m = material(MaterialCategory::Video);
    m.video = vec![VideoRef { vimeo_id: "  ".to_string() }];
    m.path = Some(String::new());
    assert!(!m.has_video_source());
  }

  #[test]
  fn test_body_text_prefers_content_then_solution() {
    let mut m = material(MaterialCategory::Problem);
    assert_eq!(m.body_text(), None);

    m.solution = Some("use a closure".to_string());
    assert_eq!(m.body_text(), Some("use a closure"));

    m.content = Some("".to_string());
    assert_eq!(m.body_text(), Some("use a closure"));

    m.content = Some("Write a counter".to_string());
    assert_eq!(m.body_text(), Some("Write a counter"));
  }

  #[test]
  fn test_material_deserializes_from_catalog_json() {
    let json = r#"{
      "_id": "m-9",
      "title": "Intro",
      "slug": "intro-video",
      "category": "video",
      "difficulty": "medium",
      "video": [{ "vimeoId": "123" }],
      "reactions": { "fire": 2, "thumbsUp": 5 }
    }"#;
    let m: Material = serde_json::from_str(json).unwrap();
    assert_eq!(m.id, "m-9");
    assert_eq!(m.difficulty, Some(Difficulty::Medium));
    assert_eq!(m.structured_video_id(), Some("123"));
    let r = m.initial_reactions();
    assert_eq!((r.fire, r.heart, r.thumbs_up, r.thumbs_down), (2, 0, 5, 0));
  }
}

//! Immutable curriculum catalog.
//!
//! The catalog is parsed and validated once at startup, then shared behind an
//! `Arc` with every reader. Nothing mutates it afterwards.

use std::collections::{HashMap, HashSet};
use std::fs;
use std::path::Path;

use crate::domain::{Curriculum, Material, Subject};

/// Catalog compiled into the binary
const EMBEDDED_CATALOG: &str = include_str!("../../data/curriculum.json");

/// Where a material sits in the tree
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MaterialLocation {
  pub subject: usize,
  pub topic: usize,
  pub subtopic: usize,
  pub material: usize,
}

#[derive(Debug)]
pub struct Catalog {
  curriculum: Curriculum,
  by_slug: HashMap<String, MaterialLocation>,
}

impl Catalog {
  /// Validate a curriculum tree and build the slug index.
  pub fn from_curriculum(curriculum: Curriculum) -> Result<Self, CatalogError> {
    let mut by_slug = HashMap::new();
    let mut subject_ids = HashSet::new();
    let mut topic_ids = HashSet::new();
    let mut material_ids = HashSet::new();

    for (si, subject) in curriculum.subjects.iter().enumerate() {
      if !subject_ids.insert(subject.id.as_str()) {
        return Err(CatalogError::DuplicateId("subject", subject.id.clone()));
      }
      for (ti, topic) in subject.topics.iter().enumerate() {
        if !topic_ids.insert(topic.id.as_str()) {
          return Err(CatalogError::DuplicateId("topic", topic.id.clone()));
        }
        for (sti, subtopic) in topic.subtopics.iter().enumerate() {
          for (mi, material) in subtopic.materials.iter().enumerate() {
            if !material_ids.insert(material.id.as_str()) {
              return Err(CatalogError::DuplicateId("material", material.id.clone()));
            }
            let location = MaterialLocation {
              subject: si,
              topic: ti,
              subtopic: sti,
              material: mi,
            };
            if by_slug.insert(material.slug.clone(), location).is_some() {
              return Err(CatalogError::DuplicateSlug(material.slug.clone()));
            }
            if material.is_video() && !material.has_video_source() {
              tracing::warn!(
                "Video material '{}' has no source and will render as missing",
                material.slug
              );
            }
          }
        }
      }
    }

    Ok(Self { curriculum, by_slug })
  }

  pub fn from_json_str(json: &str) -> Result<Self, CatalogError> {
    let curriculum: Curriculum =
      serde_json::from_str(json).map_err(|e| CatalogError::ParseError(e.to_string()))?;
    Self::from_curriculum(curriculum)
  }

  pub fn load_file(path: &Path) -> Result<Self, CatalogError> {
    if !path.exists() {
      return Err(CatalogError::FileNotFound(path.display().to_string()));
    }
    let json = fs::read_to_string(path)
      .map_err(|e| CatalogError::IoError(path.display().to_string(), e.to_string()))?;
    Self::from_json_str(&json)
  }

  /// The catalog shipped with the binary
  pub fn embedded() -> Result<Self, CatalogError> {
    Self::from_json_str(EMBEDDED_CATALOG)
  }

  pub fn curriculum(&self) -> &Curriculum {
    &self.curriculum
  }

  pub fn subjects(&self) -> &[Subject] {
    &self.curriculum.subjects
  }

  pub fn subject(&self, id: &str) -> Option<&Subject> {
    self.curriculum.subjects.iter().find(|s| s.id == id)
  }

  pub fn subject_index(&self, id: &str) -> Option<usize> {
    self.curriculum.subjects.iter().position(|s| s.id == id)
  }

  pub fn locate_slug(&self, slug: &str) -> Option<MaterialLocation> {
    self.by_slug.get(slug).copied()
  }

  pub fn material_by_slug(&self, slug: &str) -> Option<&Material> {
    let loc = self.locate_slug(slug)?;
    self
      .curriculum
      .subjects
      .get(loc.subject)?
      .topics
      .get(loc.topic)?
      .subtopics
      .get(loc.subtopic)?
      .materials
      .get(loc.material)
  }

  /// Every material in catalog order
  pub fn materials(&self) -> impl Iterator<Item = &Material> {
    self
      .curriculum
      .subjects
      .iter()
      .flat_map(|s| s.topics.iter())
      .flat_map(|t| t.subtopics.iter())
      .flat_map(|st| st.materials.iter())
  }

  pub fn material_count(&self) -> usize {
    self.by_slug.len()
  }
}

/// Catalog loading errors.
#[derive(Debug)]
pub enum CatalogError {
  FileNotFound(String),
  IoError(String, String),
  ParseError(String),
  DuplicateSlug(String),
  DuplicateId(&'static str, String),
}

impl std::fmt::Display for CatalogError {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match self {
      CatalogError::FileNotFound(path) => write!(f, "Catalog file not found: {}", path),
      CatalogError::IoError(path, err) => write!(f, "IO error reading {}: {}", path, err),
      CatalogError::ParseError(err) => write!(f, "Catalog parse error: {}", err),
      CatalogError::DuplicateSlug(slug) => write!(f, "Duplicate material slug: {}", slug),
      CatalogError::DuplicateId(kind, id) => write!(f, "Duplicate {} id: {}", kind, id),
    }
  }
}

impl std::error::Error for CatalogError {}

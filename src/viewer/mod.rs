//! Content viewer: decides how a selected material is presented.

pub mod embed;
pub mod sequence;

pub use embed::{legacy_embed_url, player_embed_url, PlayerOptions};
pub use sequence::MaterialSequence;

use crate::config;
use crate::domain::{Material, MaterialCategory, ReactionCounts, ReactionKind};

/// The rendering branch chosen for a material
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MaterialBody {
  /// Structured provider video driven by the playback controller
  Player { video_id: String, embed_url: String },
  /// Legacy watch URL rewritten for a plain frame
  LegacyFrame { embed_url: String },
  /// Video with no usable source. Terminal, not an error.
  VideoMissing,
  /// Article or problem text (or the placeholder)
  Text { body: String, placeholder: bool },
}

impl MaterialBody {
  pub fn for_material(material: &Material, options: &PlayerOptions) -> Self {
    match material.category {
      MaterialCategory::Video => {
        if let Some(id) = material.structured_video_id() {
          Self::Player {
            video_id: id.to_string(),
            embed_url: player_embed_url(id, options),
          }
        } else if let Some(path) = material.legacy_path() {
          Self::LegacyFrame {
            embed_url: legacy_embed_url(path),
          }
        } else {
          Self::VideoMissing
        }
      }
      MaterialCategory::Article | MaterialCategory::Problem => match material.body_text() {
        Some(body) => Self::Text {
          body: body.trim().to_string(),
          placeholder: false,
        },
        None => Self::Text {
          body: config::EMPTY_BODY_PLACEHOLDER.to_string(),
          placeholder: true,
        },
      },
    }
  }

  pub fn kind(&self) -> &'static str {
    match self {
      Self::Player { .. } => "player",
      Self::LegacyFrame { .. } => "legacy",
      Self::VideoMissing => "missing",
      Self::Text { .. } => "text",
    }
  }
}

/// One chip in the reaction bar
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReactionChip {
  pub kind: &'static str,
  pub icon: &'static str,
  pub tooltip: &'static str,
  pub count: u32,
}

pub fn reaction_chips(counts: &ReactionCounts) -> Vec<ReactionChip> {
  ReactionKind::ALL
    .iter()
    .map(|kind| ReactionChip {
      kind: kind.as_str(),
      icon: kind.icon(),
      tooltip: kind.tooltip(),
      count: counts.get(*kind),
    })
    .collect()
}

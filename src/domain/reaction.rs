use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ReactionKind {
  Fire,
  Heart,
  ThumbsUp,
  ThumbsDown,
}

impl ReactionKind {
  /// Display order in the reaction bar
  pub const ALL: [ReactionKind; 4] = [Self::Fire, Self::Heart, Self::ThumbsUp, Self::ThumbsDown];

  pub fn from_str(s: &str) -> Option<Self> {
    match s {
      "fire" => Some(Self::Fire),
      "heart" => Some(Self::Heart),
      "thumbsUp" | "thumbs_up" => Some(Self::ThumbsUp),
      "thumbsDown" | "thumbs_down" => Some(Self::ThumbsDown),
      _ => None,
    }
  }

  pub fn as_str(&self) -> &'static str {
    match self {
      Self::Fire => "fire",
      Self::Heart => "heart",
      Self::ThumbsUp => "thumbsUp",
      Self::ThumbsDown => "thumbsDown",
    }
  }

  /// Tooltip shown on the reaction chip
  pub fn tooltip(&self) -> &'static str {
    match self {
      Self::Fire => "Insightful!",
      Self::Heart => "Love it",
      Self::ThumbsUp => "Helpful",
      Self::ThumbsDown => "Not helpful",
    }
  }

  pub fn icon(&self) -> &'static str {
    match self {
      Self::Fire => "🔥",
      Self::Heart => "❤️",
      Self::ThumbsUp => "👍",
      Self::ThumbsDown => "👎",
    }
  }
}

/// Per-material reaction counters. Client-local: never written back to the catalog.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ReactionCounts {
  pub fire: u32,
  pub heart: u32,
  pub thumbs_up: u32,
  pub thumbs_down: u32,
}

impl ReactionCounts {
  pub fn get(&self, kind: ReactionKind) -> u32 {
    match kind {
      ReactionKind::Fire => self.fire,
      ReactionKind::Heart => self.heart,
      ReactionKind::ThumbsUp => self.thumbs_up,
      ReactionKind::ThumbsDown => self.thumbs_down,
    }
  }

  fn slot(&mut self, kind: ReactionKind) -> &mut u32 {
    match kind {
      ReactionKind::Fire => &mut self.fire,
      ReactionKind::Heart => &mut self.heart,
      ReactionKind::ThumbsUp => &mut self.thumbs_up,
      ReactionKind::ThumbsDown => &mut self.thumbs_down,
    }
  }

  /// Increment exactly one counter by one
  pub fn react(&mut self, kind: ReactionKind) {
    let slot = self.slot(kind);
    *slot = slot.saturating_add(1);
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_reaction_kind_from_str() {
    assert_eq!(ReactionKind::from_str("fire"), Some(ReactionKind::Fire));
    assert_eq!(ReactionKind::from_str("heart"), Some(ReactionKind::Heart));
    assert_eq!(ReactionKind::from_str("thumbsUp"), Some(ReactionKind::ThumbsUp));
    assert_eq!(ReactionKind::from_str("thumbs_down"), Some(ReactionKind::ThumbsDown));
    assert_eq!(ReactionKind::from_str("clap"), None);
    assert_eq!(ReactionKind::from_str(""), None);
  }

  #[test]
  fn test_reaction_kind_as_str_roundtrip() {
    for kind in ReactionKind::ALL {
      assert_eq!(ReactionKind::from_str(kind.as_str()), Some(kind));
    }
  }

  #[test]
  fn test_reactions_independent_per_kind() {
    let base = ReactionCounts { fire: 4, heart: 4, thumbs_up: 4, thumbs_down: 4 };
    let mut counts = base;

    counts.react(ReactionKind::Fire);
    counts.react(ReactionKind::Fire);
    counts.react(ReactionKind::Fire);
    counts.react(ReactionKind::Heart);

    assert_eq!(
      counts,
      ReactionCounts { fire: 7, heart: 5, thumbs_up: 4, thumbs_down: 4 }
    );
  }

  #[test]
  fn test_reactions_never_decrease() {
    let mut counts = ReactionCounts::default();
    let mut previous = counts;
    for i in 0..40 {
      counts.react(ReactionKind::ALL[i % 4]);
      for kind in ReactionKind::ALL {
        assert!(counts.get(kind) >= previous.get(kind));
      }
      previous = counts;
    }
    assert_eq!(counts.thumbs_down, 10);
  }

  #[test]
  fn test_reaction_saturates_at_max() {
    let mut counts = ReactionCounts { thumbs_up: u32::MAX, ..Default::default() };
    counts.react(ReactionKind::ThumbsUp);
    assert_eq!(counts.thumbs_up, u32::MAX);
  }
}

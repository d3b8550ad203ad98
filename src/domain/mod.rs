pub mod curriculum;
pub mod material;
pub mod reaction;

pub use curriculum::{Curriculum, LayoutHint, Subject, Subtopic, Topic};
pub use material::{Difficulty, Material, MaterialCategory, VideoRef};
pub use reaction::{ReactionCounts, ReactionKind};

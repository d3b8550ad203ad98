//! Deep-link query string: `?subject=<id>&topic=<id>&material=<id>`.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeepLink {
  #[serde(default)]
  pub subject: Option<String>,
  #[serde(default)]
  pub topic: Option<String>,
  #[serde(default)]
  pub material: Option<String>,
}

impl DeepLink {
  pub fn none() -> Self {
    Self::default()
  }

  pub fn subject(subject: &str) -> Self {
    Self {
      subject: Some(subject.to_string()),
      ..Self::default()
    }
  }

  pub fn topic(subject: &str, topic: &str) -> Self {
    Self {
      subject: Some(subject.to_string()),
      topic: Some(topic.to_string()),
      material: None,
    }
  }

  pub fn material(subject: &str, topic: &str, material: &str) -> Self {
    Self {
      subject: Some(subject.to_string()),
      topic: Some(topic.to_string()),
      material: Some(material.to_string()),
    }
  }

  pub fn is_empty(&self) -> bool {
    self.subject.is_none() && self.topic.is_none() && self.material.is_none()
  }

  /// Query string including the leading `?`, or empty for no selection.
  ///
  /// Keys are written outermost first and stop at the first missing level, so a
  /// subject-only link never carries empty `topic`/`material` keys.
  pub fn to_query_string(&self) -> String {
    let mut pairs = Vec::with_capacity(3);
    for (key, value) in [
      ("subject", &self.subject),
      ("topic", &self.topic),
      ("material", &self.material),
    ] {
      match value {
        Some(v) => pairs.push(format!("{}={}", key, urlencoding::encode(v))),
        None => break,
      }
    }

    if pairs.is_empty() {
      String::new()
    } else {
      format!("?{}", pairs.join("&"))
    }
  }

  /// Link to `base` carrying this selection
  pub fn href(&self, base: &str) -> String {
    format!("{}{}", base, self.to_query_string())
  }
}

//! Embed URLs for the two supported video shapes.

use crate::config;

/// Player options baked into the structured embed URL
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerOptions {
  pub autoplay: bool,
  pub color: String,
}

impl Default for PlayerOptions {
  fn default() -> Self {
    Self {
      autoplay: false,
      color: config::PLAYER_ACCENT_COLOR.to_string(),
    }
  }
}

/// Embed URL for a structured provider video id.
///
/// Branding and related-video chrome are switched off and inline playback is
/// enabled so mobile browsers do not force their native player.
pub fn player_embed_url(video_id: &str, options: &PlayerOptions) -> String {
  format!(
    "{}/{}?autoplay={}&color={}&badge=0&autopause=0&player_id=0&app_id={}&playsinline=1",
    config::PLAYER_BASE_URL,
    urlencoding::encode(video_id),
    u8::from(options.autoplay),
    urlencoding::encode(&options.color),
    config::PLAYER_APP_ID,
  )
}

/// Rewrite a legacy watch URL into its embeddable form.
///
/// `watch?v=` becomes `embed/` (first occurrence only), then autoplay and
/// inline-playback flags are appended. Parameters that followed the video id
/// keep a valid query string: `watch?v=abc&t=10` becomes `embed/abc?t=10&...`.
pub fn legacy_embed_url(path: &str) -> String {
  let embed = match path.split_once("watch?v=") {
    Some((base, rest)) => {
      let rest = match (rest.find('&'), rest.find('?')) {
        (Some(amp), q) if q.is_none_or(|q| amp < q) => rest.replacen('&', "?", 1),
        _ => rest.to_string(),
      };
      format!("{}embed/{}", base, rest)
    }
    None => path.to_string(),
  };
  let sep = if embed.contains('?') { '&' } else { '?' };
  format!("{}{}autoplay=1&playsinline=1", embed, sep)
}

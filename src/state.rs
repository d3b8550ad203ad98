//! Application state shared by all handlers.

use std::sync::Arc;

use crate::content::Catalog;

/// Application state passed to all handlers
#[derive(Clone)]
pub struct AppState {
  /// Immutable catalog, loaded once at startup
  pub catalog: Arc<Catalog>,
}

impl AppState {
  pub fn new(catalog: Catalog) -> Self {
    Self {
      catalog: Arc::new(catalog),
    }
  }
}

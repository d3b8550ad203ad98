//! Curriculum content: the static catalog and how it is loaded.
//!
//! The catalog comes from `data/curriculum.json` compiled into the binary,
//! unless `config.toml` or `CATALOG_PATH` points at a replacement file.

pub mod catalog;

pub use catalog::{Catalog, CatalogError, MaterialLocation};

use crate::config;

/// Load the catalog from the configured override, or the embedded copy.
pub fn load_catalog() -> Result<Catalog, CatalogError> {
  let catalog = match config::load_catalog_path() {
    Some(path) => Catalog::load_file(&path)?,
    None => Catalog::embedded()?,
  };

  tracing::info!(
    "Loaded catalog '{}': {} subjects, {} materials",
    catalog.curriculum().title,
    catalog.subjects().len(),
    catalog.material_count()
  );

  Ok(catalog)
}

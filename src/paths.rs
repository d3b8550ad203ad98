//! Filesystem locations used at runtime.
//!
//! ## Environment Variables
//!
//! - `DATA_DIR`: Override the base data directory (default: "data")
//! - `STATIC_DIR`: Override where `/static` assets are served from (default: "static")

use std::env;
use std::sync::OnceLock;

static DATA_DIR_VALUE: OnceLock<String> = OnceLock::new();
static STATIC_DIR_VALUE: OnceLock<String> = OnceLock::new();

/// Base data directory (from DATA_DIR env var or default "data")
pub fn data_dir() -> &'static str {
  DATA_DIR_VALUE.get_or_init(|| env::var("DATA_DIR").unwrap_or_else(|_| "data".to_string()))
}

/// Directory served under `/static`
pub fn static_dir() -> &'static str {
  STATIC_DIR_VALUE.get_or_init(|| env::var("STATIC_DIR").unwrap_or_else(|_| "static".to_string()))
}

/// Default location of a catalog override file inside the data directory
pub fn catalog_file() -> String {
  format!("{}/curriculum.json", data_dir())
}
